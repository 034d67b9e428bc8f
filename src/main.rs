//! Headless flythrough simulator.
//!
//! Drives a [`CameraRig`] with a linear progress ramp and writes one JSON
//! record per sampled frame to stdout.

use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use flypath::camera::{CameraPose, CameraRig, FrameInput, ReferenceSpin};
use flypath::options::Options;
use flypath::path::KeyframeSet;
use flypath::playback::PlaybackMode;
use flypath::util::frame_timing::FrameTiming;
use flypath::FlypathError;
use glam::Vec2;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Snap,
    Cinematic,
}

impl From<ModeArg> for PlaybackMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Snap => Self::Snap,
            ModeArg::Cinematic => Self::Cinematic,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "flypath", about = "Simulate a keyframed camera flythrough")]
struct Cli {
    /// TOML file of `[[keyframe]]` tables; the built-in showcase otherwise
    #[arg(long)]
    keyframes: Option<PathBuf>,

    /// TOML options file
    #[arg(long)]
    options: Option<PathBuf>,

    /// Number of frames in the progress ramp from 0 to 1
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Playback mode; the options file decides when omitted
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Enable pointer free-look
    #[arg(long)]
    free_look: bool,

    /// Fixed normalized pointer position
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pointer: Option<Vec<f32>>,

    /// Keep the reference object still
    #[arg(long)]
    no_spin: bool,

    /// Emit one record every N frames
    #[arg(long, default_value_t = 1)]
    every: u32,

    /// Pace frames in real time and use measured delta times
    #[arg(long)]
    realtime: bool,

    /// Print the options JSON schema and exit
    #[arg(long)]
    schema: bool,

    /// Dump the keyframe set as TOML and exit
    #[arg(long)]
    dump_keyframes: bool,
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u32,
    raw_progress: f32,
    effective_t: f32,
    step: usize,
    label: &'a str,
    held: bool,
    reference_yaw: f32,
    pose: CameraPose,
}

fn main() -> Result<(), FlypathError> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.schema {
        return write_json(&Options::json_schema());
    }

    let keyframes = match &cli.keyframes {
        Some(path) => KeyframeSet::load(path)?,
        None => KeyframeSet::showcase(),
    };
    if cli.dump_keyframes {
        let text = keyframes.to_toml()?;
        return std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(FlypathError::Io);
    }

    let mut options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(mode) = cli.mode {
        options.playback.mode = mode.into();
    }
    if cli.free_look {
        options.free_look.enabled = true;
    }
    if cli.no_spin {
        options.reference.spinning = false;
    }
    if cli.fps == 0 {
        return Err(FlypathError::InvalidOption(
            "--fps must be positive".to_owned(),
        ));
    }

    let records = simulate(&cli, keyframes, options)?;
    write_json(&records)
}

fn simulate(
    cli: &Cli,
    keyframes: KeyframeSet,
    options: Options,
) -> Result<Vec<serde_json::Value>, FlypathError> {
    let pointer = cli
        .pointer
        .as_deref()
        .map_or(Vec2::ZERO, |p| Vec2::new(p[0], p[1]));
    let mode = options.playback.mode;
    let free_look_enabled = options.free_look.enabled;
    let mut spin = ReferenceSpin::from_options(&options.reference);
    let mut rig = CameraRig::new(keyframes, options)?;

    let nominal_dt = 1.0 / cli.fps as f32;
    let mut timing = cli.realtime.then(|| FrameTiming::new(cli.fps));
    let every = cli.every.max(1);
    let last = cli.frames.max(1);

    log::info!(
        "Simulating {} frames at {} fps in {:?} mode",
        last + 1,
        cli.fps,
        mode
    );

    let mut records = Vec::new();
    let mut held_frames = 0_u32;
    for frame in 0..=last {
        let delta_time = match timing.as_mut() {
            Some(timing) => {
                while !timing.should_render() {
                    std::thread::sleep(timing.until_next_frame());
                }
                if frame == 0 {
                    timing.delta_time()
                } else {
                    timing.end_frame()
                }
            }
            None => nominal_dt,
        };

        let raw_progress = frame as f32 / last as f32;
        let reference_yaw = spin.advance(delta_time);
        let output = rig.update(&FrameInput {
            raw_progress,
            pointer,
            mode,
            free_look_enabled,
            reference_yaw,
            delta_time,
        });
        if output.held {
            held_frames += 1;
        }

        if frame % every == 0 || frame == last {
            let label = rig
                .keyframes()
                .caption(output.step)
                .map_or("", |caption| caption.label);
            let record = FrameRecord {
                frame,
                raw_progress,
                effective_t: output.effective_t,
                step: output.step,
                label,
                held: output.held,
                reference_yaw,
                pose: output.pose,
            };
            records.push(
                serde_json::to_value(&record)
                    .map_err(|e| FlypathError::Io(e.into()))?,
            );
        }
    }

    if held_frames > 0 {
        log::warn!("{held_frames} frames held their previous pose");
    }
    Ok(records)
}

fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<(), FlypathError> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(|e| FlypathError::Io(e.into()))?;
    out.write_all(b"\n").map_err(FlypathError::Io)
}
