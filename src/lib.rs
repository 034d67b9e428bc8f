// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven camera flythrough path evaluation.
//!
//! Flypath turns a normalized progress signal (typically a scroll offset)
//! into a camera pose every frame. Authored keyframes are fitted with
//! Catmull-Rom curves, resampled densely for even traversal, smoothed
//! according to the playback mode, rotated with a spinning reference object
//! and finally perturbed by pointer-driven free-look.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - the per-frame camera composer
//! - [`path::KeyframeSet`] - validated, immutable keyframe sequence
//! - [`path::PathCurves`] - coarse and resampled curve pairs
//! - [`playback`] - snap and cinematic smoothing strategies
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame pipeline
//!
//! progress → step index → effective t → curve sample → rotation
//! compensation → free-look offset → render camera.

pub mod camera;
pub mod error;
pub mod options;
pub mod path;
pub mod playback;
pub mod util;

pub use error::FlypathError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FlypathError>;
