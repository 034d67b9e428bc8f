//! Authored camera keyframes and the validated set they form.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::FlypathError;
use crate::util::hash::hash_vec3_slices;
use crate::Result;

/// One authored camera shot: where the camera sits, what it looks at, and
/// the overlay text shown while it is the current step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Camera position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
    /// Headline shown for this step.
    pub label: String,
    /// Secondary line shown under the label.
    pub subtext: String,
    /// Optional long-form copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Keyframe {
    /// Keyframe with empty overlay text.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            label: String::new(),
            subtext: String::new(),
            description: None,
        }
    }

    /// Set the label and subtext.
    #[must_use]
    pub fn with_text(
        mut self,
        label: impl Into<String>,
        subtext: impl Into<String>,
    ) -> Self {
        self.label = label.into();
        self.subtext = subtext.into();
        self
    }
}

/// Overlay content for one step of the flythrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caption<'a> {
    /// Zero-based step index.
    pub step: usize,
    /// Total number of steps.
    pub total: usize,
    /// Headline.
    pub label: &'a str,
    /// Secondary line.
    pub subtext: &'a str,
    /// Optional long-form copy.
    pub description: Option<&'a str>,
}

/// On-disk layout: a list of `[[keyframe]]` tables.
#[derive(Serialize, Deserialize)]
struct KeyframeFile {
    #[serde(rename = "keyframe", default)]
    keyframes: Vec<Keyframe>,
}

/// Ordered, immutable sequence of at least two keyframes.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeSet {
    keyframes: Vec<Keyframe>,
}

impl KeyframeSet {
    /// Validate and wrap `keyframes`.
    ///
    /// Fails with [`FlypathError::TooFewKeyframes`] when fewer than two are
    /// given.
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self> {
        if keyframes.len() < 2 {
            return Err(FlypathError::TooFewKeyframes {
                count: keyframes.len(),
            });
        }
        Ok(Self { keyframes })
    }

    /// Parse a keyframe set from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: KeyframeFile = toml::from_str(text)
            .map_err(|e| FlypathError::KeyframeParse(e.to_string()))?;
        Self::new(file.keyframes)
    }

    /// Load a keyframe set from a TOML file of `[[keyframe]]` tables.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_toml(&content)?;
        log::info!(
            "Loaded {} keyframes from '{}'",
            set.len(),
            path.display()
        );
        Ok(set)
    }

    /// Serialize to TOML (pretty-printed).
    pub fn to_toml(&self) -> Result<String> {
        let file = KeyframeFile {
            keyframes: self.keyframes.clone(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| FlypathError::KeyframeParse(e.to_string()))
    }

    /// Number of keyframes (always at least two).
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Keyframe at `index`.
    pub fn get(&self, index: usize) -> Option<&Keyframe> {
        self.keyframes.get(index)
    }

    /// First keyframe.
    pub fn first(&self) -> &Keyframe {
        &self.keyframes[0]
    }

    /// All keyframes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.keyframes.iter()
    }

    /// Camera positions in order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.keyframes.iter().map(|k| k.position).collect()
    }

    /// Look-at targets in order.
    pub fn targets(&self) -> Vec<Vec3> {
        self.keyframes.iter().map(|k| k.target).collect()
    }

    /// Digest of the geometry (positions and targets).
    ///
    /// Text changes do not affect the curves and leave the fingerprint
    /// unchanged.
    pub fn fingerprint(&self) -> u64 {
        hash_vec3_slices(&[&self.positions(), &self.targets()])
    }

    /// Overlay content for `step`, if it is in range.
    pub fn caption(&self, step: usize) -> Option<Caption<'_>> {
        self.keyframes.get(step).map(|k| Caption {
            step,
            total: self.keyframes.len(),
            label: &k.label,
            subtext: &k.subtext,
            description: k.description.as_deref(),
        })
    }

    /// Nine-shot orbit around a hypercar parked near the origin: front
    /// three-quarter, wheel close-up, flank, rear wing, top-down, low rear,
    /// wide side orbit, front quarter and the hero front shot.
    pub fn showcase() -> Self {
        let shot = |p: [f32; 3], t: [f32; 3], label: &str, subtext: &str| {
            Keyframe::new(Vec3::from_array(p), Vec3::from_array(t))
                .with_text(label, subtext)
        };
        Self {
            keyframes: vec![
                shot(
                    [2.5, 1.4, 4.0],
                    [-1.09, 0.4, 0.0],
                    "THE GHOST",
                    "INITIATING SEQUENCE",
                ),
                shot(
                    [0.6, 0.35, 1.8],
                    [-0.21, 0.35, 1.43],
                    "PRECISION",
                    "CARBON CERAMIC BRAKES",
                ),
                shot(
                    [2.8, 0.9, 1.0],
                    [-1.09, 0.6, 0.5],
                    "AERODYNAMICS",
                    "SCULPTED BY WIND",
                ),
                shot(
                    [1.0, 1.6, -3.5],
                    [-1.11, 1.13, -2.10],
                    "DOWNFORCE",
                    "ACTIVE AERO SYSTEM",
                ),
                // Small z offset keeps the top-down view off the up axis.
                shot(
                    [-1.09, 4.5, 0.1],
                    [-1.09, 0.0, 0.0],
                    "LIGHTWEIGHT",
                    "FULL CARBON MONOCOQUE",
                ),
                shot(
                    [-4.93, 1.32, -4.46],
                    [-1.09, 0.5, -0.5],
                    "VELOCITY",
                    "400+ KM/H TOP SPEED",
                ),
                shot(
                    [-5.50, 1.00, 0.00],
                    [-1.09, 0.5, 0.0],
                    "G-FORCE",
                    "2.0G LATERAL ACCELERATION",
                ),
                shot(
                    [-4.00, 0.80, 3.00],
                    [-1.09, 0.5, 0.8],
                    "AGILITY",
                    "ELECTRONIC DIFFERENTIAL",
                ),
                shot(
                    [-1.09, 0.5, 3.8],
                    [-1.09, 0.6, 1.0],
                    "LEGACY",
                    "SPIRIT OF PERFORMANCE",
                ),
            ],
        }
    }
}

impl Default for KeyframeSet {
    fn default() -> Self {
        Self::showcase()
    }
}

impl<'a> IntoIterator for &'a KeyframeSet {
    type Item = &'a Keyframe;
    type IntoIter = std::slice::Iter<'a, Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
