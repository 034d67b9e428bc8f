//! Catmull-Rom curve evaluation over an ordered list of control points.
//!
//! Pure Vec3 → Vec3 math with no renderer dependencies. Segment selection and
//! end-point extrapolation follow the usual open-curve convention: the curve
//! passes through every control point, and the missing outer neighbours of
//! the first and last segments are mirrored (`2·p0 − p1`).

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlypathError;
use crate::Result;

/// Segment lengths below this are treated as coincident points.
const MIN_KNOT_SPACING: f32 = 1e-4;

/// Knot parametrization used between control points.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurveKind {
    /// Knot spacing proportional to the square root of chord length.
    /// Avoids cusps and self-intersections on unevenly spaced points.
    #[default]
    Centripetal,
    /// Knot spacing proportional to chord length.
    Chordal,
    /// Uniform knots with the given tangent tension (0.5 is the classic
    /// Catmull-Rom spline).
    Uniform {
        /// Tangent scale applied to neighbour differences.
        tension: f32,
    },
}

impl CurveKind {
    /// Classic uniform Catmull-Rom.
    pub const UNIFORM: Self = Self::Uniform { tension: 0.5 };
}

/// Cubic polynomial `c0 + c1·w + c2·w² + c3·w³` over one span.
#[derive(Clone, Copy)]
struct CubicSpan {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicSpan {
    /// Hermite form from end points and end tangents.
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn uniform(p: [Vec3; 4], tension: f32) -> Self {
        Self::hermite(
            p[1],
            p[2],
            tension * (p[2] - p[0]),
            tension * (p[3] - p[1]),
        )
    }

    fn non_uniform(p: [Vec3; 4], dt0: f32, dt1: f32, dt2: f32) -> Self {
        let t1 = (p[1] - p[0]) / dt0 - (p[2] - p[0]) / (dt0 + dt1)
            + (p[2] - p[1]) / dt1;
        let t2 = (p[2] - p[1]) / dt1 - (p[3] - p[1]) / (dt1 + dt2)
            + (p[3] - p[2]) / dt2;
        Self::hermite(p[1], p[2], t1 * dt1, t2 * dt1)
    }

    #[inline]
    fn eval(&self, w: f32) -> Vec3 {
        let w2 = w * w;
        self.c0 + self.c1 * w + self.c2 * w2 + self.c3 * (w2 * w)
    }
}

/// An open Catmull-Rom interpolant through at least two control points.
///
/// The parameter `t ∈ [0, 1]` is spread uniformly across spans, so each span
/// covers `1 / (n − 1)` of the parameter range regardless of its length.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCurve {
    points: Vec<Vec3>,
    kind: CurveKind,
}

impl PathCurve {
    /// Fit a curve through `points`.
    ///
    /// Fails with [`FlypathError::TooFewKeyframes`] when fewer than two
    /// points are given.
    pub fn new(points: Vec<Vec3>, kind: CurveKind) -> Result<Self> {
        if points.len() < 2 {
            return Err(FlypathError::TooFewKeyframes {
                count: points.len(),
            });
        }
        Ok(Self { points, kind })
    }

    /// Control points the curve passes through.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Knot parametrization of this curve.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Number of cubic spans (`points − 1`).
    pub fn span_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Point on the curve at parameter `t`.
    ///
    /// `t` is clamped to `[0, 1]`; the curve is never extrapolated. Returns
    /// `None` for a non-finite `t` or when the evaluated point is not finite
    /// (for example when a control point is NaN).
    pub fn sample_at(&self, t: f32) -> Option<Vec3> {
        if !t.is_finite() {
            return None;
        }
        let t = t.clamp(0.0, 1.0);
        let n = self.points.len();

        let scaled = (n - 1) as f32 * t;
        let mut index = scaled.floor() as usize;
        let mut weight = scaled - index as f32;
        if index >= n - 1 {
            index = n - 2;
            weight = 1.0;
        }

        let point = self.span(index).eval(weight);
        point.is_finite().then_some(point)
    }

    /// Build the cubic for span `index` (between points `index` and
    /// `index + 1`).
    fn span(&self, index: usize) -> CubicSpan {
        let n = self.points.len();
        let p1 = self.points[index];
        let p2 = self.points[index + 1];
        let p0 = if index > 0 {
            self.points[index - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if index + 2 < n {
            self.points[index + 2]
        } else {
            p2 * 2.0 - p1
        };
        let p = [p0, p1, p2, p3];

        let exponent = match self.kind {
            CurveKind::Uniform { tension } => {
                return CubicSpan::uniform(p, tension)
            }
            CurveKind::Centripetal => 0.25,
            CurveKind::Chordal => 0.5,
        };

        let mut dt0 = p0.distance_squared(p1).powf(exponent);
        let mut dt1 = p1.distance_squared(p2).powf(exponent);
        let mut dt2 = p2.distance_squared(p3).powf(exponent);

        // Coincident neighbours would divide by zero.
        if dt1 < MIN_KNOT_SPACING {
            dt1 = 1.0;
        }
        if dt0 < MIN_KNOT_SPACING {
            dt0 = dt1;
        }
        if dt2 < MIN_KNOT_SPACING {
            dt2 = dt1;
        }
        CubicSpan::non_uniform(p, dt0, dt1, dt2)
    }
}
