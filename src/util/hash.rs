//! Content hashing of geometry for change detection.

use std::hash::{Hash, Hasher};

use glam::Vec3;
use rustc_hash::FxHasher;

/// Hash a single [`Vec3`] by converting each component to bits.
pub fn hash_vec3(v: &Vec3, hasher: &mut impl Hasher) {
    v.x.to_bits().hash(hasher);
    v.y.to_bits().hash(hasher);
    v.z.to_bits().hash(hasher);
}

/// Hash every point of a [`Vec3`] slice, length first.
pub fn hash_vec3_slice(slice: &[Vec3], hasher: &mut impl Hasher) {
    slice.len().hash(hasher);
    for v in slice {
        hash_vec3(v, hasher);
    }
}

/// Digest of several [`Vec3`] slices.
///
/// Every element is hashed: curve identity must change when any single
/// control point moves.
pub fn hash_vec3_slices(slices: &[&[Vec3]]) -> u64 {
    let mut hasher = FxHasher::default();
    slices.len().hash(&mut hasher);
    for slice in slices {
        hash_vec3_slice(slice, &mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_moved_point_changes_the_digest() {
        let a = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
        let mut b = a;
        b[1].x += 1e-3;
        assert_ne!(hash_vec3_slices(&[&a]), hash_vec3_slices(&[&b]));
        assert_eq!(hash_vec3_slices(&[&a]), hash_vec3_slices(&[&a]));
    }

    #[test]
    fn slice_boundaries_matter() {
        let ab = [Vec3::X, Vec3::Y];
        let first = hash_vec3_slices(&[&ab[..1], &ab[1..]]);
        let joined = hash_vec3_slices(&[&ab]);
        assert_ne!(first, joined);
    }
}
