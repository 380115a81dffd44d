//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real};
use num::Zero;

/// A Bounding Sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the bounding sphere.
    pub center: Point<Real>,
    /// The radius of the bounding sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    fn merge(&mut self, other: &BoundingSphere) {
        let dir = other.center - self.center;
        let distance_squared = dir.norm_squared();
        let radius_diff = other.radius - self.radius;

        if radius_diff * radius_diff >= distance_squared {
            // One sphere encloses the other. Keep the larger one, exactly.
            if other.radius > self.radius {
                *self = *other;
            }
        } else {
            // Partially overlapping or disjoint spheres.
            let distance = distance_squared.sqrt();
            let new_radius = (distance + self.radius + other.radius) * 0.5;
            if !distance.is_zero() {
                self.center += dir * ((new_radius - self.radius) / distance);
            }
            self.radius = new_radius;
        }
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn volume(&self) -> Real {
        4.0 / 3.0 * core::f64::consts::PI as Real * self.radius * self.radius * self.radius
    }

    #[inline]
    fn growth(&self, other: &BoundingSphere) -> Real {
        let merged = self.merged(other);
        merged.radius * merged.radius - self.radius * self.radius
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bounding_volume::BoundingVolume;
    use crate::math::{Point, Real};

    fn sphere(center: [Real; 3], radius: Real) -> BoundingSphere {
        BoundingSphere::new(Point::new(center[0], center[1], center[2]), radius)
    }

    #[test]
    fn merge_of_contained_sphere_is_exact() {
        let big = sphere([0.0, 0.0, 0.0], 5.0);
        let small = sphere([0.0, 0.0, 0.0], 2.0);

        assert_eq!(big.merged(&small), big);
        assert_eq!(small.merged(&big), big);
    }

    #[test]
    fn merge_of_partially_overlapping_spheres() {
        let a = sphere([0.0, 0.0, 0.0], 1.0);
        let b = sphere([4.0, 0.0, 0.0], 1.0);
        let merged = a.merged(&b);

        assert_relative_eq!(merged.center, Point::new(2.0, 0.0, 0.0));
        assert_relative_eq!(merged.radius, 3.0);
        // Merging never shrinks.
        assert!(merged.radius >= a.radius && merged.radius >= b.radius);
    }

    #[test]
    fn merge_of_identical_spheres_is_identity() {
        let a = sphere([1.0, 2.0, 3.0], 1.5);
        assert_eq!(a.merged(&a), a);
    }

    #[test]
    fn intersects_is_reflexive_and_symmetric() {
        let a = sphere([0.0, 0.0, 0.0], 5.0);
        let b = sphere([3.0, 0.0, 0.0], 1.0);
        let degenerate = sphere([7.0, 7.0, 7.0], 0.0);

        assert!(a.intersects(&a));
        assert!(degenerate.intersects(&degenerate));
        assert!(a.intersects(&b) && b.intersects(&a));
    }

    #[test]
    fn far_spheres_dont_intersect() {
        let a = sphere([0.0, 0.0, 0.0], 1.0);
        let b = sphere([100.0, 0.0, 0.0], 1.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn degenerate_sphere_has_zero_volume_and_growth() {
        let degenerate = sphere([1.0, 0.0, 0.0], 0.0);
        assert_eq!(degenerate.volume(), 0.0);

        // Growing a sphere by a volume it already encloses costs nothing.
        let big = sphere([0.0, 0.0, 0.0], 5.0);
        assert_eq!(big.growth(&degenerate), 0.0);

        // The converse enlarges the degenerate sphere.
        assert!(degenerate.growth(&big) > 0.0);
    }

    #[test]
    fn growth_increases_with_distance() {
        let a = sphere([0.0, 0.0, 0.0], 1.0);
        let near = sphere([2.0, 0.0, 0.0], 1.0);
        let far = sphere([10.0, 0.0, 0.0], 1.0);
        assert!(a.growth(&near) < a.growth(&far));
    }
}
