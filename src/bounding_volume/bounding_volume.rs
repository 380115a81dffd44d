use crate::math::{Point, Real};

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of shapes. They usually have constant time
/// intersection and inclusion tests. Two bounding volumes must also be mergeable into a
/// bigger bounding volume enclosing both inputs.
pub trait BoundingVolume: Clone {
    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point<Real>;

    /// Checks if this bounding volume intersects with another one.
    fn intersects(&self, _: &Self) -> bool;

    /// Merges this bounding volume with another one. The merge is done in-place.
    ///
    /// The result must enclose both inputs: a merge never shrinks.
    fn merge(&mut self, _: &Self);

    /// Merges this bounding volume with another one.
    fn merged(&self, _: &Self) -> Self;

    /// The measure of this bounding volume (its volume in 3D).
    ///
    /// Non-negative, and zero only for degenerate (zero-extent) volumes.
    fn volume(&self) -> Real;

    /// The cost of enlarging this bounding volume so it also encloses `other`.
    ///
    /// This is only a heuristic used to select insertion subtrees. It does not have to
    /// equal `self.merged(other).volume() - self.volume()` exactly, but it must grow
    /// monotonically with it.
    fn growth(&self, other: &Self) -> Real;
}
