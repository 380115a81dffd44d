//! Spatial partitioning tools.

pub use self::bvh::{Bvh, BvhInOrderIter, BvhNodeId, BvhNodeView, LeafData};

mod bvh;
