pub use bvh_traverse::BvhInOrderIter;
pub use bvh_tree::{Bvh, BvhNodeId, BvhNodeView, LeafData};

mod bvh_insert;
mod bvh_remove;
mod bvh_traverse;
mod bvh_tree;
mod bvh_validation;

#[cfg(test)]
mod bvh_tests;
