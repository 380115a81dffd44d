use super::bvh_tree::{BvhNode, BvhNodeKind};
use super::{Bvh, BvhNodeId, LeafData};
use crate::bounding_volume::BoundingVolume;
use arrayvec::ArrayVec;

impl<H: LeafData, V: BoundingVolume> Bvh<H, V> {
    /// Inserts a new leaf with the given `volume` and associated `data`.
    ///
    /// The insertion point is found by descending, at every internal node, into the
    /// child whose volume would grow the least to also enclose `volume`; ties descend
    /// into the right child so insertion is fully deterministic. The reached leaf is
    /// then split: it becomes an internal node whose left child carries its original
    /// payload and whose right child is the new leaf. All ancestor volumes are
    /// recomputed afterwards.
    ///
    /// Returns every `(data, node index)` leaf association created or relocated by
    /// this insertion: both fresh leaves on a split, or just the new root leaf when
    /// the tree was empty. The caller is responsible for mirroring these into any
    /// external leaf lookup it maintains.
    pub fn insert(&mut self, volume: V, data: H) -> ArrayVec<(H, BvhNodeId), 2> {
        let mut relocated = ArrayVec::new();

        let Some(root) = self.root else {
            let root = self.alloc_node(BvhNode {
                volume,
                parent: None,
                kind: BvhNodeKind::Leaf(data),
            });
            self.root = Some(root);
            relocated.push((data, root));
            return relocated;
        };

        // Find the leaf whose subtree absorbs the new volume the cheapest.
        let mut curr = root;
        let existing = loop {
            match self.node(curr).kind {
                BvhNodeKind::Leaf(existing) => break existing,
                BvhNodeKind::Internal { left, right } => {
                    let left_growth = self.node(left).volume.growth(&volume);
                    let right_growth = self.node(right).volume.growth(&volume);
                    curr = if left_growth < right_growth { left } else { right };
                }
            }
        };

        // Split the leaf: its payload moves to a fresh left child, the new leaf
        // becomes the right child.
        let existing_volume = self.node(curr).volume.clone();
        let left = self.alloc_node(BvhNode {
            volume: existing_volume,
            parent: Some(curr),
            kind: BvhNodeKind::Leaf(existing),
        });
        let right = self.alloc_node(BvhNode {
            volume,
            parent: Some(curr),
            kind: BvhNodeKind::Leaf(data),
        });
        self.node_mut(curr).kind = BvhNodeKind::Internal { left, right };
        self.refit_from(curr);

        relocated.push((existing, left));
        relocated.push((data, right));
        relocated
    }
}
