use super::bvh_tree::BvhNodeKind;
use super::{Bvh, BvhNodeId, LeafData};
use crate::bounding_volume::BoundingVolume;

impl<H: LeafData, V: BoundingVolume> Bvh<H, V> {
    /// Removes the leaf at index `id` from this tree.
    ///
    /// The leaf's sibling is promoted into their common parent's slot, so the leaf,
    /// its sibling, and the now-redundant parent collapse into a single node. Ancestor
    /// volumes are recomputed from the former parent up to the root. Removing the last
    /// leaf empties the tree.
    ///
    /// If the promoted sibling was itself a leaf, its `(data, node index)` relocation
    /// is returned so the caller can refresh its leaf lookup.
    pub fn remove(&mut self, id: BvhNodeId) -> Option<(H, BvhNodeId)> {
        debug_assert!(self.node(id).is_leaf());

        let Some(parent) = self.node(id).parent else {
            // Removing the root leaf empties the tree.
            self.root = None;
            let _ = self.nodes.remove(id.to_usize());
            return None;
        };

        let sibling = match self.node(parent).kind {
            BvhNodeKind::Internal { left, right } => {
                if left == id {
                    right
                } else {
                    left
                }
            }
            // A node with a child below it is internal by construction.
            BvhNodeKind::Leaf(_) => unreachable!(),
        };

        // Promote the sibling into the parent slot. The parent's own parent link is
        // left untouched: only the node's subtree content changes.
        let promoted = self.nodes.remove(sibling.to_usize());
        let parent_node = self.node_mut(parent);
        parent_node.volume = promoted.volume;
        parent_node.kind = promoted.kind;

        let relocated = if let Some((left, right)) = self.node(parent).children() {
            self.node_mut(left).parent = Some(parent);
            self.node_mut(right).parent = Some(parent);
            None
        } else {
            self.node(parent).leaf_data().map(|data| (data, parent))
        };

        let _ = self.nodes.remove(id.to_usize());
        self.refit_from(parent);

        relocated
    }
}
