use super::{Bvh, BvhNodeId, LeafData};
use crate::bounding_volume::BoundingVolume;
use crate::utils::hashset::HashSet;

impl<H: LeafData, V: BoundingVolume + PartialEq> Bvh<H, V> {
    /// Panics if the tree isn't well-formed.
    ///
    /// The tree is well-formed if it is topologically correct (children and parent
    /// indices agree, every arena slot is reachable from the root exactly once) and
    /// geometrically correct (every internal node's volume is exactly the merge of
    /// its children's volumes).
    pub fn assert_well_formed(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.nodes.len(), 0);
            return;
        };

        assert!(self.node(root).parent.is_none());

        let mut visited = HashSet::new();
        let leaf_count = self.assert_well_formed_recurse(root, &mut visited);
        assert_eq!(leaf_count, self.leaf_count());
        assert_eq!(visited.len(), self.nodes.len());
    }

    fn assert_well_formed_recurse(
        &self,
        id: BvhNodeId,
        visited: &mut HashSet<BvhNodeId>,
    ) -> usize {
        assert!(visited.insert(id), "Detected loop: node visited twice.");

        let node = self.node(id);
        match node.children() {
            None => 1,
            Some((left, right)) => {
                assert_eq!(self.node(left).parent, Some(id));
                assert_eq!(self.node(right).parent, Some(id));

                let merged = self.node(left).volume.merged(&self.node(right).volume);
                assert!(
                    node.volume == merged,
                    "An internal node's volume diverged from the merge of its children."
                );

                self.assert_well_formed_recurse(left, visited)
                    + self.assert_well_formed_recurse(right, visited)
            }
        }
    }
}
