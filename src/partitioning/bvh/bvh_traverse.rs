use super::bvh_tree::BvhNodeKind;
use super::{Bvh, BvhNodeId, BvhNodeView, LeafData};
use crate::bounding_volume::BoundingVolume;
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

impl<H: LeafData, V: BoundingVolume> Bvh<H, V> {
    /// Performs a simultaneous traversal of `self` and `other`, calling `f` on every
    /// pair of leaves whose volumes overlap.
    ///
    /// Whole pairs of subtrees are pruned as soon as their enclosing volumes fail the
    /// overlap test. When both sides still need subdividing, the side with the larger
    /// measure is subdivided first, which keeps the number of pairwise overlap tests
    /// well below the naive quadratic count for reasonably balanced trees.
    ///
    /// `f` may fail; the first failure aborts the traversal and is returned as-is.
    /// On success, returns the number of leaf pairs emitted. The same unordered pair
    /// is never emitted twice.
    pub fn potential_contacts_with<E>(
        &self,
        other: &Self,
        f: &mut impl FnMut(H, H) -> Result<(), E>,
    ) -> Result<u32, E> {
        match (self.root, other.root) {
            (Some(a), Some(b)) => self.subtree_contacts_with(a, other, b, f),
            // An empty side contributes no contact at all.
            _ => Ok(0),
        }
    }

    /// Calls `f` on every overlapping pair of distinct leaves of `self`.
    ///
    /// Intra-subtree pairs are found by recursing into each internal node, then the
    /// node's two children are traversed against each other exactly like two separate
    /// trees would be. Each unordered pair is emitted at most once.
    pub fn self_potential_contacts<E>(
        &self,
        f: &mut impl FnMut(H, H) -> Result<(), E>,
    ) -> Result<u32, E> {
        match self.root {
            Some(root) => self.self_node_contacts(root, f),
            None => Ok(0),
        }
    }

    fn self_node_contacts<E>(
        &self,
        id: BvhNodeId,
        f: &mut impl FnMut(H, H) -> Result<(), E>,
    ) -> Result<u32, E> {
        match self.node(id).children() {
            None => Ok(0),
            Some((left, right)) => {
                let mut count = self.self_node_contacts(left, f)?;
                count += self.self_node_contacts(right, f)?;
                count += self.subtree_contacts_with(left, self, right, f)?;
                Ok(count)
            }
        }
    }

    fn subtree_contacts_with<E>(
        &self,
        a: BvhNodeId,
        other: &Self,
        b: BvhNodeId,
        f: &mut impl FnMut(H, H) -> Result<(), E>,
    ) -> Result<u32, E> {
        let node_a = self.node(a);
        let node_b = other.node(b);

        if !node_a.volume.intersects(&node_b.volume) {
            return Ok(0);
        }

        // Determine which side to subdivide: the only subdividable one, or the one
        // with the largest measure when both are internal.
        match (node_a.kind, node_b.kind) {
            (BvhNodeKind::Leaf(data_a), BvhNodeKind::Leaf(data_b)) => {
                f(data_a, data_b)?;
                Ok(1)
            }
            (BvhNodeKind::Internal { left, right }, BvhNodeKind::Leaf(_)) => {
                Ok(self.subtree_contacts_with(left, other, b, f)?
                    + self.subtree_contacts_with(right, other, b, f)?)
            }
            (BvhNodeKind::Leaf(_), BvhNodeKind::Internal { left, right }) => {
                Ok(self.subtree_contacts_with(a, other, left, f)?
                    + self.subtree_contacts_with(a, other, right, f)?)
            }
            (
                BvhNodeKind::Internal { left, right },
                BvhNodeKind::Internal {
                    left: other_left,
                    right: other_right,
                },
            ) => {
                if node_a.volume.volume() >= node_b.volume.volume() {
                    Ok(self.subtree_contacts_with(left, other, b, f)?
                        + self.subtree_contacts_with(right, other, b, f)?)
                } else {
                    Ok(self.subtree_contacts_with(a, other, other_left, f)?
                        + self.subtree_contacts_with(a, other, other_right, f)?)
                }
            }
        }
    }

    /// An in-order (left subtree, node, right subtree) iterator over every node of
    /// this tree, internal nodes included.
    ///
    /// The traversal is lazy and restartable. It is meant for diagnostics and
    /// visualization; queries never rely on it.
    pub fn iter(&self) -> BvhInOrderIter<'_, H, V> {
        BvhInOrderIter {
            bvh: self,
            stack: SmallVec::new(),
            descend: self.root,
        }
    }
}

/// In-order iterator over all the nodes of a [`Bvh`]. See [`Bvh::iter`].
pub struct BvhInOrderIter<'a, H, V> {
    bvh: &'a Bvh<H, V>,
    stack: SmallVec<[BvhNodeId; TRAVERSAL_STACK_SIZE]>,
    descend: Option<BvhNodeId>,
}

impl<'a, H: LeafData, V: BoundingVolume> Iterator for BvhInOrderIter<'a, H, V> {
    type Item = BvhNodeView<'a, H, V>;

    fn next(&mut self) -> Option<Self::Item> {
        // Push the left spine of the pending subtree, then yield the deepest node and
        // schedule its right subtree.
        while let Some(id) = self.descend {
            self.stack.push(id);
            self.descend = self.bvh.node(id).children().map(|(left, _)| left);
        }

        let id = self.stack.pop()?;
        self.descend = self.bvh.node(id).children().map(|(_, right)| right);

        Some(BvhNodeView {
            node: self.bvh.node(id),
        })
    }
}
