use crate::bounding_volume::BoundingVolume;
use crate::broad_phase::{BroadPhaseError, PotentialContact, PotentialContactSink};
use crate::partitioning::{Bvh, BvhInOrderIter, BvhNodeId, LeafData};
use crate::utils::hashmap::HashMap;

/// One coarse spatial partition.
///
/// A group owns a dynamic BVH over the colliders registered into it, plus an O(1)
/// collider-to-leaf lookup kept in lockstep with the tree's live leaves. Node
/// identities never leave the group, so the tree's derived-volume invariant can only
/// be affected through [`Self::update`].
pub struct CoarseGroup<H, V> {
    tree: Bvh<H, V>,
    leaves: HashMap<H, BvhNodeId>,
}

impl<H, V> Default for CoarseGroup<H, V> {
    fn default() -> Self {
        Self {
            tree: Bvh::default(),
            leaves: HashMap::default(),
        }
    }
}

impl<H: LeafData, V: BoundingVolume> CoarseGroup<H, V> {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of colliders registered in this group.
    #[inline]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Does this group contain no collider?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Is this collider registered in this group?
    #[inline]
    pub fn contains(&self, collider: H) -> bool {
        self.leaves.contains_key(&collider)
    }

    /// Read-only access to the underlying bounding-volume hierarchy.
    pub fn bvh(&self) -> &Bvh<H, V> {
        &self.tree
    }

    /// Registers a collider with its current bounding volume.
    ///
    /// Fails with [`BroadPhaseError::DuplicateEntity`] if the collider is already
    /// registered in this group.
    pub fn add(&mut self, collider: H, volume: V) -> Result<(), BroadPhaseError> {
        if self.leaves.contains_key(&collider) {
            return Err(BroadPhaseError::DuplicateEntity);
        }

        for (data, id) in self.tree.insert(volume, collider) {
            let _ = self.leaves.insert(data, id);
        }

        log::trace!("coarse group grew to {} colliders.", self.leaves.len());
        Ok(())
    }

    /// Unregisters a collider, removing its leaf from the tree.
    ///
    /// Fails with [`BroadPhaseError::NotFound`] if the collider isn't registered.
    pub fn remove(&mut self, collider: H) -> Result<(), BroadPhaseError> {
        let leaf = self
            .leaves
            .remove(&collider)
            .ok_or(BroadPhaseError::NotFound)?;

        if let Some((data, id)) = self.tree.remove(leaf) {
            let _ = self.leaves.insert(data, id);
        }

        log::trace!("coarse group shrank to {} colliders.", self.leaves.len());
        Ok(())
    }

    /// Replaces the bounding volume of a registered collider.
    ///
    /// The leaf is removed from the tree and reinserted with the new volume, so the
    /// collider keeps participating in every future query from its new position.
    ///
    /// Fails with [`BroadPhaseError::NotFound`] if the collider isn't registered.
    pub fn update(&mut self, collider: H, volume: V) -> Result<(), BroadPhaseError> {
        self.remove(collider)?;
        self.add(collider, volume)
    }

    /// The current bounding volume of a registered collider, in O(1).
    ///
    /// Fails with [`BroadPhaseError::NotFound`] if the collider isn't registered.
    pub fn find(&self, collider: H) -> Result<&V, BroadPhaseError> {
        let leaf = self.leaves.get(&collider).ok_or(BroadPhaseError::NotFound)?;
        Ok(self.tree.leaf_volume(*leaf))
    }

    /// In-order iteration over every node of this group's tree, for diagnostics and
    /// visualization. An empty group yields an empty sequence.
    pub fn iter(&self) -> BvhInOrderIter<'_, H, V> {
        self.tree.iter()
    }

    /// Collects the potential contacts between this group's colliders and `other`'s
    /// into `sink`.
    ///
    /// Returns the number of contacts pushed, or fails with
    /// [`BroadPhaseError::CapacityExceeded`] as soon as `sink` is full.
    pub fn potential_contacts_with(
        &self,
        other: &Self,
        sink: &mut PotentialContactSink<H>,
    ) -> Result<u32, BroadPhaseError> {
        self.tree
            .potential_contacts_with(&other.tree, &mut |collider1, collider2| {
                sink.push(PotentialContact::new(collider1, collider2))
            })
    }

    /// Collects the potential contacts between pairs of this group's own colliders
    /// into `sink`.
    ///
    /// Returns the number of contacts pushed, or fails with
    /// [`BroadPhaseError::CapacityExceeded`] as soon as `sink` is full.
    pub fn self_potential_contacts(
        &self,
        sink: &mut PotentialContactSink<H>,
    ) -> Result<u32, BroadPhaseError> {
        self.tree.self_potential_contacts(&mut |collider1, collider2| {
            sink.push(PotentialContact::new(collider1, collider2))
        })
    }
}
