use crate::bounding_volume::BoundingVolume;
use crate::broad_phase::{BroadPhaseError, CoarseGroup, PotentialContactSink};
use crate::partitioning::{BvhInOrderIter, BvhNodeView, LeafData};

/// The partition a collider belongs to.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mobility {
    /// Colliders registered once and never moved afterwards.
    Static,
    /// Colliders whose bounding volume is refreshed every tick.
    Moving,
}

/// The broad-phase facade owning one static and one moving [`CoarseGroup`].
///
/// This is a plain value: construct one per simulation and hand it to whatever owns
/// the tick loop. Running several independent simulations just means constructing
/// several broad-phases.
///
/// The per-tick integration contract with the narrow phase is:
/// 1. call [`Self::update`] for every moving collider with a freshly computed
///    bounding volume;
/// 2. call [`Self::potential_contacts`];
/// 3. hand the sink's content to exact narrow-phase testing.
pub struct BroadPhase<H, V> {
    static_group: CoarseGroup<H, V>,
    moving_group: CoarseGroup<H, V>,
}

impl<H, V> Default for BroadPhase<H, V> {
    fn default() -> Self {
        Self {
            static_group: CoarseGroup::default(),
            moving_group: CoarseGroup::default(),
        }
    }
}

impl<H: LeafData, V: BoundingVolume> BroadPhase<H, V> {
    /// A broad-phase with empty static and moving groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// The group colliders with the given mobility are routed to.
    pub fn group(&self, mobility: Mobility) -> &CoarseGroup<H, V> {
        match mobility {
            Mobility::Static => &self.static_group,
            Mobility::Moving => &self.moving_group,
        }
    }

    fn group_mut(&mut self, mobility: Mobility) -> &mut CoarseGroup<H, V> {
        match mobility {
            Mobility::Static => &mut self.static_group,
            Mobility::Moving => &mut self.moving_group,
        }
    }

    /// Registers a collider into the group selected by `mobility`.
    pub fn add(&mut self, mobility: Mobility, collider: H, volume: V) -> Result<(), BroadPhaseError> {
        self.group_mut(mobility).add(collider, volume)
    }

    /// Unregisters a collider from the group selected by `mobility`.
    pub fn remove(&mut self, mobility: Mobility, collider: H) -> Result<(), BroadPhaseError> {
        self.group_mut(mobility).remove(collider)
    }

    /// Replaces the bounding volume of a collider in the group selected by
    /// `mobility`.
    pub fn update(
        &mut self,
        mobility: Mobility,
        collider: H,
        volume: V,
    ) -> Result<(), BroadPhaseError> {
        self.group_mut(mobility).update(collider, volume)
    }

    /// Collects the static-vs-moving potential contacts into `sink` and returns how
    /// many were pushed.
    ///
    /// Moving-vs-moving pairs are deliberately not part of this query; enumerate them
    /// explicitly with [`Self::moving_self_potential_contacts`] when the simulation
    /// wants moving objects to collide with each other.
    pub fn potential_contacts(
        &self,
        sink: &mut PotentialContactSink<H>,
    ) -> Result<u32, BroadPhaseError> {
        self.static_group
            .potential_contacts_with(&self.moving_group, sink)
    }

    /// Collects the moving-vs-moving potential contacts into `sink` and returns how
    /// many were pushed.
    pub fn moving_self_potential_contacts(
        &self,
        sink: &mut PotentialContactSink<H>,
    ) -> Result<u32, BroadPhaseError> {
        self.moving_group.self_potential_contacts(sink)
    }

    /// In-order iteration over the nodes of the static group's tree.
    pub fn iter_static(&self) -> BvhInOrderIter<'_, H, V> {
        self.static_group.iter()
    }

    /// In-order iteration over the nodes of the moving group's tree.
    pub fn iter_moving(&self) -> BvhInOrderIter<'_, H, V> {
        self.moving_group.iter()
    }

    /// Iteration over the nodes of both groups' trees, static first. For diagnostics
    /// and visualization only.
    pub fn iter(&self) -> impl Iterator<Item = BvhNodeView<'_, H, V>> {
        self.iter_static().chain(self.iter_moving())
    }
}
