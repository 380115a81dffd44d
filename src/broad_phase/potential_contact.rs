use crate::broad_phase::BroadPhaseError;
use crate::partitioning::LeafData;

/// A pair of colliders whose bounding volumes overlap, making them candidates for
/// exact narrow-phase collision testing.
///
/// The pair is unordered: consumers must treat `(a, b)` and `(b, a)` as the same
/// contact. Potential contacts are created transiently per query and never persisted
/// by the broad phase.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PotentialContact<H> {
    /// The first collider of the pair.
    pub collider1: H,
    /// The second collider of the pair.
    pub collider2: H,
}

impl<H: LeafData> PotentialContact<H> {
    /// Creates a new potential contact between two colliders.
    pub fn new(collider1: H, collider2: H) -> Self {
        Self {
            collider1,
            collider2,
        }
    }

    /// Checks if `self` and `other` designate the same unordered collider pair.
    pub fn same_pair(&self, other: &Self) -> bool {
        (self.collider1 == other.collider1 && self.collider2 == other.collider2)
            || (self.collider1 == other.collider2 && self.collider2 == other.collider1)
    }
}

/// A capacity-bounded buffer of potential contacts.
///
/// The narrow phase typically works with fixed-size contact storage, so the sink
/// makes running out of room an explicit [`BroadPhaseError::CapacityExceeded`]
/// failure instead of an out-of-bounds write. The same sink can be reused across
/// ticks by calling [`Self::clear`] between queries.
pub struct PotentialContactSink<H> {
    contacts: Vec<PotentialContact<H>>,
    capacity: usize,
}

impl<H: LeafData> PotentialContactSink<H> {
    /// Creates a sink that accepts at most `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: Vec::new(),
            capacity,
        }
    }

    /// Creates a sink without any capacity bound.
    pub fn unbounded() -> Self {
        Self::with_capacity(usize::MAX)
    }

    /// Appends one contact, failing if the sink is at capacity.
    pub fn push(&mut self, contact: PotentialContact<H>) -> Result<(), BroadPhaseError> {
        if self.contacts.len() >= self.capacity {
            return Err(BroadPhaseError::CapacityExceeded);
        }

        self.contacts.push(contact);
        Ok(())
    }

    /// The contacts collected so far.
    #[inline]
    pub fn contacts(&self) -> &[PotentialContact<H>] {
        &self.contacts
    }

    /// The number of contacts collected so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Is this sink empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Empties the sink, keeping its capacity bound.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}
