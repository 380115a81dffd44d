/// Error indicating a failure of a broad-phase operation.
///
/// All broad-phase failures are local, synchronous and deterministic: none of them
/// is worth retrying.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BroadPhaseError {
    /// The collider isn't registered in the group it was looked up in.
    #[error("the collider is not registered in this group.")]
    NotFound,
    /// The collider is already registered in the group it was added to.
    #[error("the collider is already registered in this group.")]
    DuplicateEntity,
    /// The potential-contact sink is full.
    #[error("the potential-contact sink reached its fixed capacity.")]
    CapacityExceeded,
}
