//! Error types for the switch and event-loop façades.
//!
//! Grounded on the teacher's `ManagerError`/`StoreError` style
//! (thiserror-derived enums, one variant per named failure mode, no string
//! formatting inside the variant itself).

use thiserror::Error;

/// Result type for host/port registration operations.
///
/// `Ok(())` corresponds to the spec's `RegisterResult::Ok`.
pub type RegisterResult = Result<(), RegisterError>;

/// Domain errors for [`crate::host::HostTable`] and
/// [`crate::switch::Switch`] registration operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    #[error("port {0} is out of range")]
    InvalidPort(usize),

    #[error("port {0} already has a bound host")]
    AlreadyBound(usize),

    #[error("port {0} has no bound host")]
    NotBound(usize),
}

/// Configuration/creation errors for [`crate::switch::Switch::create`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CreationError {
    /// A required capability (address policy, time operations) was missing
    /// or malformed. The source's vtable-of-function-pointers boundary;
    /// in this crate it surfaces only if a `Custom` time profile is built
    /// with no comparator/accumulator supplied.
    #[error("broken interface: {0}")]
    BrokenInterface(&'static str),

    /// The requested configuration can never produce a working switch
    /// (e.g. zero ports).
    #[error("creation failed: {0}")]
    CreationFailed(&'static str),

    /// The configured port count can never be fully registered under the
    /// address policy's address space (e.g. more ports than the policy's
    /// address type can represent distinct addresses for).
    #[error("registration can never succeed: {0}")]
    RegisterFailed(&'static str),
}

pub type CreationResult<T> = Result<T, CreationError>;
