//! Address descriptor capability (§3 "Address descriptor").
//!
//! The source threads four function pointers (extract, hash, compare,
//! release) through every switch operation. Per the Design Notes (§9) this
//! becomes a single trait; ownership/`Drop` retire the "release" operation
//! entirely, so only extract/hash/compare remain as trait methods.

use std::cmp::Ordering;
use std::hash::Hash;

use crate::packet::Packet;

/// Capability bundle the switch uses over an opaque destination address
/// type `Self::Address`.
///
/// Implementations must be total orders consistent with `Eq`/`Hash`
/// (matching addresses hash and compare equal) — the host table's
/// correctness (§4.1 invariant) depends on it.
pub trait AddressPolicy {
    type Address: Clone + Eq + Hash + Ord;

    /// Extract the destination address from a packet's payload.
    fn destination(&self, packet: &Packet<Self::Address>) -> Self::Address;

    /// Number of distinct addresses `Self::Address` can represent, if
    /// bounded. `Switch::create` uses this to reject a port count that
    /// could never have every port assigned a distinct address (§7,
    /// `RegisterFailed`). `None` means unbounded or unknown — the default,
    /// and correct for any policy without a fixed-width encoding.
    fn address_space_size(&self) -> Option<u128> {
        None
    }
}

/// Fixed-width opaque address, the default 4-byte key from §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedBytesAddress<const WIDTH: usize>(pub [u8; WIDTH]);

impl<const WIDTH: usize> FixedBytesAddress<WIDTH> {
    pub fn new(bytes: [u8; WIDTH]) -> Self {
        Self(bytes)
    }
}

/// Total-order comparison result, kept as a standalone type only where the
/// spec's text explicitly calls for a three-way result (§3); elsewhere
/// `std::cmp::Ordering` is used directly since it already is this type.
pub type CompareResult = Ordering;

/// The default address policy: addresses are read verbatim from the
/// packet's header field, compared/hashed structurally. Most callers use
/// this rather than writing their own [`AddressPolicy`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedBytesPolicy<const WIDTH: usize>;

impl<const WIDTH: usize> AddressPolicy for FixedBytesPolicy<WIDTH> {
    type Address = FixedBytesAddress<WIDTH>;

    fn destination(&self, packet: &Packet<Self::Address>) -> Self::Address {
        packet.destination.clone()
    }

    fn address_space_size(&self) -> Option<u128> {
        256u128.checked_pow(WIDTH as u32)
    }
}
