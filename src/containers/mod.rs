//! Generic container primitives consumed by the switch and event loop.
//!
//! The spec treats these as "assumed available" (§1, §4.5): this module
//! pins down the exact contract each consumer needs with thin, purpose-named
//! wrappers, rather than reimplementing a hash table from first principles.
//! The hash-map contract (insert/lookup/remove/size, last-insert-wins on a
//! repeated key) is satisfied directly by `std::collections::HashMap`
//! everywhere it's consumed ([`crate::host::HostTable`],
//! [`crate::event::EventTable`]) — Rust's owned-value semantics mean the
//! "disposer" half of that contract is just `Drop`, so no wrapper type adds
//! anything over the standard one.

pub mod heap;
pub mod ring_queue;

pub use heap::MinHeap;
pub use ring_queue::RingQueue;
