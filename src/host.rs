//! Host table: port↔address binding and the per-port delivery sink (§4.1).
//!
//! Grounded on the original `host_table.c`/`host_table.h` contract (fixed
//! array of port slots plus an address→port hash map) and, for the Rust
//! shape of "host descriptor", on the teacher's registry pattern in
//! `reactor/registry.rs` (`ReactorRegistry`: parallel `HashMap` indexes kept
//! in sync under one owner, register/unregister pairs). Unlike the
//! teacher's registry, whose indexes are each wrapped in an `RwLock` for
//! concurrent readers across threads, this table has a single owner — the
//! switch — so plain fields suffice; see §5, "the core is single-threaded
//! and non-suspending".

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{RegisterError, RegisterResult};
use crate::packet::Packet;

/// Receives packets delivered to a bound port.
///
/// This is the "opaque host handle plus send-packet callback" pair from §3
/// collapsed into one trait object — the handle's data lives inside the
/// implementor.
pub trait HostSink<A> {
    fn deliver(&mut self, packet: Packet<A>);
}

struct HostEntry<A> {
    address: A,
    sink: Box<dyn HostSink<A>>,
}

/// Fixed-length port table plus an address→port reverse index.
///
/// Invariant (checked in tests): every active port's address appears in
/// the reverse index pointing back at that port, and the reverse index has
/// no other entries.
pub struct HostTable<A: Eq + Hash + Clone> {
    ports: Vec<Option<HostEntry<A>>>,
    address_to_port: HashMap<A, usize>,
}

impl<A: Eq + Hash + Clone> HostTable<A> {
    pub fn new(num_ports: usize) -> Self {
        let mut ports = Vec::with_capacity(num_ports);
        ports.resize_with(num_ports, || None);
        Self {
            ports,
            address_to_port: HashMap::new(),
        }
    }

    pub fn num_ports(&self) -> usize {
        self.ports.len()
    }

    fn in_range(&self, port: usize) -> bool {
        port < self.ports.len()
    }

    /// Bind a host to a port. Fails if the port is out of range or already
    /// bound — re-binding without an explicit `deregister` is rejected
    /// (spec §9 open question, preserved).
    pub fn register(
        &mut self,
        port: usize,
        address: A,
        sink: Box<dyn HostSink<A>>,
    ) -> RegisterResult {
        if !self.in_range(port) {
            return Err(RegisterError::InvalidPort(port));
        }
        if self.ports[port].is_some() {
            return Err(RegisterError::AlreadyBound(port));
        }

        self.address_to_port.insert(address.clone(), port);
        self.ports[port] = Some(HostEntry { address, sink });
        tracing::debug!(port, "host registered");
        Ok(())
    }

    pub fn deregister(&mut self, port: usize) -> RegisterResult {
        if !self.in_range(port) {
            return Err(RegisterError::InvalidPort(port));
        }
        let Some(entry) = self.ports[port].take() else {
            return Err(RegisterError::NotBound(port));
        };
        self.address_to_port.remove(&entry.address);
        tracing::debug!(port, "host deregistered");
        Ok(())
    }

    /// Resolve the port bound to `address`, if any.
    pub fn lookup_port(&self, address: &A) -> Option<usize> {
        self.address_to_port.get(address).copied()
    }

    /// Whether `port` currently has a bound host.
    pub fn is_active(&self, port: usize) -> bool {
        self.in_range(port) && self.ports[port].is_some()
    }

    /// Address bound to `port`, if active.
    pub fn address_of(&self, port: usize) -> Option<&A> {
        self.ports.get(port)?.as_ref().map(|e| &e.address)
    }

    /// Deliver `packet` to the host bound at `port`. Returns `false`
    /// (silently, per §4.4) if the port has no active host.
    pub fn deliver(&mut self, port: usize, packet: Packet<A>) -> bool {
        match self.ports.get_mut(port).and_then(|slot| slot.as_mut()) {
            Some(entry) => {
                entry.sink.deliver(packet);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        received: Vec<Packet<u32>>,
    }

    impl HostSink<u32> for RecordingSink {
        fn deliver(&mut self, packet: Packet<u32>) {
            self.received.push(packet);
        }
    }

    #[test]
    fn register_then_lookup_round_trips() {
        let mut table = HostTable::new(4);
        table.register(2, 42, Box::new(RecordingSink::default())).unwrap();
        assert_eq!(table.lookup_port(&42), Some(2));
        assert_eq!(table.address_of(2), Some(&42));
        assert!(table.is_active(2));
    }

    #[test]
    fn deregister_clears_both_directions() {
        let mut table = HostTable::new(4);
        table.register(1, 7, Box::new(RecordingSink::default())).unwrap();
        table.deregister(1).unwrap();
        assert_eq!(table.lookup_port(&7), None);
        assert!(!table.is_active(1));
        assert_eq!(table.address_of(1), None);
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let mut table = HostTable::new(2);
        assert_eq!(
            table.register(5, 1, Box::new(RecordingSink::default())),
            Err(RegisterError::InvalidPort(5))
        );
        assert_eq!(table.deregister(5), Err(RegisterError::InvalidPort(5)));
    }

    #[test]
    fn double_register_without_deregister_is_rejected() {
        let mut table = HostTable::new(2);
        table.register(0, 1, Box::new(RecordingSink::default())).unwrap();
        assert_eq!(
            table.register(0, 2, Box::new(RecordingSink::default())),
            Err(RegisterError::AlreadyBound(0))
        );
    }

    #[test]
    fn deregister_unbound_port_is_rejected() {
        let mut table: HostTable<u32> = HostTable::new(2);
        assert_eq!(table.deregister(0), Err(RegisterError::NotBound(0)));
    }

    #[test]
    fn invariant_holds_across_random_register_deregister_sequence() {
        let mut table = HostTable::new(8);
        let mut expected: Vec<Option<u32>> = vec![None; 8];

        let ops: [(usize, u32, bool); 10] = [
            (0, 10, true),
            (1, 11, true),
            (0, 10, true), // duplicate register, should fail and not change state
            (1, 0, false), // deregister
            (1, 22, true),
            (3, 33, true),
            (3, 0, false),
            (3, 0, false), // double deregister, should fail
            (7, 77, true),
            (7, 0, false),
        ];

        for (port, addr, is_register) in ops {
            if is_register {
                if table.register(port, addr, Box::new(RecordingSink::default())).is_ok() {
                    expected[port] = Some(addr);
                }
            } else if table.deregister(port).is_ok() {
                expected[port] = None;
            }
        }

        for (port, addr) in expected.iter().enumerate() {
            match addr {
                Some(a) => {
                    assert!(table.is_active(port));
                    assert_eq!(table.lookup_port(a), Some(port));
                    assert_eq!(table.address_of(port), Some(a));
                }
                None => {
                    assert!(!table.is_active(port));
                    assert_eq!(table.address_of(port), None);
                }
            }
        }
    }
}
