//! Cycle-accurate switch façade (§4.2, §4.4, §6).
//!
//! Ties the host table, VOQ matrix and iSLIP matcher into the three
//! non-interleaved tick phases from §4.4: ingest, schedule, egress. Ingest
//! for every input completes before any output is scheduled; scheduling
//! completes before any packet is delivered — a tick never interleaves the
//! phases, matching the invariant called out in §4.4.

use crate::address::AddressPolicy;
use crate::config::SwitchConfig;
use crate::error::{CreationError, CreationResult, RegisterResult};
use crate::host::{HostSink, HostTable};
use crate::islip::IslipState;
use crate::packet::Packet;
use crate::voq::VoqMatrix;

/// Counters for the silent-drop boundary (§4.10, added). Purely observable;
/// never consulted by `tick`'s own control flow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SwitchStats {
    pub ingested: u64,
    pub delivered: u64,
    pub dropped_unresolved: u64,
    pub dropped_inactive_output: u64,
}

/// A crossbar switch: `num_ports` in, `num_ports` out, VOQ-buffered,
/// scheduled by iSLIP every tick.
pub struct Switch<P: AddressPolicy> {
    policy: P,
    hosts: HostTable<P::Address>,
    voqs: VoqMatrix<P::Address>,
    islip: IslipState,
    rounds: usize,
    stats: SwitchStats,
}

impl<P: AddressPolicy> Switch<P> {
    /// `create` (§6): builds a switch for `config.num_ports()` ports using
    /// `policy` to resolve destinations. Fails if the configuration can
    /// never produce a working switch (zero ports), or if `policy`'s
    /// address space is too small to ever give every port a distinct
    /// address (`RegisterFailed`, §7).
    pub fn create(config: SwitchConfig, policy: P) -> CreationResult<Self> {
        if config.num_ports() == 0 {
            return Err(CreationError::CreationFailed("num_ports must be > 0"));
        }
        let num_ports = config.num_ports();
        if let Some(space) = policy.address_space_size() {
            if num_ports as u128 > space {
                return Err(CreationError::RegisterFailed(
                    "num_ports exceeds the address policy's address space",
                ));
            }
        }
        Ok(Self {
            policy,
            hosts: HostTable::new(num_ports),
            voqs: VoqMatrix::new(num_ports),
            islip: IslipState::new(num_ports),
            rounds: config.resolved_rounds(),
            stats: SwitchStats::default(),
        })
    }

    pub fn num_ports(&self) -> usize {
        self.hosts.num_ports()
    }

    pub fn stats(&self) -> &SwitchStats {
        &self.stats
    }

    /// `register_host` (§4.1/§6): binds `sink` at `port` under `address`.
    pub fn register_host(
        &mut self,
        port: usize,
        address: P::Address,
        sink: Box<dyn HostSink<P::Address>>,
    ) -> RegisterResult {
        self.hosts.register(port, address, sink)
    }

    /// `deregister_host` (§4.1/§6): unbinds whatever host is at `port`.
    pub fn deregister_host(&mut self, port: usize) -> RegisterResult {
        self.hosts.deregister(port)
    }

    /// `tick` (§4.4): advance the switch by one slot.
    ///
    /// `traffic[i]` is the at-most-one packet offered to input `i` this
    /// slot (§9 open question: one packet per input per tick, preserved).
    pub fn tick(&mut self, traffic: &mut [Option<Packet<P::Address>>]) {
        debug_assert_eq!(traffic.len(), self.num_ports());

        // Phase 1: ingest. Resolve each offered packet's destination and
        // enqueue it into its VOQ cell, or drop it unresolved.
        for (i, slot) in traffic.iter_mut().enumerate() {
            let Some(packet) = slot.take() else {
                continue;
            };
            self.stats.ingested += 1;
            let destination = self.policy.destination(&packet);
            match self.hosts.lookup_port(&destination) {
                Some(o) => {
                    tracing::trace!(input = i, output = o, "ingested packet");
                    self.voqs.push(i, o, packet);
                }
                None => {
                    tracing::debug!(input = i, "dropped packet: unresolved destination");
                    self.stats.dropped_unresolved += 1;
                }
            }
        }

        // Phase 2: schedule. iSLIP matches inputs to outputs over the VOQ
        // request matrix; no packet moves during this phase.
        let requests = self.voqs.request_bits();
        let matching = self.islip.schedule(&requests, self.rounds);
        tracing::trace!("scheduling complete");

        // Phase 3: egress. For each matched input, pop its one packet for
        // this tick and deliver it, or drop it silently if the output's
        // host has since gone inactive (§9 open question, preserved).
        for i in 0..self.num_ports() {
            let Some(o) = matching.assignment[i] else {
                continue;
            };
            let Some(packet) = self.voqs.pop(i, o) else {
                continue;
            };
            if self.hosts.deliver(o, packet) {
                tracing::trace!(input = i, output = o, "delivered packet");
                self.stats.delivered += 1;
            } else {
                tracing::debug!(output = o, "dropped packet: inactive output");
                self.stats.dropped_inactive_output += 1;
            }
        }
    }
}
