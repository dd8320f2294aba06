//! Switch configuration (§4.8, added).
//!
//! Grounded on `mvirt-net`'s `NetworkEntry`/`NicEntry`: a plain struct built
//! with a constructor plus builder-style setters, validated once at the
//! point a real resource is created rather than on every field write.

/// Parameters needed to build a [`crate::switch::Switch`].
#[derive(Debug, Clone, Copy)]
pub struct SwitchConfig {
    pub(crate) num_ports: usize,
    pub(crate) rounds: Option<usize>,
}

impl SwitchConfig {
    /// Starts a config for an `num_ports`-port switch. `rounds` defaults to
    /// `⌈log₂ num_ports⌉` (minimum 1) unless overridden.
    pub fn new(num_ports: usize) -> Self {
        Self {
            num_ports,
            rounds: None,
        }
    }

    /// Overrides the iSLIP round count per tick (§4.3 default is
    /// `default_rounds`; a caller may run fewer or more rounds).
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = Some(rounds);
        self
    }

    pub fn num_ports(&self) -> usize {
        self.num_ports
    }

    pub(crate) fn resolved_rounds(&self) -> usize {
        self.rounds
            .unwrap_or_else(|| crate::islip::IslipState::default_rounds(self.num_ports))
    }
}
