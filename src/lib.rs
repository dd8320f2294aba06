//! Cycle-accurate iSLIP-scheduled crossbar switch, plus a generic
//! discrete-event simulator runtime.
//!
//! The switch (`switch`, `voq`, `islip`, `host`, `address`, `packet`,
//! `config`) and the event loop (`event_loop`, `event`, `time`) are
//! independent: the switch is driven one `tick` at a time by whatever
//! caller owns it, and nothing in this crate wires a `Switch` into an
//! `EventLoop` automatically — see `Design Notes`/`DESIGN.md` for why that
//! composition is left to the caller rather than baked in here.

pub mod address;
pub mod config;
pub mod containers;
pub mod error;
pub mod event;
pub mod event_loop;
pub mod host;
pub mod islip;
pub mod packet;
pub mod switch;
pub mod time;
pub mod voq;

pub use address::{AddressPolicy, FixedBytesAddress, FixedBytesPolicy};
pub use config::SwitchConfig;
pub use error::{CreationError, CreationResult, RegisterError, RegisterResult};
pub use event::{Event, EventTable, LoopControl};
pub use event_loop::EventLoop;
pub use host::{HostSink, HostTable};
pub use islip::{IslipState, Matching};
pub use packet::Packet;
pub use switch::{Switch, SwitchStats};
pub use time::{CustomTime, RealTime, TimeValue, UnsignedTime};
pub use voq::VoqMatrix;
