//! Event records and the event-id → callback registry (§3 "Event",
//! §4.6 "Event table").
//!
//! The source's disposer-function-pointer half of `register(id, callback,
//! arg_disposer)` is dropped here: per the Design Notes (§9), making the
//! event argument an owned, generic value means `Drop` already runs
//! whatever cleanup the disposer would have — there is nothing left for a
//! second callback to do.

use std::collections::HashMap;
use std::hash::Hash;

use crate::time::TimeValue;

/// One scheduled event: an id, an owned argument, and a firing time.
pub struct Event<Id, Arg, T> {
    pub id: Id,
    pub arg: Arg,
    pub time: T,
}

impl<Id, Arg, T: TimeValue> Event<Id, Arg, T> {
    /// Ordering used by the event heap: strictly by firing time. Equal
    /// times may compare equal regardless of id (§8, "Ordering guarantees").
    pub fn compare_by_time(a: &Self, b: &Self) -> std::cmp::Ordering {
        a.time.compare(&b.time)
    }
}

/// Capability a running callback is handed: the only cancellation surface
/// the core exposes (§5). Deliberately narrower than `&mut EventLoop` —
/// a callback cannot reach the heap or table it is being dispatched from,
/// only flip the flag `run` checks between events.
pub struct LoopControl<'a> {
    should_terminate: &'a mut bool,
}

impl<'a> LoopControl<'a> {
    pub fn new(should_terminate: &'a mut bool) -> Self {
        Self { should_terminate }
    }

    /// `set-should-terminate` (§4.7/§6): checked at the next loop head,
    /// never inside the callback that called it.
    pub fn set_should_terminate(&mut self) {
        *self.should_terminate = true;
    }
}

/// Maps event ids to their callback. Re-registering an id replaces the
/// prior callback (§4.6) — outstanding queued events for that id dispatch
/// through the *new* callback, since lookup happens at dispatch time, not
/// at schedule time.
pub struct EventTable<Id, Arg> {
    handlers: HashMap<Id, Box<dyn FnMut(&mut LoopControl<'_>, Arg)>>,
}

impl<Id: Eq + Hash, Arg> EventTable<Id, Arg> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, id: Id, callback: impl FnMut(&mut LoopControl<'_>, Arg) + 'static) {
        self.handlers.insert(id, Box::new(callback));
    }

    pub fn dispatch(&mut self, id: &Id, control: &mut LoopControl<'_>, arg: Arg) -> bool {
        match self.handlers.get_mut(id) {
            Some(callback) => {
                callback(control, arg);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<Id: Eq + Hash, Arg> Default for EventTable<Id, Arg> {
    fn default() -> Self {
        Self::new()
    }
}
