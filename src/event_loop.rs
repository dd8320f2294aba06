//! Event-simulator façade (§4.7, §6 "Event-simulator façade").
//!
//! A single-threaded, non-suspending dispatcher: pop the soonest event,
//! advance current time to its firing time, look its id up in the event
//! table, invoke the callback if one is registered. No part of this runs
//! concurrently with itself — §5 rules out cooperative yield points inside
//! a callback, and this implementation never creates any.

use std::hash::Hash;

use crate::containers::MinHeap;
use crate::event::{Event, EventTable, LoopControl};
use crate::time::TimeValue;

/// Owned discrete-event loop state: the event table, the pending-event
/// heap, current time, and the terminate flag. Per the Design Notes (§9),
/// this used to be process-global state in the source; here it is just
/// fields of a value, so multiple independent loops are multiple owned
/// `EventLoop`s with no synchronisation needed between them.
pub struct EventLoop<T: TimeValue, Id: Eq + Hash, Arg> {
    table: EventTable<Id, Arg>,
    heap: MinHeap<Event<Id, Arg, T>, fn(&Event<Id, Arg, T>, &Event<Id, Arg, T>) -> std::cmp::Ordering>,
    current_time: T,
    should_terminate: bool,
}

impl<T: TimeValue, Id: Eq + Hash, Arg> EventLoop<T, Id, Arg> {
    /// `init` (§6): installs the time profile via `T`'s monomorphization
    /// and an initial current-time value.
    pub fn new(initial_time: T) -> Self {
        Self {
            table: EventTable::new(),
            heap: MinHeap::new(Event::compare_by_time),
            current_time: initial_time,
            should_terminate: false,
        }
    }

    pub fn current_time(&self) -> &T {
        &self.current_time
    }

    pub fn pending_count(&self) -> usize {
        self.heap.size()
    }

    /// `register_event` (§6): installs or replaces the callback for `id`.
    /// The callback receives a [`LoopControl`] handle — the only thing it
    /// can do to the loop itself is request termination (§5).
    pub fn register_event(
        &mut self,
        id: Id,
        callback: impl FnMut(&mut LoopControl<'_>, Arg) + 'static,
    ) {
        self.table.register(id, callback);
    }

    /// `invoke_event`/`schedule` (§6/§4.7): firing time is
    /// `current_time + delay`, computed via `TimeValue::accumulate` on a
    /// copy of `delay`.
    pub fn schedule(&mut self, id: Id, arg: Arg, delay: T) {
        let mut firing_time = self.current_time.clone();
        firing_time.accumulate(&delay);
        self.heap.insert(Event {
            id,
            arg,
            time: firing_time,
        });
    }

    pub fn set_should_terminate(&mut self) {
        self.should_terminate = true;
    }

    /// Drains the heap in non-decreasing firing-time order until it is
    /// empty or `set_should_terminate` was called from inside a callback
    /// (checked between dispatches, never inside one — §5).
    pub fn run(&mut self) {
        while !self.should_terminate {
            let Some(event) = self.heap.pop_min() else {
                break;
            };
            self.current_time = event.time;
            tracing::trace!("dispatching event");
            let mut control = LoopControl::new(&mut self.should_terminate);
            self.table.dispatch(&event.id, &mut control, event.arg);
        }
    }

    /// `terminate` (§6): releases the table, heap (and every queued
    /// event's argument via `Drop`), and current-time. Equivalent to
    /// dropping the loop; provided as a named operation to match the
    /// façade in §6.
    pub fn terminate(self) {
        drop(self);
    }
}
