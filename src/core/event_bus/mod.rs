//=========================================================================
// Event Bus
//=========================================================================
//
// Ordered, typed listener registry with synchronous dispatch.
//
// Architecture:
//   on(kind, listener)  → HashMap<E, Vec<Listener<R>>>  (append)
//   off(kind, &listener) → retain non-identical entries
//   trigger(kind, &mut receiver)
//        └─ snapshot Vec<Listener<R>> → invoke each in insertion order
//
// The registry lives behind `Rc<RefCell<..>>` and the bus is a cheap
// shared handle: a listener may hold a clone of the bus and call on()/off()
// while a trigger is in flight. Because dispatch iterates a snapshot, such
// changes only take effect from the next trigger.
//
// Single-threaded by construction (`!Send`).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::rc::Rc;

use log::{trace, warn};

//=== Module Declarations =================================================

mod listener;

//=== Public API ==========================================================

pub use listener::Listener;

//=== Event Kind Trait ====================================================

/// Marker trait for closed event enumerations used as bus keys.
///
/// Typically implemented by a small fieldless enum.
pub trait EventKind: Clone + Copy + Eq + Hash + Debug + 'static {}

//=== EventBus ============================================================

/// Per-owner registry mapping each event kind to an ordered listener list.
///
/// Cloning the bus yields another handle onto the same registry.
pub struct EventBus<E: EventKind, R> {
    listeners: Rc<RefCell<HashMap<E, Vec<Listener<R>>>>>,
}

impl<E: EventKind, R> EventBus<E, R> {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Appends `listener` to the list for `kind` and returns it unchanged.
    ///
    /// Registering the same handle twice creates two entries; it will be
    /// invoked twice per trigger.
    pub fn on(&self, kind: E, listener: Listener<R>) -> Listener<R> {
        self.listeners
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(listener.clone());
        listener
    }

    /// Convenience wrapper: wraps `callback` and registers it.
    pub fn on_fn<F>(&self, kind: E, callback: F) -> Listener<R>
    where
        F: FnMut(&mut R) + 'static,
    {
        self.on(kind, Listener::new(callback))
    }

    /// Removes every entry for `kind` identical to `listener`.
    ///
    /// No-op if nothing matches or `kind` was never registered.
    pub fn off(&self, kind: E, listener: &Listener<R>) {
        if let Some(list) = self.listeners.borrow_mut().get_mut(&kind) {
            list.retain(|l| !l.ptr_eq(listener));
        }
    }

    //--- Dispatch ---------------------------------------------------------

    /// Invokes every listener registered for `kind`, in registration order.
    ///
    /// The list is snapshotted before the first call. A listener that is
    /// already running (nested trigger of the same kind) is skipped.
    pub fn trigger(&self, kind: E, receiver: &mut R) {
        let snapshot: Vec<Listener<R>> = match self.listeners.borrow().get(&kind) {
            Some(list) if !list.is_empty() => list.clone(),
            _ => {
                trace!(target: "event_bus", "{:?}: no listeners", kind);
                return;
            }
        };

        for listener in &snapshot {
            if !listener.invoke(receiver) {
                warn!(
                    target: "event_bus",
                    "{:?}: skipped re-entrant call into a running listener",
                    kind
                );
            }
        }
    }

    //--- Query API --------------------------------------------------------

    /// Number of entries registered for `kind` (duplicates counted).
    pub fn listener_count(&self, kind: E) -> usize {
        self.listeners
            .borrow()
            .get(&kind)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Returns `true` if at least one listener is registered for `kind`.
    pub fn has_listeners(&self, kind: E) -> bool {
        self.listener_count(kind) > 0
    }

    /// Drops every listener for every kind.
    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }
}

//--- Trait Implementations -----------------------------------------------

impl<E: EventKind, R> Clone for EventBus<E, R> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<E: EventKind, R> Default for EventBus<E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventKind, R> Debug for EventBus<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow();
        let mut map = f.debug_map();
        for (kind, list) in listeners.iter() {
            map.entry(kind, &list.len());
        }
        map.finish()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestEvent {
        X,
        Y,
    }

    impl EventKind for TestEvent {}

    /// Receiver that records which callbacks ran, in order.
    #[derive(Default)]
    struct Log {
        calls: Vec<&'static str>,
    }

    fn recorder(name: &'static str) -> Listener<Log> {
        Listener::new(move |log: &mut Log| log.calls.push(name))
    }

    //=====================================================================
    // Ordering Tests
    //=====================================================================

    #[test]
    fn trigger_invokes_in_registration_order() {
        let bus = EventBus::<TestEvent, Log>::new();
        bus.on(TestEvent::X, recorder("cb1"));
        bus.on(TestEvent::X, recorder("cb2"));

        let mut log = Log::default();
        bus.trigger(TestEvent::X, &mut log);

        assert_eq!(log.calls, vec!["cb1", "cb2"]);
    }

    #[test]
    fn trigger_without_listeners_is_noop() {
        let bus = EventBus::<TestEvent, Log>::new();
        let mut log = Log::default();
        bus.trigger(TestEvent::Y, &mut log);
        assert!(log.calls.is_empty());
    }

    #[test]
    fn kinds_are_independent() {
        let bus = EventBus::<TestEvent, Log>::new();
        bus.on(TestEvent::X, recorder("x"));
        bus.on(TestEvent::Y, recorder("y"));

        let mut log = Log::default();
        bus.trigger(TestEvent::Y, &mut log);
        assert_eq!(log.calls, vec!["y"]);
    }

    //=====================================================================
    // Registration Tests
    //=====================================================================

    #[test]
    fn on_returns_same_handle() {
        let bus = EventBus::<TestEvent, Log>::new();
        let cb = recorder("cb");
        let returned = bus.on(TestEvent::X, cb.clone());
        assert!(returned.ptr_eq(&cb));
    }

    #[test]
    fn duplicate_registration_invokes_twice() {
        let bus = EventBus::<TestEvent, Log>::new();
        let cb = recorder("cb");
        bus.on(TestEvent::X, cb.clone());
        bus.on(TestEvent::X, cb.clone());
        assert_eq!(bus.listener_count(TestEvent::X), 2);

        let mut log = Log::default();
        bus.trigger(TestEvent::X, &mut log);
        assert_eq!(log.calls, vec!["cb", "cb"]);
    }

    #[test]
    fn off_removes_only_matching_listener() {
        let bus = EventBus::<TestEvent, Log>::new();
        let cb1 = bus.on(TestEvent::X, recorder("cb1"));
        bus.on(TestEvent::X, recorder("cb2"));

        bus.off(TestEvent::X, &cb1);

        let mut log = Log::default();
        bus.trigger(TestEvent::X, &mut log);
        assert_eq!(log.calls, vec!["cb2"]);
    }

    #[test]
    fn off_removes_all_duplicates() {
        let bus = EventBus::<TestEvent, Log>::new();
        let cb = recorder("cb");
        bus.on(TestEvent::X, cb.clone());
        bus.on(TestEvent::X, recorder("other"));
        bus.on(TestEvent::X, cb.clone());

        bus.off(TestEvent::X, &cb);
        assert_eq!(bus.listener_count(TestEvent::X), 1);
    }

    #[test]
    fn off_unknown_is_noop() {
        let bus = EventBus::<TestEvent, Log>::new();
        let stranger = recorder("stranger");
        bus.off(TestEvent::Y, &stranger);

        bus.on(TestEvent::X, recorder("cb"));
        bus.off(TestEvent::X, &stranger);
        assert_eq!(bus.listener_count(TestEvent::X), 1);
        assert!(!bus.has_listeners(TestEvent::Y));
    }

    #[test]
    fn off_on_other_kind_keeps_listener() {
        let bus = EventBus::<TestEvent, Log>::new();
        let cb = bus.on(TestEvent::X, recorder("cb"));
        bus.off(TestEvent::Y, &cb);
        assert_eq!(bus.listener_count(TestEvent::X), 1);
    }

    //=====================================================================
    // Snapshot Tests
    //=====================================================================

    #[test]
    fn off_during_trigger_does_not_affect_current_dispatch() {
        let bus = EventBus::<TestEvent, Log>::new();
        let victim = recorder("victim");

        let handle = bus.clone();
        let target = victim.clone();
        bus.on_fn(TestEvent::X, move |log: &mut Log| {
            log.calls.push("remover");
            handle.off(TestEvent::X, &target);
        });
        bus.on(TestEvent::X, victim);

        let mut log = Log::default();
        bus.trigger(TestEvent::X, &mut log);
        assert_eq!(log.calls, vec!["remover", "victim"]);

        log.calls.clear();
        bus.trigger(TestEvent::X, &mut log);
        assert_eq!(log.calls, vec!["remover"]);
    }

    #[test]
    fn on_during_trigger_takes_effect_next_time() {
        let bus = EventBus::<TestEvent, Log>::new();
        let handle = bus.clone();
        let mut added = false;
        bus.on_fn(TestEvent::X, move |log: &mut Log| {
            log.calls.push("adder");
            if !added {
                handle.on(TestEvent::X, recorder("late"));
                added = true;
            }
        });

        let mut log = Log::default();
        bus.trigger(TestEvent::X, &mut log);
        assert_eq!(log.calls, vec!["adder"]);

        log.calls.clear();
        bus.trigger(TestEvent::X, &mut log);
        assert_eq!(log.calls, vec!["adder", "late"]);
    }

    #[test]
    fn nested_trigger_of_other_kind_runs() {
        let bus = EventBus::<TestEvent, Log>::new();
        bus.on(TestEvent::Y, recorder("inner"));
        let handle = bus.clone();
        bus.on_fn(TestEvent::X, move |log: &mut Log| {
            log.calls.push("outer");
            handle.trigger(TestEvent::Y, log);
        });

        let mut log = Log::default();
        bus.trigger(TestEvent::X, &mut log);
        assert_eq!(log.calls, vec!["outer", "inner"]);
    }

    #[test]
    fn clear_drops_everything() {
        let bus = EventBus::<TestEvent, Log>::new();
        bus.on(TestEvent::X, recorder("x"));
        bus.on(TestEvent::Y, recorder("y"));
        bus.clear();
        assert!(!bus.has_listeners(TestEvent::X));
        assert!(!bus.has_listeners(TestEvent::Y));
    }
}
