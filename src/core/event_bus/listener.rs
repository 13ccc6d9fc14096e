//=========================================================================
// Listener Handle
//=========================================================================
//
// Shared, identity-comparable wrapper around an event callback.
//
// A handle is returned unchanged by `EventBus::on` so the caller can later
// remove it with `EventBus::off`. Cloning a handle shares the callback;
// two handles are equal only when they point at the same allocation.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

//=== Listener ============================================================

/// Callback registered on an [`EventBus`](super::EventBus).
///
/// Receives the trigger's receiver by mutable reference and returns nothing.
pub struct Listener<R> {
    callback: Rc<RefCell<dyn FnMut(&mut R)>>,
}

impl<R> Listener<R> {
    /// Wraps a closure into a new, uniquely identified listener.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&mut R) + 'static,
    {
        Self {
            callback: Rc::new(RefCell::new(callback)),
        }
    }

    /// Returns `true` if both handles refer to the same callback.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.callback), Rc::as_ptr(&other.callback))
    }

    /// Invokes the callback.
    ///
    /// Returns `false` without calling anything if the callback is already
    /// running further up the stack (re-entrant trigger).
    pub(super) fn invoke(&self, receiver: &mut R) -> bool {
        match self.callback.try_borrow_mut() {
            Ok(mut callback) => {
                (*callback)(receiver);
                true
            }
            Err(_) => false,
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl<R> Clone for Listener<R> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<R> PartialEq for Listener<R> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<R> Eq for Listener<R> {}

impl<R> fmt::Debug for Listener<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("ptr", &Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

//=========================================================================
// Tests
//=========================================================================
