use crate::StoreError;
use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

/// A wrapper for a callback which is notified after every successful
/// [dispatch()](crate::StoreRef::dispatch()) of a
/// [Store](crate::Store). The callback receives no arguments; use
/// [StoreRef::state()](crate::StoreRef::state()) to read the new
/// state.
pub struct Callback(Rc<dyn Fn() -> Result<(), StoreError>>);

impl Callback {
    pub fn new<C: Fn() + 'static>(closure: C) -> Self {
        Callback(Rc::new(move || {
            closure();
            Ok(())
        }))
    }

    /// A callback which may fail. The error is returned from the
    /// [dispatch()](crate::StoreRef::dispatch()) that notified it, and
    /// any listeners after it in the same notification are skipped.
    pub fn fallible<C: Fn() -> Result<(), StoreError> + 'static>(closure: C) -> Self {
        Callback(Rc::new(closure))
    }

    pub fn emit(&self) -> Result<(), StoreError> {
        (self.0)()
    }
}

impl Clone for Callback {
    fn clone(&self) -> Self {
        Callback(self.0.clone())
    }
}

impl<C> From<C> for Callback
where
    C: Fn() + 'static,
{
    fn from(closure: C) -> Self {
        Callback::new(closure)
    }
}

/// One registration of a [Callback]. Subscribing the same callback
/// twice creates two listeners with their own ids.
#[derive(Clone)]
pub(crate) struct Listener {
    id: u64,
    callback: Callback,
}

impl Listener {
    pub fn notify(&self) -> Result<(), StoreError> {
        self.callback.emit()
    }
}

/// The listener registry of a store.
///
/// The list is kept behind an [Rc] and copied on write: a dispatch
/// takes a snapshot by cloning the [Rc], so a subscribe/unsubscribe
/// made while listeners are being notified only affects the next
/// snapshot.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: Cell<u64>,
    listeners: RefCell<Rc<Vec<Listener>>>,
}

impl Listeners {
    pub fn subscribe(self: &Rc<Self>, callback: Callback) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        Rc::make_mut(&mut *self.listeners.borrow_mut()).push(Listener { id, callback });

        Subscription {
            id,
            listeners: Rc::downgrade(self),
            subscribed: Cell::new(true),
        }
    }

    /// The listeners to notify for a dispatch, in registration order.
    pub fn snapshot(&self) -> Rc<Vec<Listener>> {
        self.listeners.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn remove(&self, id: u64) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(index) = listeners.iter().position(|listener| listener.id == id) {
            Rc::make_mut(&mut *listeners).remove(index);
        }
    }
}

/// Returned by [StoreRef::subscribe()](crate::StoreRef::subscribe())
/// and [Observable::subscribe()](crate::Observable::subscribe()).
///
/// Dropping a `Subscription` does not remove the listener; call
/// [Subscription::unsubscribe()].
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
    subscribed: Cell<bool>,
}

impl Subscription {
    /// Remove the listener from the store. Calling this more than
    /// once does nothing.
    pub fn unsubscribe(&self) {
        if !self.subscribed.replace(false) {
            return;
        }

        if let Some(listeners) = self.listeners.upgrade() {
            listeners.remove(self.id);
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed.get()
    }
}
