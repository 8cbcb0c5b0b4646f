//! Clonable handles onto a store's dispatch and state, handed to
//! [Middleware](crate::middleware::Middleware) and
//! [Thunk](crate::Thunk)s so they can keep using the store after the
//! call that gave them the handle has returned.

use crate::{Action, StoreError, Value};
use std::rc::{Rc, Weak};

type DispatchFn<State> = dyn Fn(Action<State>) -> Result<Value, StoreError>;

/// A dispatch function: either the raw dispatch of a
/// [Store](crate::Store), one stage of a middleware chain, or the
/// fully composed dispatch of a [StoreRef](crate::StoreRef).
pub struct Dispatcher<State>(Rc<DispatchFn<State>>);

impl<State> Dispatcher<State> {
    pub fn new<F>(dispatch: F) -> Self
    where
        F: Fn(Action<State>) -> Result<Value, StoreError> + 'static,
    {
        Dispatcher(Rc::new(dispatch))
    }

    pub fn dispatch<A: Into<Action<State>>>(&self, action: A) -> Result<Value, StoreError> {
        (self.0)(action.into())
    }

    /// Returns `true` if both dispatchers call the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// A [WeakDispatcher] which does not keep this dispatch function
    /// (or the store behind it) alive.
    pub fn downgrade(&self) -> WeakDispatcher<State> {
        WeakDispatcher(Rc::downgrade(&self.0))
    }
}

/// A weak reference to the function of a [Dispatcher].
pub struct WeakDispatcher<State>(Weak<DispatchFn<State>>);

impl<State> WeakDispatcher<State> {
    /// Returns `None` once every [Dispatcher] sharing the function has
    /// been dropped.
    pub fn upgrade(&self) -> Option<Dispatcher<State>> {
        self.0.upgrade().map(Dispatcher)
    }
}

impl<State> Clone for WeakDispatcher<State> {
    fn clone(&self) -> Self {
        WeakDispatcher(self.0.clone())
    }
}

impl<State> Clone for Dispatcher<State> {
    fn clone(&self) -> Self {
        Dispatcher(self.0.clone())
    }
}

/// Reads the current state of a store.
pub struct GetState<State>(Rc<dyn Fn() -> Rc<State>>);

impl<State> GetState<State> {
    pub fn new<F: Fn() -> Rc<State> + 'static>(get_state: F) -> Self {
        GetState(Rc::new(get_state))
    }

    pub fn get(&self) -> Rc<State> {
        (self.0)()
    }
}

impl<State> Clone for GetState<State> {
    fn clone(&self) -> Self {
        GetState(self.0.clone())
    }
}
