//! A minimal push-stream view of a store's state, for interop with
//! reactive libraries.

use crate::{Callback, Store, Subscription};
use std::rc::Rc;

/// Receives the states pushed by an [Observable].
pub trait Observer<State> {
    /// Called with the current state on subscription, and again
    /// after every successful dispatch. Observers which have no
    /// interest in values may keep the default, which does nothing.
    fn next(&self, _state: Rc<State>) {}
}

impl<State, F> Observer<State> for F
where
    F: Fn(Rc<State>),
{
    fn next(&self, state: Rc<State>) {
        self(state)
    }
}

/// Returned by [StoreRef::observable()](crate::StoreRef::observable()).
pub struct Observable<State> {
    store: Rc<Store<State>>,
}

impl<State: 'static> Observable<State> {
    pub(crate) fn new(store: Rc<Store<State>>) -> Self {
        Self { store }
    }

    /// Deliver the current state to `observer` immediately, then the
    /// new state after every dispatch until the returned
    /// [Subscription] is unsubscribed.
    pub fn subscribe<O: Observer<State> + 'static>(&self, observer: O) -> Subscription {
        let observer = Rc::new(observer);
        observer.next(self.store.state());

        let store = Rc::downgrade(&self.store);
        self.store.subscribe(Callback::new(move || {
            if let Some(store) = store.upgrade() {
                observer.next(store.state());
            }
        }))
    }
}
