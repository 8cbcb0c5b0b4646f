use crate::{
    dispatcher::WeakDispatcher, init_action, listener::Listeners, Action, Callback, Dispatcher,
    GetState, InvalidAction, Object, Observable, Reducer, StoreError, Subscription, Value,
};
use std::{
    cell::{Cell, RefCell},
    fmt::Debug,
    rc::{Rc, Weak},
};

/// Creates a [StoreRef] from a reducer and an optional preloaded
/// state. [Enhancer]s wrap one of these to change how stores are
/// built.
pub type StoreCreator<State> =
    Rc<dyn Fn(Rc<dyn Reducer<State>>, Option<State>) -> Result<StoreRef<State>, StoreError>>;

/// A transformer over a [StoreCreator], used to install
/// [middleware](crate::apply_middleware()) or other behaviour which
/// cuts across the whole store.
pub type Enhancer<State> = Rc<dyn Fn(StoreCreator<State>) -> StoreCreator<State>>;

/// Create a [StoreRef] which holds the state produced by `reducer`.
///
/// The reducer is run once with the [INIT](crate::action_types::INIT)
/// action before this function returns, receiving the
/// `preloaded_state` if there is one, so the store never exposes an
/// uninitialised state.
///
/// If an `enhancer` is given, creation is delegated entirely to it:
/// the result is `enhancer(base_creator)(reducer, preloaded_state)`.
pub fn create_store<State, R>(
    reducer: R,
    preloaded_state: Option<State>,
    enhancer: Option<Enhancer<State>>,
) -> Result<StoreRef<State>, StoreError>
where
    State: 'static,
    R: Reducer<State> + 'static,
{
    let reducer: Rc<dyn Reducer<State>> = Rc::new(reducer);

    match enhancer {
        Some(enhancer) => {
            let create: StoreCreator<State> = Rc::new(StoreRef::<State>::create);
            enhancer(create)(reducer, preloaded_state)
        }
        None => StoreRef::create(reducer, preloaded_state),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Dispatching,
}

/// Held for as long as a reducer is running. Moves the store back to
/// [Phase::Idle] when dropped, including when the reducer fails or
/// panics.
struct DispatchGuard<'a> {
    phase: &'a Cell<Phase>,
}

impl<'a> DispatchGuard<'a> {
    fn acquire(phase: &'a Cell<Phase>) -> Result<Self, StoreError> {
        match phase.get() {
            Phase::Dispatching => Err(StoreError::Reentrancy),
            Phase::Idle => {
                phase.set(Phase::Dispatching);
                Ok(DispatchGuard { phase })
            }
        }
    }
}

impl<'a> Drop for DispatchGuard<'a> {
    fn drop(&mut self) {
        self.phase.set(Phase::Idle);
    }
}

/// This struct is designed to operate as a central source of truth
/// and "immutable" state within your application.
///
/// The current state of this store ([Store::state()]) can only be
/// modified by dispatching an action via [Store::dispatch()]. Each
/// action is given to the [Reducer] along with the current state,
/// and a new current state is produced. The previous state is never
/// mutated.
///
/// Listeners can subscribe to be notified after every dispatch with
/// [Store::subscribe()].
///
/// A `Store` is always used through a [StoreRef], which may replace
/// the store's raw dispatch with a middleware pipeline.
pub struct Store<State> {
    /// The [Reducer] for this store, which takes actions and produces
    /// the next state.
    reducer: RefCell<Rc<dyn Reducer<State>>>,
    /// The current state of this store.
    state: RefCell<Rc<State>>,
    /// The listeners which are notified after every dispatch.
    listeners: Rc<Listeners>,
    /// Whether a reducer is currently running.
    phase: Cell<Phase>,
}

impl<State> Store<State> {
    /// Get the current `State` stored in this store.
    ///
    /// Modifications to this state need to be performed by
    /// dispatching an action to the store using
    /// [dispatch()](Store::dispatch()).
    pub fn state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }

    /// Dispatch an action to the reducer of this store, bypassing any
    /// middleware, then notify every listener.
    ///
    /// The action must be a plain [Object] (see
    /// [is_plain_object()](crate::is_plain_object())) with a `type`
    /// field, and the reducer must not itself dispatch. Returns the
    /// action that was dispatched.
    pub fn dispatch(&self, action: Action<State>) -> Result<Value, StoreError> {
        let value = match action {
            Action::Value(value) => value,
            Action::Thunk(_) => return Err(InvalidAction::NotPlainObject.into()),
        };

        let record = match &value {
            Value::Object(object) if object.is_plain() => object,
            _ => return Err(InvalidAction::NotPlainObject.into()),
        };

        if record.action_type().is_none() {
            return Err(InvalidAction::MissingType.into());
        }

        self.reduce(record)?;

        let listeners = self.listeners.snapshot();
        for listener in listeners.iter() {
            listener.notify()?;
        }

        Ok(value)
    }

    /// Run the reducer for a validated action and commit its result.
    fn reduce(&self, action: &Object) -> Result<(), StoreError> {
        let _guard = DispatchGuard::acquire(&self.phase)?;

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("reducing action {:?}", action.action_type());
        }

        let reducer = self.reducer.borrow().clone();
        let prev_state = self.state();
        let next_state = reducer.reduce(Some(&prev_state), action)?;
        *self.state.borrow_mut() = next_state;

        Ok(())
    }

    /// Subscribe a [Callback] to be notified after every dispatch.
    ///
    /// The listeners notified by a dispatch are fixed when that
    /// dispatch starts its notification: subscribing or
    /// unsubscribing from inside a listener only takes effect from
    /// the next dispatch (including one made from that listener).
    ///
    /// The store owns its listeners, so a listener which needs the
    /// store should capture a [WeakStoreRef] from
    /// [StoreRef::downgrade()] rather than a [StoreRef], or the store
    /// will never be dropped.
    pub fn subscribe<L: Into<Callback>>(&self, listener: L) -> Subscription {
        self.listeners.subscribe(listener.into())
    }

    /// Replace the reducer currently used by the store, and dispatch
    /// the [INIT](crate::action_types::INIT) action so the new reducer
    /// can populate or migrate the state.
    pub fn replace_reducer(&self, reducer: Rc<dyn Reducer<State>>) -> Result<(), StoreError> {
        log::trace!("replacing reducer");
        *self.reducer.borrow_mut() = reducer;
        self.dispatch(init_action().into()).map(|_| ())
    }

    /// The number of listeners currently subscribed.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// A handle to a [Store], cheap to clone.
///
/// All the store operations are available through this handle. The
/// [dispatch()](StoreRef::dispatch()) of a handle may be different
/// from the raw [Store::dispatch()] when the store was created with
/// an [Enhancer] such as [apply_middleware()](crate::apply_middleware()).
pub struct StoreRef<State> {
    store: Rc<Store<State>>,
    dispatch: Dispatcher<State>,
}

impl<State: 'static> StoreRef<State> {
    /// Build a store without any [Enhancer]; this is the base
    /// [StoreCreator] given to enhancers by [create_store()].
    pub fn create(
        reducer: Rc<dyn Reducer<State>>,
        preloaded_state: Option<State>,
    ) -> Result<Self, StoreError> {
        let preloaded_state = preloaded_state.map(Rc::new);
        let state = reducer.reduce(preloaded_state.as_ref(), &init_action())?;

        let store = Rc::new(Store {
            reducer: RefCell::new(reducer),
            state: RefCell::new(state),
            listeners: Rc::new(Listeners::default()),
            phase: Cell::new(Phase::Idle),
        });

        log::debug!("created store");

        let dispatch = {
            let store = store.clone();
            Dispatcher::new(move |action| store.dispatch(action))
        };

        Ok(Self { store, dispatch })
    }

    /// A handle to the same store which dispatches through `dispatch`
    /// instead.
    pub fn with_dispatcher(&self, dispatch: Dispatcher<State>) -> Self {
        Self {
            store: self.store.clone(),
            dispatch,
        }
    }

    /// A [GetState] which reads this store.
    pub fn get_state(&self) -> GetState<State> {
        let store = self.store.clone();
        GetState::new(move || store.state())
    }

    /// Replace the reducer of this store. See
    /// [Store::replace_reducer()].
    pub fn replace_reducer<R: Reducer<State> + 'static>(
        &self,
        reducer: R,
    ) -> Result<(), StoreError> {
        self.store.replace_reducer(Rc::new(reducer))
    }

    /// A push-stream view of this store's state.
    pub fn observable(&self) -> Observable<State> {
        Observable::new(self.store.clone())
    }
}

impl<State> StoreRef<State> {
    /// Get the current `State` stored in this store.
    pub fn state(&self) -> Rc<State> {
        self.store.state()
    }

    /// Dispatch an action through this handle's dispatch. Without
    /// middleware, this is [Store::dispatch()].
    pub fn dispatch<A: Into<Action<State>>>(&self, action: A) -> Result<Value, StoreError> {
        self.dispatch.dispatch(action)
    }

    /// The dispatch function of this handle.
    pub fn dispatcher(&self) -> Dispatcher<State> {
        self.dispatch.clone()
    }

    /// Subscribe a listener. See [Store::subscribe()].
    pub fn subscribe<L: Into<Callback>>(&self, listener: L) -> Subscription {
        self.store.subscribe(listener)
    }

    /// The underlying [Store].
    pub fn store(&self) -> &Store<State> {
        &self.store
    }

    /// A handle which does not keep the store alive, for use inside
    /// the store's own listeners.
    pub fn downgrade(&self) -> WeakStoreRef<State> {
        WeakStoreRef {
            store: Rc::downgrade(&self.store),
            dispatch: self.dispatch.downgrade(),
        }
    }
}

/// A weak reference to a [StoreRef], created with
/// [StoreRef::downgrade()].
pub struct WeakStoreRef<State> {
    store: Weak<Store<State>>,
    dispatch: WeakDispatcher<State>,
}

impl<State> WeakStoreRef<State> {
    /// Returns `None` once every [StoreRef] sharing this handle's
    /// dispatch has been dropped.
    pub fn upgrade(&self) -> Option<StoreRef<State>> {
        Some(StoreRef {
            store: self.store.upgrade()?,
            dispatch: self.dispatch.upgrade()?,
        })
    }
}

impl<State> Clone for WeakStoreRef<State> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            dispatch: self.dispatch.clone(),
        }
    }
}

impl<State> Clone for StoreRef<State> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            dispatch: self.dispatch.clone(),
        }
    }
}

impl<State> PartialEq for StoreRef<State> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl<State: Debug> Debug for StoreRef<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreRef")
            .field("state", &self.state())
            .field("listeners", &self.store.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        action_types, apply_middleware, create_store, middleware::thunk::thunk, Callback,
        Enhancer, InvalidAction, Middleware, Object, Reducer, StoreError, StoreRef, Thunk, Value,
    };
    use serde_json::json;
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    #[derive(Debug, PartialEq)]
    struct TestState {
        counter: i32,
    }

    struct TestReducer;

    impl Reducer<TestState> for TestReducer {
        fn reduce(
            &self,
            state: Option<&Rc<TestState>>,
            action: &Object,
        ) -> Result<Rc<TestState>, StoreError> {
            let state = match state {
                Some(state) => state.clone(),
                None => Rc::new(TestState { counter: 0 }),
            };

            Ok(if action.is_type("inc") {
                Rc::new(TestState {
                    counter: state.counter + 1,
                })
            } else if action.is_type("dec") {
                Rc::new(TestState {
                    counter: state.counter - 1,
                })
            } else {
                state
            })
        }
    }

    fn counter(state: Option<&Rc<i32>>, action: &Object) -> Result<Rc<i32>, StoreError> {
        let count = state.map(|s| **s).unwrap_or(0);
        Ok(Rc::new(if action.is_type("inc") { count + 1 } else { count }))
    }

    fn inc() -> Object {
        Object::of_type("inc")
    }

    fn new_store() -> StoreRef<TestState> {
        create_store(TestReducer, None, None).unwrap()
    }

    #[test]
    fn initial_state_comes_from_init() {
        let seen: Rc<RefCell<Vec<Object>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_copy = seen.clone();
        let reducer = move |state: Option<&Rc<i32>>, action: &Object| {
            seen_copy.borrow_mut().push(action.clone());
            counter(state, action)
        };

        let store = create_store(reducer, None, None).unwrap();
        assert_eq!(0, *store.state());
        assert_eq!(1, seen.borrow().len());
        assert!(seen.borrow()[0].is_type(action_types::INIT));
    }

    #[test]
    fn preloaded_state() {
        let store = create_store(counter, Some(10), None).unwrap();
        assert_eq!(10, *store.state());
        store.dispatch(inc()).unwrap();
        assert_eq!(11, *store.state());
    }

    #[test]
    fn counts_three_increments() {
        let store = create_store(counter, None, None).unwrap();
        for _ in 0..3 {
            store.dispatch(json!({"type": "inc"})).unwrap();
        }
        assert_eq!(3, *store.state());
    }

    #[test]
    fn dispatch_returns_the_action() {
        let store = new_store();
        let action = Object::of_type("inc").field("payload", "hello");

        let returned = store.dispatch(action.clone()).unwrap();
        assert_eq!(Value::Object(action), returned);

        let unknown = Object::of_type("unknown");
        assert_eq!(
            Value::Object(unknown.clone()),
            store.dispatch(unknown).unwrap()
        );
        assert_eq!(1, store.state().counter);
    }

    #[test]
    fn rejects_invalid_actions() {
        let store = new_store();

        let missing_type = store.dispatch(json!({})).unwrap_err();
        assert!(matches!(
            missing_type,
            StoreError::InvalidAction(InvalidAction::MissingType)
        ));

        for invalid in vec![json!(42), json!([]), json!("inc"), json!(null)] {
            let err = store.dispatch(invalid).unwrap_err();
            assert!(matches!(
                err,
                StoreError::InvalidAction(InvalidAction::NotPlainObject)
            ));
        }

        let class = crate::Prototype::extend(&crate::Prototype::object(), "Increment");
        let instance = Object::with_prototype(class).field("type", "inc");
        assert!(store.dispatch(instance).unwrap_err().is_invalid_action());

        assert_eq!(0, store.state().counter);
    }

    #[test]
    fn accepts_null_type_and_bare_objects() {
        let store = new_store();
        store.dispatch(json!({"type": null})).unwrap();
        store.dispatch(Object::bare().field("type", "inc")).unwrap();
        assert_eq!(1, store.state().counter);
    }

    #[test]
    fn notifies_listeners_in_order() {
        let store = new_store();
        let log = Rc::new(RefCell::new(Vec::new()));

        for name in &["a", "b", "c"] {
            let log = log.clone();
            let weak = store.downgrade();
            let name = *name;
            store.subscribe(move || {
                if let Some(store) = weak.upgrade() {
                    log.borrow_mut().push((name, store.state().counter));
                }
            });
        }

        store.dispatch(inc()).unwrap();
        assert_eq!(vec![("a", 1), ("b", 1), ("c", 1)], *log.borrow());
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let store = new_store();
        let calls = Rc::new(RefCell::new(0));
        let calls_copy = calls.clone();
        let callback = Callback::new(move || *calls_copy.borrow_mut() += 1);

        let first = store.subscribe(callback.clone());
        let second = store.subscribe(callback);
        store.dispatch(inc()).unwrap();
        assert_eq!(2, *calls.borrow());

        first.unsubscribe();
        first.unsubscribe();
        store.dispatch(inc()).unwrap();
        assert_eq!(3, *calls.borrow());

        second.unsubscribe();
        store.dispatch(inc()).unwrap();
        assert_eq!(3, *calls.borrow());
        assert_eq!(0, store.store().listener_count());
    }

    #[test]
    fn listener_added_during_notification_waits_for_next_dispatch() {
        let store = new_store();
        let late_calls = Rc::new(RefCell::new(0));
        let added = Rc::new(RefCell::new(false));

        {
            let weak = store.downgrade();
            let late_calls = late_calls.clone();
            store.subscribe(move || match weak.upgrade() {
                Some(store) if !added.replace(true) => {
                    let late_calls = late_calls.clone();
                    store.subscribe(move || *late_calls.borrow_mut() += 1);
                }
                _ => {}
            });
        }

        store.dispatch(inc()).unwrap();
        assert_eq!(0, *late_calls.borrow());

        store.dispatch(inc()).unwrap();
        store.dispatch(inc()).unwrap();
        assert_eq!(2, *late_calls.borrow());
    }

    #[test]
    fn listener_removed_during_notification_still_runs_in_that_pass() {
        let store = new_store();
        let log = Rc::new(RefCell::new(Vec::new()));
        let b_subscription: Rc<RefCell<Option<crate::Subscription>>> =
            Rc::new(RefCell::new(None));

        {
            let log = log.clone();
            let b_subscription = b_subscription.clone();
            store.subscribe(move || {
                log.borrow_mut().push("a");
                if let Some(b) = &*b_subscription.borrow() {
                    b.unsubscribe();
                }
            });
        }
        {
            let log = log.clone();
            let subscription = store.subscribe(move || log.borrow_mut().push("b"));
            *b_subscription.borrow_mut() = Some(subscription);
        }

        store.dispatch(inc()).unwrap();
        assert_eq!(vec!["a", "b"], *log.borrow());

        store.dispatch(inc()).unwrap();
        assert_eq!(vec!["a", "b", "a"], *log.borrow());
    }

    #[test]
    fn listeners_may_dispatch() {
        let store = new_store();
        let weak = store.downgrade();
        store.subscribe(Callback::fallible(move || {
            if let Some(store) = weak.upgrade() {
                if store.state().counter < 3 {
                    store.dispatch(inc())?;
                }
            }
            Ok(())
        }));

        store.dispatch(inc()).unwrap();
        assert_eq!(3, store.state().counter);
    }

    #[test]
    fn reducers_may_not_dispatch() {
        let handle: Rc<RefCell<Option<StoreRef<i32>>>> = Rc::new(RefCell::new(None));
        let handle_copy = handle.clone();
        let reducer = move |state: Option<&Rc<i32>>, action: &Object| {
            if action.is_type("nested") {
                if let Some(store) = &*handle_copy.borrow() {
                    store.dispatch(inc())?;
                }
            }
            counter(state, action)
        };

        let store = create_store(reducer, None, None).unwrap();
        *handle.borrow_mut() = Some(store.clone());
        store.dispatch(inc()).unwrap();

        let err = store.dispatch(Object::of_type("nested")).unwrap_err();
        assert!(matches!(err, StoreError::Reentrancy));
        assert_eq!(1, *store.state());

        // the guard was released
        store.dispatch(inc()).unwrap();
        assert_eq!(2, *store.state());

        handle.borrow_mut().take();
    }

    #[test]
    fn reducers_may_not_dispatch_through_middleware() {
        let handle: Rc<RefCell<Option<StoreRef<i32>>>> = Rc::new(RefCell::new(None));
        let handle_copy = handle.clone();
        let reducer = move |state: Option<&Rc<i32>>, action: &Object| {
            if action.is_type("nested") {
                if let Some(store) = &*handle_copy.borrow() {
                    let deferred: Thunk<i32> =
                        Thunk::new(|dispatch, _, _| dispatch.dispatch(Object::of_type("inc")));
                    store.dispatch(deferred)?;
                }
            }
            counter(state, action)
        };

        let middlewares: Vec<Rc<dyn Middleware<i32>>> = vec![Rc::new(thunk())];
        let store = create_store(reducer, None, Some(apply_middleware(middlewares))).unwrap();
        *handle.borrow_mut() = Some(store.clone());
        store.dispatch(inc()).unwrap();

        let err = store.dispatch(Object::of_type("nested")).unwrap_err();
        assert!(matches!(err, StoreError::Reentrancy));
        assert_eq!(1, *store.state());

        store.dispatch(inc()).unwrap();
        assert_eq!(2, *store.state());

        handle.borrow_mut().take();
    }

    #[test]
    fn failing_reducer_keeps_state_and_skips_listeners() {
        let reducer = |state: Option<&Rc<i32>>, action: &Object| {
            if action.is_type("boom") {
                return Err(anyhow::anyhow!("boom").into());
            }
            counter(state, action)
        };
        let store = create_store(reducer, None, None).unwrap();
        let calls = Rc::new(RefCell::new(0));
        let calls_copy = calls.clone();
        store.subscribe(move || *calls_copy.borrow_mut() += 1);

        store.dispatch(inc()).unwrap();
        let err = store.dispatch(Object::of_type("boom")).unwrap_err();
        assert_eq!("boom", err.to_string());
        assert_eq!(1, *store.state());
        assert_eq!(1, *calls.borrow());

        store.dispatch(inc()).unwrap();
        assert_eq!(2, *store.state());
    }

    #[test]
    fn failing_listener_propagates_after_commit() {
        let store = new_store();
        let later = Rc::new(RefCell::new(0));
        store.subscribe(Callback::fallible(|| Err(anyhow::anyhow!("listener").into())));
        let later_copy = later.clone();
        store.subscribe(move || *later_copy.borrow_mut() += 1);

        assert!(store.dispatch(inc()).is_err());
        assert_eq!(1, store.state().counter);
        assert_eq!(0, *later.borrow());
    }

    #[test]
    fn replace_reducer_dispatches_init() {
        let store = create_store(counter, None, None).unwrap();
        store.dispatch(inc()).unwrap();
        store.dispatch(inc()).unwrap();

        let notified = Rc::new(RefCell::new(0));
        let notified_copy = notified.clone();
        store.subscribe(move || *notified_copy.borrow_mut() += 1);

        let doubler = |state: Option<&Rc<i32>>, action: &Object| -> Result<Rc<i32>, StoreError> {
            let count = state.map(|s| **s).unwrap_or(0);
            Ok(Rc::new(if action.is_type(action_types::INIT) {
                count * 10
            } else {
                count * 2
            }))
        };
        store.replace_reducer(doubler).unwrap();
        assert_eq!(20, *store.state());
        assert_eq!(1, *notified.borrow());

        store.dispatch(inc()).unwrap();
        assert_eq!(40, *store.state());
    }

    /// Counts how many of its values have been dropped.
    struct Tracked {
        count: i32,
        drops: Rc<Cell<usize>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn tracked_store(
        drops: Rc<Cell<usize>>,
        enhancer: Option<Enhancer<Tracked>>,
    ) -> StoreRef<Tracked> {
        let reducer = move |state: Option<&Rc<Tracked>>,
                            action: &Object|
              -> Result<Rc<Tracked>, StoreError> {
            Ok(match state {
                Some(state) if !action.is_type("inc") => state.clone(),
                _ => Rc::new(Tracked {
                    count: state.map(|s| s.count + 1).unwrap_or(0),
                    drops: drops.clone(),
                }),
            })
        };
        create_store(reducer, None, enhancer).unwrap()
    }

    fn assert_listener_does_not_keep_store_alive(enhancer: Option<Enhancer<Tracked>>) {
        let drops = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(0));

        let weak = {
            let store = tracked_store(drops.clone(), enhancer);
            let weak = store.downgrade();
            {
                let weak = weak.clone();
                let seen = seen.clone();
                store.subscribe(move || {
                    if let Some(store) = weak.upgrade() {
                        seen.set(store.state().count);
                    }
                });
            }

            store.dispatch(inc()).unwrap();
            store.dispatch(inc()).unwrap();
            assert_eq!(2, seen.get());
            assert_eq!(2, drops.get());
            weak
        };

        assert!(weak.upgrade().is_none());
        assert_eq!(3, drops.get());
    }

    #[test]
    fn store_is_dropped_with_its_last_handle() {
        assert_listener_does_not_keep_store_alive(None);
    }

    #[test]
    fn store_with_middleware_is_dropped_with_its_last_handle() {
        let middlewares: Vec<Rc<dyn Middleware<Tracked>>> = vec![Rc::new(thunk())];
        assert_listener_does_not_keep_store_alive(Some(apply_middleware(middlewares)));
    }
}
