//! [Middleware] used to modify the behaviour of a
//! [StoreRef](crate::StoreRef) during a
//! [dispatch()](crate::StoreRef::dispatch()), installed with the
//! [apply_middleware()] [Enhancer]. This module also contains some
//! middleware implementations which can be used as utilities in an
//! application.

pub mod simple_logger;
pub mod thunk;

use crate::{
    compose::{compose, Unary},
    Action, Dispatcher, Enhancer, GetState, Reducer, StoreCreator, StoreError, StoreRef, Value,
};
use std::{cell::RefCell, rc::Rc};

/// The view of the store given to every [Middleware].
///
/// [MiddlewareApi::dispatch()] always enters the fully composed
/// dispatch of the store, from the outermost middleware, rather than
/// the `next` stage given to a particular middleware.
pub struct MiddlewareApi<State> {
    get_state: GetState<State>,
    dispatch: Dispatcher<State>,
}

impl<State> MiddlewareApi<State> {
    pub fn state(&self) -> Rc<State> {
        self.get_state.get()
    }

    pub fn dispatch<A: Into<Action<State>>>(&self, action: A) -> Result<Value, StoreError> {
        self.dispatch.dispatch(action)
    }

    pub fn get_state(&self) -> &GetState<State> {
        &self.get_state
    }

    pub fn dispatcher(&self) -> &Dispatcher<State> {
        &self.dispatch
    }
}

impl<State> Clone for MiddlewareApi<State> {
    fn clone(&self) -> Self {
        Self {
            get_state: self.get_state.clone(),
            dispatch: self.dispatch.clone(),
        }
    }
}

/// `Middleware` used to modify the behaviour of a store during a
/// [dispatch()](crate::StoreRef::dispatch()).
///
/// Each middleware sits between the caller and the `next` stage of
/// the chain (the next middleware, or finally the store's own
/// dispatch). It may pass the action on unchanged, transform it,
/// swallow it, or dispatch other actions, and it decides what the
/// caller gets back.
///
/// This trait is implemented for closures with the matching
/// signature.
pub trait Middleware<State> {
    /// Called once for every store the middleware is applied to, in
    /// the order the middleware were given to [apply_middleware()],
    /// while the chain is being built. Dispatching from here reaches
    /// the store's own dispatch without passing through any
    /// middleware.
    fn attach(&self, _api: &MiddlewareApi<State>) {}

    fn on_dispatch(
        &self,
        api: &MiddlewareApi<State>,
        action: Action<State>,
        next: &Dispatcher<State>,
    ) -> Result<Value, StoreError>;
}

impl<State, F> Middleware<State> for F
where
    F: Fn(&MiddlewareApi<State>, Action<State>, &Dispatcher<State>) -> Result<Value, StoreError>,
{
    fn on_dispatch(
        &self,
        api: &MiddlewareApi<State>,
        action: Action<State>,
        next: &Dispatcher<State>,
    ) -> Result<Value, StoreError> {
        self(api, action, next)
    }
}

/// Bind `middleware` to `api`, producing the stage of the chain which
/// wraps a given `next` dispatch.
fn interceptor<State: 'static>(
    middleware: Rc<dyn Middleware<State>>,
    api: MiddlewareApi<State>,
) -> Unary<Dispatcher<State>> {
    middleware.attach(&api);

    Rc::new(move |next: Dispatcher<State>| {
        let middleware = middleware.clone();
        let api = api.clone();
        Dispatcher::new(move |action| middleware.on_dispatch(&api, action, &next))
    })
}

/// Creates an [Enhancer] that applies `middlewares` to the dispatch
/// of the store.
///
/// For middlewares `[a, b, c]`, a dispatch runs `a`, then `b`, then
/// `c`, then the store's own dispatch: the first middleware sees the
/// action first, and has the final say over the result.
///
/// Because middleware may dispatch again later, outside of the
/// current call, this should be the outermost enhancer in a
/// composition, so that it wraps the store's raw dispatch.
pub fn apply_middleware<State: 'static>(
    middlewares: Vec<Rc<dyn Middleware<State>>>,
) -> Enhancer<State> {
    let middlewares = Rc::new(middlewares);

    Rc::new(move |create: StoreCreator<State>| -> StoreCreator<State> {
        let middlewares = middlewares.clone();

        Rc::new(
            move |reducer: Rc<dyn Reducer<State>>,
                  preloaded_state: Option<State>|
                  -> Result<StoreRef<State>, StoreError> {
                let store = create(reducer, preloaded_state)?;

                // Middleware dispatches through this slot, so they see the
                // final composed dispatch. It is only weakly held here to
                // avoid a cycle through the chain.
                let slot = Rc::new(RefCell::new(store.dispatcher()));
                let api = MiddlewareApi {
                    get_state: store.get_state(),
                    dispatch: {
                        let slot = Rc::downgrade(&slot);
                        Dispatcher::new(move |action| {
                            let slot = slot.upgrade().ok_or(StoreError::StoreDropped)?;
                            let dispatch = slot.borrow().clone();
                            dispatch.dispatch(action)
                        })
                    },
                };

                let chain = middlewares
                    .iter()
                    .map(|middleware| interceptor(middleware.clone(), api.clone()))
                    .collect();
                let composed = compose(chain)(store.dispatcher());
                *slot.borrow_mut() = composed;

                log::debug!("applied {} middleware", middlewares.len());

                let dispatch = Dispatcher::new(move |action| {
                    let dispatch = slot.borrow().clone();
                    dispatch.dispatch(action)
                });

                Ok(store.with_dispatcher(dispatch))
            },
        )
    })
}
