//! [Middleware] which lets [Thunk](crate::Thunk)s be dispatched in place of plain
//! records, for deferred or asynchronous logic that needs to dispatch
//! (possibly several times, possibly later) and read the state.

use super::{Middleware, MiddlewareApi};
use crate::{Action, Dispatcher, StoreError, Value};

/// Runs any [Action::Thunk] dispatched through it with the store's
/// composed dispatch, its state getter and the extra argument this
/// middleware was built with, returning whatever the thunk returns.
/// Every other action is passed to the next stage unchanged.
#[derive(Debug, Clone, Default)]
pub struct ThunkMiddleware {
    extra: Option<Value>,
}

impl ThunkMiddleware {
    /// A thunk middleware with no extra argument.
    pub fn new() -> Self {
        Self::default()
    }

    /// A thunk middleware which passes `extra` to every thunk it runs,
    /// for example a client or some configuration the thunks share.
    pub fn with_extra_argument<V: Into<Value>>(extra: V) -> Self {
        Self {
            extra: Some(extra.into()),
        }
    }

    pub fn extra_argument(&self) -> Option<&Value> {
        self.extra.as_ref()
    }
}

impl<State> Middleware<State> for ThunkMiddleware {
    fn on_dispatch(
        &self,
        api: &MiddlewareApi<State>,
        action: Action<State>,
        next: &Dispatcher<State>,
    ) -> Result<Value, StoreError> {
        match action {
            Action::Thunk(thunk) => {
                thunk.run(api.dispatcher(), api.get_state(), self.extra.as_ref())
            }
            action => next.dispatch(action),
        }
    }
}

/// The default [ThunkMiddleware], with no extra argument.
pub fn thunk() -> ThunkMiddleware {
    ThunkMiddleware::new()
}
