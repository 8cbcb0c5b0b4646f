//! A synchronous, observable state container, with a pipeline of
//! composable [middleware](crate::middleware) in front of its single
//! mutation entry point, [StoreRef::dispatch()].
//!
//! ```
//! use reactive_dispatch::{create_store, Object, StoreError};
//! use std::rc::Rc;
//!
//! fn counter(state: Option<&Rc<i32>>, action: &Object) -> Result<Rc<i32>, StoreError> {
//!     let count = state.map(|s| **s).unwrap_or(0);
//!     Ok(Rc::new(if action.is_type("inc") { count + 1 } else { count }))
//! }
//!
//! let store = create_store(counter, None, None)?;
//!
//! let weak = store.downgrade();
//! store.subscribe(move || {
//!     if let Some(store) = weak.upgrade() {
//!         println!("count is now {}", store.state());
//!     }
//! });
//!
//! for _ in 0..3 {
//!     store.dispatch(Object::of_type("inc"))?;
//! }
//! assert_eq!(3, *store.state());
//! # Ok::<(), StoreError>(())
//! ```

mod action;
pub mod compose;
mod dispatcher;
mod error;
mod listener;
pub mod middleware;
mod observable;
mod reducer;
mod store;
mod value;

pub use action::*;
pub use compose::compose;
pub use dispatcher::{Dispatcher, GetState, WeakDispatcher};
pub use error::{InvalidAction, StoreError};
pub use listener::{Callback, Subscription};
pub use middleware::{
    apply_middleware,
    thunk::{thunk, ThunkMiddleware},
    Middleware, MiddlewareApi,
};
pub use observable::{Observable, Observer};
pub use reducer::*;
pub use store::{create_store, Enhancer, Store, StoreCreator, StoreRef, WeakStoreRef};
pub use value::{Object, Prototype, Value};
