use crate::{Dispatcher, GetState, Object, StoreError, Value};
use std::{fmt::Debug, rc::Rc};

/// Action types reserved by the store itself.
///
/// Reducers receive these when the store is created and when the
/// reducer is replaced. For any action type it does not recognise, a
/// reducer must return the current state; when it is given no state
/// it must return its initial state. Do not dispatch these yourself.
pub mod action_types {
    pub const INIT: &str = "@@reactive-dispatch/INIT";
}

/// The action dispatched by the store on construction and on
/// [replace_reducer()](crate::StoreRef::replace_reducer()).
pub fn init_action() -> Object {
    Object::of_type(action_types::INIT)
}

/// Returns `true` if `value` qualifies as a dispatchable record: an
/// [Object] that is either prototype-less, or whose prototype is the
/// root of its own prototype chain.
pub fn is_plain_object(value: &Value) -> bool {
    match value {
        Value::Object(object) => object.is_plain(),
        _ => false,
    }
}

type ThunkFn<State> =
    dyn Fn(&Dispatcher<State>, &GetState<State>, Option<&Value>) -> Result<Value, StoreError>;

/// A deferred computation dispatched in place of a record, handled
/// by the [ThunkMiddleware](crate::middleware::thunk::ThunkMiddleware).
///
/// When run it receives the fully composed dispatch of the store, a
/// way to read the current state, and the extra argument the
/// middleware was constructed with.
pub struct Thunk<State>(Rc<ThunkFn<State>>);

impl<State> Thunk<State> {
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn(&Dispatcher<State>, &GetState<State>, Option<&Value>) -> Result<Value, StoreError>
            + 'static,
    {
        Thunk(Rc::new(thunk))
    }

    pub fn run(
        &self,
        dispatch: &Dispatcher<State>,
        get_state: &GetState<State>,
        extra: Option<&Value>,
    ) -> Result<Value, StoreError> {
        (self.0)(dispatch, get_state, extra)
    }
}

impl<State> Clone for Thunk<State> {
    fn clone(&self) -> Self {
        Thunk(self.0.clone())
    }
}

impl<State> Debug for Thunk<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Thunk(@ {:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Something which can be passed to
/// [StoreRef::dispatch()](crate::StoreRef::dispatch()).
///
/// Only a [Value] holding a plain [Object] with a `type` field is
/// accepted by the store's own dispatch; anything else needs to be
/// handled by [Middleware](crate::middleware::Middleware) before it
/// reaches the store.
pub enum Action<State> {
    Value(Value),
    Thunk(Thunk<State>),
}

impl<State> Action<State> {
    /// Returns `true` if this action would pass the store's
    /// validation of plain records.
    pub fn is_plain_object(&self) -> bool {
        match self {
            Action::Value(value) => is_plain_object(value),
            Action::Thunk(_) => false,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Action::Value(value) => Some(value),
            Action::Thunk(_) => None,
        }
    }

    /// The `type` field of this action, if it is a record.
    pub fn action_type(&self) -> Option<&Value> {
        self.as_value()
            .and_then(Value::as_object)
            .and_then(Object::action_type)
    }
}

impl<State> Clone for Action<State> {
    fn clone(&self) -> Self {
        match self {
            Action::Value(value) => Action::Value(value.clone()),
            Action::Thunk(thunk) => Action::Thunk(thunk.clone()),
        }
    }
}

impl<State> Debug for Action<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Value(value) => value.fmt(f),
            Action::Thunk(thunk) => thunk.fmt(f),
        }
    }
}

impl<State> From<Value> for Action<State> {
    fn from(value: Value) -> Self {
        Action::Value(value)
    }
}

impl<State> From<Object> for Action<State> {
    fn from(object: Object) -> Self {
        Action::Value(Value::Object(object))
    }
}

impl<State> From<serde_json::Value> for Action<State> {
    fn from(json: serde_json::Value) -> Self {
        Action::Value(Value::from(json))
    }
}

impl<State> From<Thunk<State>> for Action<State> {
    fn from(thunk: Thunk<State>) -> Self {
        Action::Thunk(thunk)
    }
}
