use crate::{Object, StoreError};
use std::rc::Rc;

/// Using the [reduce()](Reducer::reduce()) method, implementors of
/// this trait take an action submitted to a store via
/// [StoreRef::dispatch()](crate::StoreRef::dispatch()) and produce the
/// next `State` of the store.
///
/// This trait is implemented for closures with the matching
/// signature.
pub trait Reducer<State> {
    /// Take an action and the previous state, and produce the next
    /// state. The previous state is never mutated.
    ///
    /// `prev_state` is `None` only for the
    /// [INIT](crate::action_types::INIT) action sent while the store
    /// is being created without a preloaded state; the reducer must
    /// then return its initial state. Actions the reducer does not
    /// recognise must return `prev_state` unchanged.
    ///
    /// An `Err` aborts the dispatch: the state is left as it was and
    /// no listeners are notified.
    fn reduce(&self, prev_state: Option<&Rc<State>>, action: &Object)
        -> Result<Rc<State>, StoreError>;
}

impl<State, F> Reducer<State> for F
where
    F: Fn(Option<&Rc<State>>, &Object) -> Result<Rc<State>, StoreError>,
{
    fn reduce(
        &self,
        prev_state: Option<&Rc<State>>,
        action: &Object,
    ) -> Result<Rc<State>, StoreError> {
        self(prev_state, action)
    }
}

/// A [Reducer] composed of multiple reducers, run in order, each one
/// receiving the state produced by the one before it.
pub struct CompositeReducer<State> {
    reducers: Vec<Box<dyn Reducer<State>>>,
}

impl<State> CompositeReducer<State> {
    /// Create a new [CompositeReducer].
    pub fn new(reducers: Vec<Box<dyn Reducer<State>>>) -> Self {
        CompositeReducer { reducers }
    }
}

impl<State> Reducer<State> for CompositeReducer<State> {
    fn reduce(
        &self,
        prev_state: Option<&Rc<State>>,
        action: &Object,
    ) -> Result<Rc<State>, StoreError> {
        let mut state: Option<Rc<State>> = prev_state.cloned();

        for reducer in &self.reducers {
            state = Some(reducer.reduce(state.as_ref(), action)?);
        }

        // an empty composite can only pass a state through
        state.ok_or_else(|| {
            anyhow::anyhow!("CompositeReducer has no reducers to produce an initial state").into()
        })
    }
}
