use crate::{
    middleware::{Middleware, MiddlewareApi},
    Action, Dispatcher, StoreError, Value,
};
use std::fmt::Debug;

/// The [log] level [SimpleLoggerMiddleware] writes each dispatch at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
        }
    }
}

/// Logs the state before, the action, and the state after every
/// dispatch which passes through it. Actions are always passed on.
///
/// Place it after [ThunkMiddleware](super::thunk::ThunkMiddleware)
/// to log only the records which reach the store.
#[derive(Debug, Clone, Default)]
pub struct SimpleLoggerMiddleware {
    log_level: LogLevel,
}

impl SimpleLoggerMiddleware {
    pub fn log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }
}

impl<State> Middleware<State> for SimpleLoggerMiddleware
where
    State: Debug,
{
    fn on_dispatch(
        &self,
        api: &MiddlewareApi<State>,
        action: Action<State>,
        next: &Dispatcher<State>,
    ) -> Result<Value, StoreError> {
        let level = log::Level::from(self.log_level);
        if !log::log_enabled!(level) {
            return next.dispatch(action);
        }

        log::log!(level, "prev state: {:?}", api.state());
        log::log!(level, "action: {:?}", action);

        let result = next.dispatch(action);

        match &result {
            Ok(_) => log::log!(level, "next state: {:?}", api.state()),
            Err(error) => log::log!(level, "dispatch failed: {}", error),
        }

        result
    }
}
