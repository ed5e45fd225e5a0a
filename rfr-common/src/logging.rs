//! Explicit logging context.
//!
//! A [`LogContext`] owns its own subscriber. Code that should log runs inside
//! [`LogContext::scope`]; no process-wide subscriber is ever installed.
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV_VAR;

#[derive(Debug, Clone)]
pub struct LogContext {
    dispatch: Dispatch,
    level: LevelFilter,
}

impl LogContext {
    /// Builds a context with `level` as default directive. `RFR_LOG` overrides
    /// it with regular `EnvFilter` directives.
    pub fn new(level: LevelFilter) -> Self {
        let env_filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .with_env_var(LOG_ENV_VAR)
            .from_env_lossy();

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .without_time()
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
            level,
        }
    }

    /// Context used while the command line is still being resolved.
    pub fn bootstrap() -> Self {
        Self::new(LevelFilter::INFO)
    }

    /// Context for the rest of the process once `--debug` is known.
    pub fn for_debug(debug: bool) -> Self {
        if debug {
            Self::new(LevelFilter::DEBUG)
        } else {
            Self::new(LevelFilter::INFO)
        }
    }

    /// Discards every event.
    pub fn silent() -> Self {
        Self {
            dispatch: Dispatch::none(),
            level: LevelFilter::OFF,
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Runs `f` with this context's subscriber as the current default.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_returns_closure_value() {
        let ctx = LogContext::silent();
        let value = ctx.scope(|| {
            tracing::info!("not recorded");
            41 + 1
        });
        assert_eq!(value, 42);
    }

    #[test]
    fn debug_switch_selects_level() {
        assert_eq!(LogContext::for_debug(true).level(), LevelFilter::DEBUG);
        assert_eq!(LogContext::for_debug(false).level(), LevelFilter::INFO);
        assert_eq!(LogContext::silent().level(), LevelFilter::OFF);
    }

    #[test]
    fn nested_scopes_restore_outer_context() {
        let outer = LogContext::silent();
        let inner = LogContext::bootstrap();
        let result = outer.scope(|| inner.scope(|| "inner") == "inner");
        assert!(result);
    }
}
