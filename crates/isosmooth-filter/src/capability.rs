//! Curvature-flow capability handle
//!
//! Whether a curvature-flow engine is available is decided once per
//! process. A failed acquisition is not fatal: it prints a one-line notice
//! to stdout and leaves the capability marked unavailable, so only an
//! actual smoothing call fails (with [`FilterError::CapabilityUnavailable`]).
//!
//! The default acquisition uses the native engine when the crate is built
//! with the `curvature-flow` feature. Setting the environment variable
//! `ISOSMOOTH_CURVATURE_FLOW` to `off`, `0`, `false` or `disabled` forces it
//! to fail.

use crate::engine::CurvatureFlowEngine;
use crate::{FilterError, FilterResult};
use log::info;
use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Environment variable that can disable engine acquisition
pub const ENGINE_ENV_VAR: &str = "ISOSMOOTH_CURVATURE_FLOW";

static GLOBAL: OnceLock<Capability> = OnceLock::new();

/// Result of trying to acquire a curvature-flow engine
pub struct Capability {
    state: State,
}

enum State {
    Available(Box<dyn CurvatureFlowEngine>),
    Unavailable(String),
}

impl Capability {
    /// Acquire the default engine.
    pub fn acquire() -> Self {
        Self::acquire_with(default_engine)
    }

    /// Acquire an engine from `factory`.
    ///
    /// On failure the reason is recorded and a single notice line is
    /// printed to stdout.
    pub fn acquire_with<F>(factory: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn CurvatureFlowEngine>, String>,
    {
        Self::acquire_reporting(factory, &mut io::stdout().lock())
    }

    /// Acquire an engine from `factory`, writing the failure notice to `out`.
    fn acquire_reporting<F, W>(factory: F, out: &mut W) -> Self
    where
        F: FnOnce() -> Result<Box<dyn CurvatureFlowEngine>, String>,
        W: Write,
    {
        match factory() {
            Ok(engine) => {
                info!("curvature flow engine '{}' acquired", engine.name());
                Self::from_engine(engine)
            }
            Err(reason) => {
                write_notice(out, &reason);
                Self::unavailable(reason)
            }
        }
    }

    /// Wrap an already constructed engine.
    pub fn from_engine(engine: Box<dyn CurvatureFlowEngine>) -> Self {
        Self {
            state: State::Available(engine),
        }
    }

    /// An unavailable capability with the given reason; prints nothing.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: State::Unavailable(reason.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, State::Available(_))
    }

    /// Why acquisition failed, if it did
    pub fn reason(&self) -> Option<&str> {
        match &self.state {
            State::Available(_) => None,
            State::Unavailable(reason) => Some(reason.as_str()),
        }
    }

    /// Borrow the engine.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::CapabilityUnavailable` if no engine was acquired.
    pub fn engine(&self) -> FilterResult<&dyn CurvatureFlowEngine> {
        match &self.state {
            State::Available(engine) => Ok(engine.as_ref()),
            State::Unavailable(reason) => Err(FilterError::CapabilityUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Available(engine) => f
                .debug_tuple("Capability::Available")
                .field(&engine.name())
                .finish(),
            State::Unavailable(reason) => f
                .debug_tuple("Capability::Unavailable")
                .field(reason)
                .finish(),
        }
    }
}

/// The process-wide capability, acquired on first use.
pub fn global() -> &'static Capability {
    GLOBAL.get_or_init(Capability::acquire)
}

/// Acquire the process-wide capability now.
///
/// Programs that want the availability notice at start-up call this once
/// early; later calls are no-ops.
pub fn init() -> bool {
    global().is_available()
}

/// Write the one-line unavailability notice; write errors are ignored.
fn write_notice<W: Write>(out: &mut W, reason: &str) {
    let _ = writeln!(out, "curvature flow engine not available: {reason}");
    let _ = out.flush();
}

fn disabled_by_env(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("off" | "0" | "false" | "disabled")
    )
}

fn default_engine() -> Result<Box<dyn CurvatureFlowEngine>, String> {
    let value = std::env::var(ENGINE_ENV_VAR).ok();
    if disabled_by_env(value.as_deref()) {
        return Err(format!("disabled by {ENGINE_ENV_VAR}"));
    }
    native_engine()
}

#[cfg(feature = "curvature-flow")]
fn native_engine() -> Result<Box<dyn CurvatureFlowEngine>, String> {
    Ok(Box::new(crate::curvature_flow::CurvatureFlow))
}

#[cfg(not(feature = "curvature-flow"))]
fn native_engine() -> Result<Box<dyn CurvatureFlowEngine>, String> {
    Err("built without the `curvature-flow` feature".to_string())
}
