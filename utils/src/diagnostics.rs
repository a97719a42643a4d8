//! Where conversion failures are reported.
//!
//! The boolean, date, number and JSON string parsers return `None` on bad
//! input; the failure itself is only observable through a [`Diagnostics`]
//! sink. The default sink logs through `tracing`. Tests inject their own.

use crate::error::ConversionError;

/// Receives conversion failures.
pub trait Diagnostics {
    fn report(&self, error: &ConversionError);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn report(&self, error: &ConversionError) {
        (**self).report(error);
    }
}

/// Logs every failure at `error` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, error: &ConversionError) {
        tracing::error!(
            kind = error.kind(),
            input = error.input().unwrap_or_default(),
            "{error}"
        );
    }
}

/// Drops every failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn report(&self, _error: &ConversionError) {}
}
