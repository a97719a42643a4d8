//! Settings-aware conversion front end.
//!
//! [`Converter`] bundles [`ConvertSettings`] with a [`Diagnostics`] sink. The
//! free `*_to_*` functions behave like `Converter::default()`; construct a
//! converter to change keyword tables, separators or digit counts, or to
//! capture diagnostics instead of logging them.
//!
//! The conversion methods themselves live beside their domains
//! (`array::to`, `number::to`, `string::to`).

use primkit_types::ConvertSettings;

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::ConversionError;

#[derive(Debug, Clone, Default)]
pub struct Converter<D = TracingDiagnostics> {
    settings: ConvertSettings,
    diagnostics: D,
}

impl Converter {
    #[must_use]
    pub fn new(settings: ConvertSettings) -> Self {
        Self {
            settings,
            diagnostics: TracingDiagnostics,
        }
    }
}

impl<D: Diagnostics> Converter<D> {
    pub fn with_diagnostics(settings: ConvertSettings, diagnostics: D) -> Self {
        Self {
            settings,
            diagnostics,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ConvertSettings {
        &self.settings
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Report `error` and give up.
    pub(crate) fn fail<T>(&self, error: ConversionError) -> Option<T> {
        self.diagnostics.report(&error);
        None
    }
}
