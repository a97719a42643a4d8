//! Core value types for primkit.
//!
//! This crate contains the dynamic [`Value`] model, the runtime type guards
//! and the resolved conversion settings. No IO, no global state.
//!
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod coerce;
pub mod guards;
mod json;
mod settings;
mod value;

pub use coerce::{format_number, join_values};
pub use guards::{
    guard_by_name, is_array, is_array_buffer, is_bigint, is_blob, is_boolean, is_buffer,
    is_data_view, is_date, is_error, is_file, is_form_data, is_function, is_map, is_null,
    is_number, is_plain_object, is_promise, is_regexp, is_set, is_string, is_symbol,
    is_uint8_array, is_undefined, is_url_search_params, is_weak_map, is_weak_set,
};
pub use json::JsonError;
pub use settings::{
    ConvertSettings, DEFAULT_DELIMITER, DEFAULT_FALSY, DEFAULT_FIXED_DIGITS,
    DEFAULT_PERCENT_DIGITS, DEFAULT_SEPARATOR, DEFAULT_TRUTHY, MAX_FRACTION_DIGITS,
    SettingsError,
};
#[cfg(feature = "web")]
pub use value::{Blob, File};
pub use value::{ErrorValue, Function, Handle, Object, Symbol, TypeOf, Value};
