//! Array, string and number helpers over [`primkit_types::Value`].
//!
//! Every domain follows the same shape:
//!
//! - **`*_is`**: kind check, optionally narrowed by a [`Condition`]
//! - **`*_has`**: containment or feature check, `false` for the wrong kind
//! - **`*_to`**: conversion that never panics and returns a defined fallback
//!
//! Parsing conversions report failures to a [`Diagnostics`] sink. The free
//! functions log through `tracing`; build a [`Converter`] to capture them or
//! to change keyword tables, separators and digit counts.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)] // Only on compile-time constant patterns
#![allow(clippy::needless_pass_by_value)] // Conditions are taken by value

pub mod array;
mod condition;
mod convert;
mod diagnostics;
mod error;
pub mod math;
pub mod number;
pub mod string;

pub use array::{
    array_has, array_has_length, array_is, array_is_empty, array_is_every, array_to,
    array_to_json, array_to_map, array_to_object, array_to_set, array_to_string,
};
pub use condition::Condition;
pub use convert::Converter;
pub use diagnostics::{Diagnostics, SilentDiagnostics, TracingDiagnostics};
pub use error::ConversionError;
pub use math::{add, subtract};
pub use number::{
    number_has, number_has_fraction, number_is, number_is_even, number_is_finite,
    number_is_integer, number_is_negative, number_is_odd, number_is_positive, number_is_zero,
    number_to, number_to_fixed, number_to_float, number_to_int, number_to_percent, number_to_self,
};
pub use string::{
    string_has, string_has_alpha, string_has_chinese, string_has_emoji, string_has_line_break,
    string_has_lowercase, string_has_number, string_has_space, string_has_symbol,
    string_has_uppercase, string_is, string_is_date, string_is_email, string_is_hex,
    string_is_html, string_is_ip, string_is_ipv4, string_is_ipv6, string_is_json,
    string_is_number, string_is_phone, string_is_slug, string_is_time, string_is_url,
    string_is_uuid, string_to, string_to_array, string_to_boolean, string_to_camel_case,
    string_to_constant, string_to_date, string_to_json, string_to_number, string_to_slug,
    string_to_title_case, string_to_upper,
};
