//! Number helpers: property checks, rendering checks and conversions.

mod has;
mod is;
mod parse;
mod to;

pub use has::{number_has, number_has_fraction};
pub use is::{
    number_is, number_is_even, number_is_finite, number_is_integer, number_is_negative,
    number_is_odd, number_is_positive, number_is_zero,
};
pub(crate) use parse::coerce_number;
pub use to::{
    number_to, number_to_fixed, number_to_float, number_to_int, number_to_percent, number_to_self,
};
