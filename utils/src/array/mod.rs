//! Array helpers: shape checks, containment and conversions.

mod has;
mod is;
mod to;

pub use has::{array_has, array_has_length};
pub use is::{array_is, array_is_empty, array_is_every};
pub use to::{array_to, array_to_json, array_to_map, array_to_object, array_to_set, array_to_string};
