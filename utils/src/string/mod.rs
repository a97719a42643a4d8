//! String helpers: format checks, character-class checks and conversions.

mod has;
mod is;
mod patterns;
mod to;

pub use has::{
    string_has, string_has_alpha, string_has_chinese, string_has_emoji, string_has_line_break,
    string_has_lowercase, string_has_number, string_has_space, string_has_symbol,
    string_has_uppercase,
};
pub use is::{
    string_is, string_is_date, string_is_email, string_is_hex, string_is_html, string_is_ip,
    string_is_ipv4, string_is_ipv6, string_is_json, string_is_number, string_is_phone,
    string_is_slug, string_is_time, string_is_url, string_is_uuid,
};
pub use to::{
    string_to, string_to_array, string_to_boolean, string_to_camel_case, string_to_constant,
    string_to_date, string_to_json, string_to_number, string_to_slug, string_to_title_case,
    string_to_upper,
};
