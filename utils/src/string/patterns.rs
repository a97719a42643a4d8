//! Fixed patterns behind the derived string predicates and case transforms.
//!
//! Digit and word classes are spelled out as ASCII ranges: `\d` and `\w`
//! are Unicode-aware in `regex`, and these checks are ASCII-only.

use std::sync::OnceLock;

use regex::Regex;

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

pub(crate) fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(Patterns::new)
}

#[derive(Debug)]
pub(crate) struct Patterns {
    // Whole-string formats
    pub(crate) email: Regex,
    pub(crate) url: Regex,
    pub(crate) phone: Regex,
    pub(crate) digits: Regex,
    pub(crate) uuid: Regex,
    pub(crate) hex_color: Regex,
    pub(crate) date: Regex,
    pub(crate) time: Regex,
    pub(crate) ipv4: Regex,
    pub(crate) ipv6: Regex,
    pub(crate) html_tag: Regex,
    pub(crate) slug: Regex,

    // Character classes
    pub(crate) digit: Regex,
    pub(crate) alpha: Regex,
    pub(crate) chinese: Regex,
    pub(crate) space: Regex,
    pub(crate) uppercase: Regex,
    pub(crate) lowercase: Regex,
    pub(crate) symbol: Regex,
    pub(crate) emoji: Regex,
    pub(crate) line_break: Regex,

    // Case transforms
    pub(crate) camel_separator: Regex,
    pub(crate) slug_strip: Regex,
    pub(crate) whitespace_run: Regex,
    pub(crate) constant_separator: Regex,
    pub(crate) title_word_start: Regex,
}

impl Patterns {
    fn new() -> Self {
        Self {
            email: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"),
            url: Regex::new(
                r"^(https?://)[A-Za-z0-9_\\\-]+(\.[A-Za-z0-9_\\\-]+)+[/#?]?[^\n\r\x{2028}\x{2029}]*$",
            )
            .expect("valid URL regex"),
            phone: Regex::new(r"^1[3-9][0-9]{9}$").expect("valid phone regex"),
            digits: Regex::new(r"^[0-9]+$").expect("valid digits regex"),
            uuid: Regex::new(
                r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
            )
            .expect("valid UUID regex"),
            hex_color: Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
                .expect("valid hex color regex"),
            date: Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"),
            time: Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9](:[0-5][0-9])?$")
                .expect("valid time regex"),
            ipv4: Regex::new(
                r"^(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])){3}$",
            )
            .expect("valid IPv4 regex"),
            // The anchors bind to the first and last alternatives only.
            ipv6: Regex::new(
                r"^(([0-9a-fA-F]{1,4}:){7}([0-9a-fA-F]{1,4}|:))|(([0-9a-fA-F]{1,4}:){1,7}:)|(::([0-9a-fA-F]{1,4}:){0,6}[0-9a-fA-F]{1,4})$",
            )
            .expect("valid IPv6 regex"),
            html_tag: Regex::new(r"<[^>]+>").expect("valid HTML tag regex"),
            slug: Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"),

            digit: Regex::new(r"[0-9]").expect("valid digit regex"),
            alpha: Regex::new(r"[a-zA-Z]").expect("valid alpha regex"),
            chinese: Regex::new(r"[\x{4e00}-\x{9fa5}]").expect("valid CJK regex"),
            space: Regex::new(r"\s").expect("valid whitespace regex"),
            uppercase: Regex::new(r"[A-Z]").expect("valid uppercase regex"),
            lowercase: Regex::new(r"[a-z]").expect("valid lowercase regex"),
            symbol: Regex::new(r#"[!@#$%^&*(),.?":{}|<>\-+=\\\[\]~]"#).expect("valid symbol regex"),
            emoji: Regex::new(r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F6FF}\x{1F900}-\x{1F9FF}]")
                .expect("valid emoji regex"),
            line_break: Regex::new(r"[\r\n]").expect("valid line break regex"),

            camel_separator: Regex::new(r"[-_\s]+(.)?").expect("valid camel separator regex"),
            slug_strip: Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid slug strip regex"),
            whitespace_run: Regex::new(r"\s+").expect("valid whitespace run regex"),
            constant_separator: Regex::new(r"[-\s]+").expect("valid constant separator regex"),
            title_word_start: Regex::new(r"(?:^|\s|[-_])[A-Za-z0-9_]")
                .expect("valid title word regex"),
        }
    }
}
