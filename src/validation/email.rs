//! Email shape check
//!
//! Accepts `local@domain.tld`-shaped strings: a run without whitespace or
//! `@`, an `@`, another such run, a literal `.`, and a final such run.
//! The domain run may itself contain dots. Whitespace includes the byte
//! order mark (U+FEFF), which the regex crate's `\s` leaves out.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap();
}

/// Check whether `email` has a `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
