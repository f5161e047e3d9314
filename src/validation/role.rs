use once_cell::sync::Lazy;
use regex::Regex;

static ROLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.:-]+$").unwrap());

/// True if name is non-empty and free of whitespace and list separators
pub fn is_valid_role_name(name: &str) -> bool {
    ROLE_RE.is_match(name)
}
