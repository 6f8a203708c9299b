//! Turns raw describe/test identifiers into human-readable labels.
//!
//! Total functions: any input that does not match a recognized shape passes
//! through unchanged, never an error.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CAMEL_CASE: Regex =
        Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("Regex compilation error");
}

const DESCRIBE_PREFIXES: [&str; 2] = ["describe_", "Describe_"];

/// `describe_my_feature` becomes `my feature`, `describe_MyClass` stays
/// `MyClass` (a class name), acronym segments keep their case. Identifiers
/// without a recognized prefix are returned unchanged.
pub fn format_describe(name: &str) -> String {
    let stripped = DESCRIBE_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix));
    let stripped = match stripped {
        Some(rest) if !rest.is_empty() => rest,
        _ => return name.to_owned(),
    };

    if CAMEL_CASE.is_match(stripped) && stripped.chars().any(char::is_lowercase) {
        return stripped.to_owned();
    }

    stripped
        .split('_')
        .map(|segment| {
            if is_acronym(segment) {
                segment.to_owned()
            } else {
                segment.to_lowercase()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// `it_does_something` becomes `it does something`; the `it`/`they` prefix
/// stays so the label reads as a sentence.
pub fn format_test(name: &str) -> String {
    name.replace('_', " ")
}

fn is_acronym(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_uppercase())
}
