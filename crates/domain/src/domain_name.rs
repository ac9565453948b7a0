//! Helpers for dot-terminated domain names.

use crate::DomainError;

/// Appends the trailing dot when missing. The root name stays `"."`.
pub fn to_fqdn(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." {
        ".".to_string()
    } else if trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

/// Non-empty labels of a name, left to right.
pub fn labels(name: &str) -> impl DoubleEndedIterator<Item = &str> {
    name.split('.').filter(|l| !l.is_empty())
}

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// Checks label lengths, total length and that every byte is printable ASCII.
pub fn validate(name: &str) -> Result<(), DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Ok(());
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "{} exceeds {} characters",
            name, MAX_NAME_LEN
        )));
    }
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "{} contains an empty label",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} characters",
                label, MAX_LABEL_LEN
            )));
        }
        if !label.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' is not printable ASCII",
                label
            )));
        }
    }
    Ok(())
}

/// True when `name` equals `zone` or sits below it. Both are FQDNs.
pub fn is_within(name: &str, zone: &str) -> bool {
    if zone == "." {
        return true;
    }
    let name = name.to_ascii_lowercase();
    let zone = zone.to_ascii_lowercase();
    name == zone || name.ends_with(&format!(".{}", zone))
}
