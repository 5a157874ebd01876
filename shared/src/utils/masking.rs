//! Masking of identities for log output

/// Number of leading characters left visible
const VISIBLE_PREFIX: usize = 2;

/// Mask an identity (usually an email address) for display in logs
///
/// The domain of an email address stays readable; the local part keeps its
/// first two characters. Works on characters, not bytes, so unicode
/// identities are never split inside a code point.
///
/// # Example
///
/// ```
/// use vs_shared::mask_identity;
///
/// assert_eq!(mask_identity("user@example.com"), "us**@example.com");
/// assert_eq!(mask_identity("alice"), "al***");
/// ```
pub fn mask_identity(identity: &str) -> String {
    match identity.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", mask_part(local), domain),
        None => mask_part(identity),
    }
}

fn mask_part(part: &str) -> String {
    let total = part.chars().count();
    if total <= VISIBLE_PREFIX {
        return "*".repeat(total);
    }

    let visible: String = part.chars().take(VISIBLE_PREFIX).collect();
    format!("{}{}", visible, "*".repeat(total - VISIBLE_PREFIX))
}
