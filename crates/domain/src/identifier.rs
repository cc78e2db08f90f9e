//! Resource identifier canonicalization.
//!
//! The control plane hands out identifiers in several spellings (dashed,
//! undashed, upper-case, dashes in odd places). The backing store keys every
//! object on the dashed lower-case 8-4-4-4-12 form.

use crate::errors::DomainError;
use uuid::Uuid;

const UNDASHED_LEN: usize = 32;

/// Best-effort canonical form of an identifier. Never fails.
///
/// Identifiers longer than 32 characters that contain dashes are stripped of
/// them; a 32 hex character string is re-dashed as 8-4-4-4-12. Anything else
/// comes back lower-cased and otherwise untouched.
pub fn normalize(id: &str) -> String {
    let mut value = if id.len() > UNDASHED_LEN && id.contains('-') {
        id.replace('-', "")
    } else {
        id.to_string()
    };

    if value.len() == UNDASHED_LEN && value.bytes().all(|b| b.is_ascii_hexdigit()) {
        value = format!(
            "{}-{}-{}-{}-{}",
            &value[0..8],
            &value[8..12],
            &value[12..16],
            &value[16..20],
            &value[20..32]
        );
    }

    value.to_lowercase()
}

/// Normalizes `id` and requires the result to be a well-formed UUID.
pub fn parse_identifier(id: &str) -> Result<Uuid, DomainError> {
    let normalized = normalize(id.trim());
    Uuid::parse_str(&normalized)
        .map_err(|e| DomainError::InvalidIdentifier(format!("'{}': {}", id, e)))
}

/// Strict canonical form used for every backing-store key.
pub fn canonical_id(id: &str) -> Result<String, DomainError> {
    Ok(parse_identifier(id)?.hyphenated().to_string())
}
