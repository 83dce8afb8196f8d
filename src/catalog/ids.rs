//! Synthetic identifiers: `<prefix>-<6 hex chars>`.
//!
//! Uniqueness is probabilistic and never checked before insert. A collision is
//! rejected by the primary key and surfaces as a storage failure.

use super::Level;
use uuid::Uuid;

/// Number of hex characters appended to the level prefix.
pub const ID_SUFFIX_LEN: usize = 6;

/// Generates a fresh identifier for an entity of `level`.
#[must_use]
pub fn generate(level: Level) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}-{}", level.prefix(), &hex[..ID_SUFFIX_LEN])
}

/// Returns `true` when `id` has the shape produced by [`generate`] for `level`.
///
/// Stores use it to reject a malformed parent id before any lookup.
#[must_use]
pub fn is_valid(level: Level, id: &str) -> bool {
    id.strip_prefix(level.prefix())
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|suffix| {
            suffix.len() == ID_SUFFIX_LEN
                && suffix
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
}
