//! Priority table for derive identifiers.
//!
//! The table defines the canonical order for `#[derive(...)]` lists: engine
//! marker traits first, then the std derives roughly in the order rustc
//! suggests them, then serde. Rank is the identifier's index in the table;
//! identifiers not listed sort after every known one.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical ordering for known derive identifiers. Rank = index.
pub const DERIVE_ORDER: &[&str] = &[
    // bevy derives
    "Component",
    "Resource",
    "States",
    "SubStates",
    "Event",
    // rust derives
    "Copy",
    "Clone",
    "Default",
    "Debug",
    "PartialEq",
    "Eq",
    "PartialOrd",
    "Ord",
    "Hash",
    // serde derives
    "Serialize",
    "Deserialize",
];

static RANKS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    DERIVE_ORDER
        .iter()
        .enumerate()
        .map(|(rank, name)| (*name, rank))
        .collect()
});

/// Rank of `ident` in the priority table.
///
/// Unknown identifiers receive a fallback rank equal to the table length,
/// which is strictly greater than every configured rank, so they sort after
/// all known identifiers.
pub fn rank(ident: &str) -> usize {
    RANKS.get(ident).copied().unwrap_or(DERIVE_ORDER.len())
}
