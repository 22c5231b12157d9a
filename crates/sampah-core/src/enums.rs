//! Status and category enums for sampah.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` so the
//! client can refuse a transition before any request is sent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// BioporiStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a biopori hole, derived from its `is_full`/`is_harvested` flags.
///
/// ```text
/// active → full → harvested
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BioporiStatus {
    Active,
    Full,
    Harvested,
}

impl BioporiStatus {
    /// Derive the status from the two wire flags.
    ///
    /// A harvested flag wins even if the server never set `is_full`.
    #[must_use]
    pub const fn from_flags(is_full: bool, is_harvested: bool) -> Self {
        if is_harvested {
            Self::Harvested
        } else if is_full {
            Self::Full
        } else {
            Self::Active
        }
    }

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Full],
            Self::Full => &[Self::Harvested],
            Self::Harvested => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Full => "full",
            Self::Harvested => "harvested",
        }
    }
}

impl fmt::Display for BioporiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WasteKind
// ---------------------------------------------------------------------------

/// Category of waste accepted by a bank sampah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WasteKind {
    Plastik,
    Botol,
    Kertas,
}

impl WasteKind {
    pub const ALL: [Self; 3] = [Self::Plastik, Self::Botol, Self::Kertas];

    /// Display label used in the sale message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plastik => "Plastik",
            Self::Botol => "Botol",
            Self::Kertas => "Kertas",
        }
    }
}

impl fmt::Display for WasteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
