use thiserror::Error;

/// Errors raised while parsing a team set or assembling a side.
///
/// Every variant aborts the parse; no partial team is returned. Unknown
/// natures are deliberately absent here: a missing nature entry resolves
/// with a neutral modifier instead of failing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamError {
    /// A configuration line appeared before any species line.
    #[error("{line_kind} line found before any species line")]
    NoCurrentPokemon { line_kind: &'static str },

    /// A normalized species key has no entry in the species table.
    #[error("species '{name}' not found in the species table")]
    UnknownSpecies { name: String },

    /// A normalized move key has no entry in the move table.
    #[error("move '{name}' not found in the move table")]
    UnknownMove { name: String },

    /// An EV/IV segment did not parse as `<value> <stat>`.
    #[error("malformed EV/IV segment '{segment}'")]
    BadStatPair { segment: String },

    /// A side must contain at least one Pokemon for a battle to start.
    #[error("a side must contain at least one Pokemon")]
    EmptySide,
}
