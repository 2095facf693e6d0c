//! Team-set loading core for Pokemon battle engines.
//!
//! Turns a Showdown-style team export into fully resolved records: concrete
//! stat values, move slots with usable PP, and normalized ability/item/type
//! keys. The pipeline is [`parser::parse_team`] → [`team::resolve_pokemon`]
//! → [`side::Side`], with [`side::import_team`] and
//! [`side::initialize_state`] as the one-call entry points.
//!
//! Reference data comes in through an immutable [`dex::Dex`] handle, so
//! tests and callers can inject their own tables.

pub mod dex;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod side;
pub mod stats;
pub mod team;

pub use parser::parse_team;
pub use side::{import_team, initialize_state};

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::dex::Dex;
    pub use crate::error::TeamError;
    pub use crate::normalize::normalize_name;
    pub use crate::parser::parse_team;
    pub use crate::side::{
        import_team, initialize_state, BattleSetup, Side, SideConditions, Terrain, Weather,
    };
    pub use crate::stats::{Stat, StatTable};
    pub use crate::team::{MoveSlot, Pokemon, PokemonSet};
}
