//! Side assembly and battle-setup defaults.
//!
//! The last stage before handoff to the battle engine: resolved records are
//! grouped into sides, and two sides plus zeroed field defaults make a
//! [`BattleSetup`].

use serde::Serialize;

use crate::dex::Dex;
use crate::error::TeamError;
use crate::parser::parse_team;
use crate::team::{resolve_pokemon, Pokemon, PokemonSet};

/// Entry hazards and screens for one side. Everything starts cleared.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct SideConditions {
    pub spikes: u8,
    pub toxic_spikes: u8,
    pub stealth_rock: bool,
    pub reflect_turns: u8,
    pub light_screen_turns: u8,
    pub safeguard_turns: u8,
    pub tailwind_turns: u8,
}

/// One player's roster plus side-level state defaults.
///
/// The first Pokemon is the active slot and the rest are the reserve. That
/// selection is positional: whichever species line came first in the team
/// text leads. Callers choosing a different lead should reorder the text.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Side {
    pub pokemon: Vec<Pokemon>,
    pub side_conditions: SideConditions,
    /// Wish counter: (turns remaining, pending heal).
    pub wish: (u8, u16),
    /// Future Sight counter: (turns remaining, pending damage).
    pub future_sight: (u8, u16),
}

impl Side {
    /// Resolves parsed sets into a side, preserving parse order.
    ///
    /// Fails with [`TeamError::EmptySide`] when `sets` is empty, since a
    /// battle cannot start without at least one Pokemon per side.
    pub fn from_sets(sets: Vec<PokemonSet>, dex: &Dex) -> Result<Self, TeamError> {
        if sets.is_empty() {
            return Err(TeamError::EmptySide);
        }
        let pokemon = sets
            .into_iter()
            .map(|set| resolve_pokemon(set, dex))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            pokemon,
            side_conditions: SideConditions::default(),
            wish: (0, 0),
            future_sight: (0, 0),
        })
    }

    pub fn active(&self) -> &Pokemon {
        &self.pokemon[0]
    }

    pub fn reserve(&self) -> &[Pokemon] {
        &self.pokemon[1..]
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    Sand,
    Hail,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    None,
    Grassy,
    Electric,
    Psychic,
    Misty,
}

/// A two-sided match setup ready for the battle engine's state constructor.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BattleSetup {
    pub side_one: Side,
    pub side_two: Side,
    pub weather: Weather,
    pub terrain: Terrain,
    pub trick_room: bool,
}

impl BattleSetup {
    /// Pairs two sides with global-field defaults (no weather, no terrain,
    /// Trick Room inactive).
    pub fn new(side_one: Side, side_two: Side) -> Self {
        Self {
            side_one,
            side_two,
            weather: Weather::None,
            terrain: Terrain::None,
            trick_room: false,
        }
    }
}

/// Parses a team export and assembles it into a side in one step.
pub fn import_team(text: &str, dex: &Dex) -> Result<Side, TeamError> {
    let sets = parse_team(text, dex)?;
    Side::from_sets(sets, dex)
}

/// Builds a full match setup from two team exports.
pub fn initialize_state(team_one: &str, team_two: &str, dex: &Dex) -> Result<BattleSetup, TeamError> {
    let side_one = import_team(team_one, dex)?;
    let side_two = import_team(team_two, dex)?;
    Ok(BattleSetup::new(side_one, side_two))
}
