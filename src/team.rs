//! Intermediate and resolved team records.

use serde::Serialize;

use crate::dex::Dex;
use crate::error::TeamError;
use crate::stats::{calc_hp_stat, calc_stat, nature_modifier, Stat, StatTable};

/// Level applied when a set carries no level information.
pub const DEFAULT_LEVEL: u8 = 100;

/// One move slot on a set: normalized id, disabled flag, remaining PP.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MoveSlot {
    pub id: String,
    pub disabled: bool,
    pub pp: u8,
}

/// Raw configuration for one Pokemon, straight out of the parser.
///
/// EVs default to 0 and IVs to 31 until an `EVs:`/`IVs:` line overrides
/// individual slots. `ability` and `nature` stay `None` until their lines
/// appear; `item` comes from the species line itself.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct PokemonSet {
    pub name: String,
    pub level: u8,
    pub types: Vec<String>,
    pub evs: StatTable,
    pub ivs: StatTable,
    pub moves: Vec<MoveSlot>,
    pub ability: Option<String>,
    pub item: Option<String>,
    pub nature: Option<String>,
}

impl PokemonSet {
    /// A fresh set with parser defaults applied.
    pub fn new(name: String, types: Vec<String>, item: Option<String>) -> Self {
        Self {
            name,
            level: DEFAULT_LEVEL,
            types,
            evs: StatTable::filled(0),
            ivs: StatTable::filled(31),
            moves: Vec::new(),
            ability: None,
            item,
            nature: None,
        }
    }
}

/// A battle-ready Pokemon record. Immutable once produced; ownership moves
/// to the battle engine after side assembly.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Pokemon {
    pub id: String,
    pub level: u8,
    pub types: Vec<String>,
    pub hp: u16,
    pub maxhp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
    pub ability: Option<String>,
    pub item: Option<String>,
    pub nature: Option<String>,
    pub moves: Vec<MoveSlot>,
}

/// Resolves a raw set into concrete stat values using the species table.
///
/// Runs the stat formula once per slot; `maxhp` is fixed to the computed
/// HP. Fails if the species key is missing from the dex.
pub fn resolve_pokemon(set: PokemonSet, dex: &Dex) -> Result<Pokemon, TeamError> {
    let species = dex
        .species(&set.name)
        .ok_or_else(|| TeamError::UnknownSpecies {
            name: set.name.clone(),
        })?;
    let base = species.base_stats;

    let hp = calc_hp_stat(
        base.get(Stat::Hp),
        set.ivs.get(Stat::Hp),
        set.evs.get(Stat::Hp),
        set.level,
    );
    let non_hp = |stat: Stat| {
        let modifier = nature_modifier(dex, set.nature.as_deref(), stat);
        calc_stat(
            base.get(stat),
            set.ivs.get(stat),
            set.evs.get(stat),
            set.level,
            modifier,
        )
    };
    let attack = non_hp(Stat::Atk);
    let defense = non_hp(Stat::Def);
    let special_attack = non_hp(Stat::Spa);
    let special_defense = non_hp(Stat::Spd);
    let speed = non_hp(Stat::Spe);

    let PokemonSet {
        name,
        level,
        types,
        moves,
        ability,
        item,
        nature,
        ..
    } = set;

    Ok(Pokemon {
        id: name,
        level,
        types,
        hp,
        maxhp: hp,
        attack,
        defense,
        special_attack,
        special_defense,
        speed,
        ability,
        item,
        nature,
        moves,
    })
}
