//! Stat identifiers and the stat formula.
//!
//! The formula's floor sequence is reproduced exactly as the battle engine
//! expects it: integer division for the inner terms, then a single `f64`
//! multiply by the nature modifier, then one final floor. Reordering any of
//! these changes results by one point on some inputs.

use serde::{Deserialize, Serialize};

use crate::dex::Dex;

/// One of the six stat slots.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    /// Parses the abbreviation used in EV/IV lines, case-insensitively.
    pub fn from_abbrev(name: &str) -> Option<Stat> {
        match name.to_ascii_lowercase().as_str() {
            "hp" => Some(Stat::Hp),
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" | "spatk" => Some(Stat::Spa),
            "spd" | "spdef" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            _ => None,
        }
    }
}

/// A value per stat slot. Used for base stats, EVs and IVs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u16,
    #[serde(default)]
    pub atk: u16,
    #[serde(default)]
    pub def: u16,
    #[serde(default)]
    pub spa: u16,
    #[serde(default)]
    pub spd: u16,
    #[serde(default)]
    pub spe: u16,
}

impl StatTable {
    /// A table with every slot set to `value`.
    pub fn filled(value: u16) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u16) {
        let slot = match stat {
            Stat::Hp => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::Spa => &mut self.spa,
            Stat::Spd => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *slot = value;
    }
}

/// `floor((2*base + iv + floor(ev/4)) * level / 100) + level + 10`.
pub fn calc_hp_stat(base: u16, iv: u16, ev: u16, level: u8) -> u16 {
    let inner = (2 * u32::from(base) + u32::from(iv) + u32::from(ev) / 4) * u32::from(level) / 100;
    (inner + u32::from(level) + 10) as u16
}

/// `floor((floor((2*base + iv + floor(ev/4)) * level / 100) + 5) * modifier)`.
///
/// The inner value is floored before the nature multiply, not after.
pub fn calc_stat(base: u16, iv: u16, ev: u16, level: u8, modifier: f64) -> u16 {
    let inner = (2 * u32::from(base) + u32::from(iv) + u32::from(ev) / 4) * u32::from(level) / 100;
    (f64::from(inner + 5) * modifier).floor() as u16
}

/// Looks up the nature modifier for `stat`.
///
/// A missing nature line, an unknown nature key, or a nature without the
/// relevant `plus`/`minus` entry all resolve to 1.0.
pub fn nature_modifier(dex: &Dex, nature: Option<&str>, stat: Stat) -> f64 {
    let Some(data) = nature.and_then(|key| dex.nature(key)) else {
        return 1.0;
    };
    if data.plus == Some(stat) {
        1.1
    } else if data.minus == Some(stat) {
        0.9
    } else {
        1.0
    }
}
