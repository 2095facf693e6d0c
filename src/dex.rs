//! Read-only reference tables (the dex files).
//!
//! A [`Dex`] is loaded once and never mutated afterwards, so a single
//! instance can back any number of parses, including concurrent ones.
//! Tests inject fixture tables through [`Dex::from_json`] instead of
//! touching the on-disk dataset.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::stats::{Stat, StatTable};

/// Species whose hyphenated form suffix is part of their identity and must
/// survive species-line stripping. Keys are normalized.
pub static FORM_SUFFIX_SPECIES: phf::Set<&'static str> = phf::phf_set! {
    "rotom",
};

/// One species entry: typing plus base stats.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesData {
    pub types: Vec<String>,
    #[serde(rename = "baseStats")]
    pub base_stats: StatTable,
}

/// One move entry. Only base PP matters to team loading; the rest of the
/// move record is the battle engine's business.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveData {
    pub pp: u8,
}

/// One nature entry. Neutral natures carry neither key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NatureData {
    #[serde(default)]
    pub plus: Option<Stat>,
    #[serde(default)]
    pub minus: Option<Stat>,
}

/// Immutable handle over the reference tables.
#[derive(Debug, Default)]
pub struct Dex {
    species: HashMap<String, SpeciesData>,
    moves: HashMap<String, MoveData>,
    natures: HashMap<String, NatureData>,
    abilities: HashMap<String, Value>,
    items: HashMap<String, Value>,
    types: HashMap<String, Value>,
}

impl Dex {
    /// Builds a dex from in-memory JSON tables. The ability/item/type
    /// tables start empty; team loading only passes those keys through.
    pub fn from_json(species: &str, moves: &str, natures: &str) -> Result<Self> {
        Ok(Self {
            species: serde_json::from_str(species).context("Failed to parse species table")?,
            moves: serde_json::from_str(moves).context("Failed to parse move table")?,
            natures: serde_json::from_str(natures).context("Failed to parse nature table")?,
            ..Self::default()
        })
    }

    /// Loads the gen4 dataset from `dir`, using the file names the data
    /// dump ships with.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let dex = Self {
            species: read_table(dir, "gen4_dex.json")?,
            moves: read_table(dir, "gen4_moves_dex.json")?,
            natures: read_table(dir, "natures.json")?,
            abilities: read_table(dir, "gen4_abilities_dex.json")?,
            items: read_table(dir, "gen4_items_dex.json")?,
            types: read_table(dir, "gen4_types_dex.json")?,
        };
        log::debug!(
            "loaded dex from {}: {} species, {} moves, {} natures",
            dir.display(),
            dex.species.len(),
            dex.moves.len(),
            dex.natures.len()
        );
        Ok(dex)
    }

    pub fn species(&self, key: &str) -> Option<&SpeciesData> {
        self.species.get(key)
    }

    pub fn move_data(&self, key: &str) -> Option<&MoveData> {
        self.moves.get(key)
    }

    pub fn nature(&self, key: &str) -> Option<&NatureData> {
        self.natures.get(key)
    }

    pub fn has_ability(&self, key: &str) -> bool {
        self.abilities.contains_key(key)
    }

    pub fn has_item(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn has_type(&self, key: &str) -> bool {
        self.types.contains_key(key)
    }
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T> {
    let path = dir.join(file);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))
}
