//! Showdown team-set parser.
//!
//! Single forward pass over the lines of a team export, keeping a cursor to
//! the most recently introduced set. Configuration lines always mutate that
//! set; seeing one before any species line is a [`TeamError::NoCurrentPokemon`].
//!
//! Line forms are matched in a fixed precedence order: species (`@`),
//! `Ability:`, `EVs`, `IVs`, `Nature` without a hyphen, blank, leading `-`
//! for moves. Anything else is ignored.

use crate::dex::{Dex, FORM_SUFFIX_SPECIES};
use crate::error::TeamError;
use crate::normalize::normalize_name;
use crate::stats::{Stat, StatTable};
use crate::team::{MoveSlot, PokemonSet};

/// Length of the `Ability: ` label, including the trailing space.
const ABILITY_LABEL_LEN: usize = 9;

/// Starting PP is base PP scaled by the maximum PP-Up investment.
const PP_UP_FACTOR: f64 = 1.6;

/// Parses a team export into raw sets, in order of appearance.
pub fn parse_team(text: &str, dex: &Dex) -> Result<Vec<PokemonSet>, TeamError> {
    let mut team: Vec<PokemonSet> = Vec::new();
    let mut current: Option<usize> = None;

    for line in text.lines() {
        if let Some(at) = line.find('@') {
            let set = parse_species_line(line, at, dex)?;
            log::debug!("parsed species line for '{}'", set.name);
            team.push(set);
            current = Some(team.len() - 1);
        } else if line.contains("Ability:") {
            let idx = current_index(current, "Ability")?;
            let rest = line.get(ABILITY_LABEL_LEN..).unwrap_or("");
            team[idx].ability = Some(normalize_name(rest));
        } else if line.contains("EVs") {
            let idx = current_index(current, "EVs")?;
            merge_stat_pairs(line, &mut team[idx].evs)?;
        } else if line.contains("IVs") {
            let idx = current_index(current, "IVs")?;
            merge_stat_pairs(line, &mut team[idx].ivs)?;
        } else if line.contains("Nature") && !line.contains('-') {
            let idx = current_index(current, "Nature")?;
            let token = line.split_whitespace().next().unwrap_or("");
            team[idx].nature = Some(normalize_name(token));
        } else if line.is_empty() {
            continue;
        } else if line.starts_with('-') {
            let idx = current_index(current, "move")?;
            let id = normalize_name(line.get(2..).unwrap_or(""));
            let base_pp = dex
                .move_data(&id)
                .ok_or_else(|| TeamError::UnknownMove { name: id.clone() })?
                .pp;
            team[idx].moves.push(MoveSlot {
                id,
                disabled: false,
                pp: (f64::from(base_pp) * PP_UP_FACTOR).floor() as u8,
            });
        }
    }

    Ok(team)
}

fn current_index(current: Option<usize>, line_kind: &'static str) -> Result<usize, TeamError> {
    current.ok_or(TeamError::NoCurrentPokemon { line_kind })
}

/// Introduces a new set from a species line (`Name[-Form][ (Gender)] @ Item`).
///
/// The species name drops a trailing gender parenthetical, and a hyphenated
/// form suffix unless the species is in [`FORM_SUFFIX_SPECIES`]. Stripping
/// applies to this line only; item, ability, move and nature text is never
/// stripped this way.
fn parse_species_line(line: &str, at: usize, dex: &Dex) -> Result<PokemonSet, TeamError> {
    let before = line[..at].trim();
    let display = match before.find('(') {
        Some(paren) => &before[..paren],
        None => match before.find('-') {
            Some(hyphen) if !keeps_form_suffix(before) => &before[..hyphen],
            _ => before,
        },
    };
    let name = normalize_name(display);
    let species = dex
        .species(&name)
        .ok_or_else(|| TeamError::UnknownSpecies { name: name.clone() })?;
    let types = species.types.iter().map(|t| t.to_lowercase()).collect();
    let item = normalize_name(&line[at + 1..]);
    let item = (!item.is_empty()).then_some(item);
    Ok(PokemonSet::new(name, types, item))
}

fn keeps_form_suffix(display: &str) -> bool {
    let key = normalize_name(display);
    FORM_SUFFIX_SPECIES
        .iter()
        .any(|species| key.contains(species))
}

/// Merges `<value> <stat>` pairs from an EVs/IVs line into `table`.
///
/// Segments are `/`-separated; only the stats mentioned are overwritten.
/// A non-numeric value or unknown abbreviation is a [`TeamError::BadStatPair`].
fn merge_stat_pairs(line: &str, table: &mut StatTable) -> Result<(), TeamError> {
    let rest = match line.find(':') {
        Some(colon) => &line[colon + 1..],
        None => line
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest)
            .unwrap_or(""),
    };
    for segment in rest.split('/') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let bad = || TeamError::BadStatPair {
            segment: segment.to_string(),
        };
        let mut parts = segment.split_whitespace();
        let (Some(value), Some(abbrev), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(bad());
        };
        let value: u16 = value.parse().map_err(|_| bad())?;
        let stat = Stat::from_abbrev(abbrev).ok_or_else(bad)?;
        table.set(stat, value);
    }
    Ok(())
}
