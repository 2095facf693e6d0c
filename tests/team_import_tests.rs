use once_cell::sync::Lazy;
use pokemon_team_core::prelude::*;

static DEX: Lazy<Dex> = Lazy::new(|| {
    Dex::from_json(SPECIES_JSON, MOVES_JSON, NATURES_JSON).expect("fixture dex should parse")
});

const SPECIES_JSON: &str = r#"{
    "lapras":    { "types": ["Water", "Ice"],
                   "baseStats": { "hp": 130, "atk": 85, "def": 80, "spa": 85, "spd": 95, "spe": 60 } },
    "rotomwash": { "types": ["Electric", "Water"],
                   "baseStats": { "hp": 50, "atk": 65, "def": 107, "spa": 105, "spd": 107, "spe": 86 } },
    "tyranitar": { "types": ["Rock", "Dark"],
                   "baseStats": { "hp": 100, "atk": 134, "def": 110, "spa": 95, "spd": 100, "spe": 61 } },
    "skarmory":  { "types": ["Steel", "Flying"],
                   "baseStats": { "hp": 65, "atk": 80, "def": 140, "spa": 40, "spd": 70, "spe": 70 } },
    "blissey":   { "types": ["Normal"],
                   "baseStats": { "hp": 255, "atk": 10, "def": 10, "spa": 75, "spd": 135, "spe": 55 } },
    "gengar":    { "types": ["Ghost", "Poison"],
                   "baseStats": { "hp": 60, "atk": 65, "def": 60, "spa": 130, "spd": 75, "spe": 110 } }
}"#;

const MOVES_JSON: &str = r#"{
    "surf": { "pp": 15 }, "icebeam": { "pp": 10 }, "thunderbolt": { "pp": 15 },
    "hydropump": { "pp": 5 }, "shadowball": { "pp": 15 }, "hiddenpower": { "pp": 15 },
    "stoneedge": { "pp": 5 }, "crunch": { "pp": 15 }, "earthquake": { "pp": 10 },
    "spikes": { "pp": 20 }, "roost": { "pp": 10 }, "whirlwind": { "pp": 20 },
    "bravebird": { "pp": 15 }, "seismictoss": { "pp": 20 }, "softboiled": { "pp": 10 },
    "toxic": { "pp": 10 }, "protect": { "pp": 10 }, "focusblast": { "pp": 5 }
}"#;

const NATURES_JSON: &str = r#"{
    "hardy":   {},
    "bold":    { "plus": "def", "minus": "atk" },
    "adamant": { "plus": "atk", "minus": "spa" },
    "impish":  { "plus": "def", "minus": "spa" },
    "calm":    { "plus": "spd", "minus": "atk" },
    "timid":   { "plus": "spe", "minus": "atk" }
}"#;

const FULL_TEAM: &str = "\
Lapras @ Leftovers
Ability: Water Absorb
EVs: 252 HP / 252 Def / 4 SpD
Bold Nature
- Surf

Rotom-Wash @ Choice Scarf
Ability: Levitate
EVs: 252 SpA / 4 SpD / 252 Spe
Timid Nature
- Thunderbolt
- Hydro Pump
- Shadow Ball
- Hidden Power

Tyranitar (M) @ Choice Band
Ability: Sand Stream
EVs: 252 Atk / 4 SpD / 252 Spe
Adamant Nature
- Stone Edge
- Crunch
- Earthquake

Skarmory @ Shed Shell
Ability: Keen Eye
EVs: 252 HP / 252 Def
Impish Nature
- Spikes
- Roost
- Whirlwind
- Brave Bird

Blissey @ Leftovers
Ability: Natural Cure
EVs: 4 HP / 252 Def / 252 SpD
Calm Nature
- Seismic Toss
- Soft-Boiled
- Toxic
- Protect

Gengar @ Life Orb
Ability: Levitate
EVs: 252 SpA / 4 SpD / 252 Spe
Timid Nature
- Shadow Ball
- Focus Blast
- Thunderbolt
";

#[test]
fn lapras_end_to_end() {
    let side = import_team(
        "\
Lapras @ Leftovers
Ability: Water Absorb
EVs: 252 HP / 252 Def / 4 SpD
Bold Nature
- Surf
",
        &DEX,
    )
    .expect("single Lapras team should import");

    assert_eq!(side.pokemon.len(), 1);
    let lapras = side.active();
    assert_eq!(lapras.id, "lapras");
    assert_eq!(lapras.item.as_deref(), Some("leftovers"));
    assert_eq!(lapras.ability.as_deref(), Some("waterabsorb"));
    assert_eq!(lapras.types, vec!["water", "ice"]);
    assert_eq!(lapras.hp, 464);
    assert_eq!(lapras.maxhp, 464);
    // Bold: def gets the 1.1 multiplier, atk the 0.9.
    assert_eq!(lapras.defense, 284);
    assert_eq!(lapras.attack, 185);
    assert_eq!(lapras.special_attack, 206);
    assert_eq!(lapras.special_defense, 227);
    assert_eq!(lapras.speed, 156);
    assert_eq!(lapras.moves.len(), 1);
    assert_eq!(lapras.moves[0].id, "surf");
    assert_eq!(lapras.moves[0].pp, 24); // floor(15 * 1.6)
    assert!(!lapras.moves[0].disabled);
}

#[test]
fn record_and_move_counts_follow_the_text() {
    let side = import_team(FULL_TEAM, &DEX).expect("full team should import");
    let names: Vec<&str> = side.pokemon.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        names,
        ["lapras", "rotomwash", "tyranitar", "skarmory", "blissey", "gengar"]
    );
    let move_counts: Vec<usize> = side.pokemon.iter().map(|p| p.moves.len()).collect();
    assert_eq!(move_counts, [1, 4, 3, 4, 4, 3]);
}

#[test]
fn first_species_line_leads() {
    let side = import_team(FULL_TEAM, &DEX).expect("full team should import");
    assert_eq!(side.active().id, "lapras");
    assert_eq!(side.reserve().len(), 5);
    assert_eq!(side.reserve()[0].id, "rotomwash");
}

#[test]
fn import_is_deterministic() {
    let first = import_team(FULL_TEAM, &DEX).expect("first import should succeed");
    let second = import_team(FULL_TEAM, &DEX).expect("second import should succeed");
    assert_eq!(first, second);
}

#[test]
fn timid_rotom_outspeeds_its_neutral_self() {
    let side = import_team(FULL_TEAM, &DEX).expect("full team should import");
    let rotom = &side.pokemon[1];
    // base 86, 252 EVs, 31 IVs, level 100: inner 271, * 1.1 floors to 298.
    assert_eq!(rotom.speed, 298);
    assert_eq!(rotom.attack, 149); // 0.9 on the 166 neutral value
}

#[test]
fn evs_before_any_species_line_is_an_ordering_error() {
    let result = import_team("\nEVs: 252 HP / 252 Def\n", &DEX);
    assert_eq!(
        result,
        Err(TeamError::NoCurrentPokemon { line_kind: "EVs" })
    );
}

#[test]
fn empty_text_cannot_start_a_battle() {
    assert_eq!(import_team("", &DEX), Err(TeamError::EmptySide));
}

#[test]
fn setup_defaults_are_disabled() {
    let setup =
        initialize_state(FULL_TEAM, FULL_TEAM, &DEX).expect("both sides should import");
    assert_eq!(setup.weather, Weather::None);
    assert_eq!(setup.terrain, Terrain::None);
    assert!(!setup.trick_room);
    for side in [&setup.side_one, &setup.side_two] {
        assert_eq!(side.side_conditions, SideConditions::default());
        assert_eq!(side.wish, (0, 0));
        assert_eq!(side.future_sight, (0, 0));
    }
}

#[test]
fn unknown_nature_degrades_to_neutral() {
    let side = import_team(
        "\
Gengar @ Life Orb
Quirky Nature
- Shadow Ball
",
        &DEX,
    )
    .expect("quirky is unknown to the fixture but must not fail");
    let gengar = side.active();
    // All five non-HP stats at the neutral formula value.
    assert_eq!(gengar.special_attack, 296); // 2*130+31 = 291, +5, * 1.0
    assert_eq!(gengar.speed, 256);
}
