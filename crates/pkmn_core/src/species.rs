//! Species reference data shared by every generation.
//!
//! Species are keyed by national dex number. Base stats are the values used by
//! the generation 3 games; generation 1 reads its single Special stat from a
//! separate column. Generation 1 and 3 store species under an internal index
//! that differs from the dex number, generation 2 stores the dex number
//! directly.

use serde::{Deserialize, Serialize};

use crate::stats::GrowthRate::{self, *};

pub const GEN1_DEX_MAX: u16 = 151;
pub const GEN2_DEX_MAX: u16 = 251;
pub const NATIONAL_DEX_MAX: u16 = 386;

const GEN3_HOENN_INDEX_START: u16 = 277;
const GEN3_INDEX_MAX: u16 = 411;

// Generation 1 type ids as stored in the party record.
pub const NORMAL: u8 = 0x00;
pub const FIGHTING: u8 = 0x01;
pub const FLYING: u8 = 0x02;
pub const POISON: u8 = 0x03;
pub const GROUND: u8 = 0x04;
pub const ROCK: u8 = 0x05;
pub const BUG: u8 = 0x07;
pub const GHOST: u8 = 0x08;
pub const FIRE: u8 = 0x14;
pub const WATER: u8 = 0x15;
pub const GRASS: u8 = 0x16;
pub const ELECTRIC: u8 = 0x17;
pub const PSYCHIC: u8 = 0x18;
pub const ICE: u8 = 0x19;
pub const DRAGON: u8 = 0x1A;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Species {
    pub name: &'static str,
    pub base: BaseStats,
    pub growth: GrowthRate,
}

#[allow(clippy::too_many_arguments)]
const fn sp(
    name: &'static str,
    hp: u8,
    attack: u8,
    defense: u8,
    sp_attack: u8,
    sp_defense: u8,
    speed: u8,
    growth: GrowthRate,
) -> Species {
    Species {
        name,
        base: BaseStats {
            hp,
            attack,
            defense,
            sp_attack,
            sp_defense,
            speed,
        },
        growth,
    }
}

pub fn by_national(national: u16) -> Option<&'static Species> {
    if national == 0 {
        return None;
    }
    SPECIES.get(usize::from(national) - 1)
}

pub fn name(national: u16) -> &'static str {
    by_national(national).map_or("???", |s| s.name)
}

/// Highest dex number a generation's games can store.
pub fn dex_max(generation: u8) -> u16 {
    match generation {
        1 => GEN1_DEX_MAX,
        2 => GEN2_DEX_MAX,
        _ => NATIONAL_DEX_MAX,
    }
}

pub fn gen1_special(national: u16) -> Option<u8> {
    if national == 0 {
        return None;
    }
    GEN1_SPECIAL.get(usize::from(national) - 1).copied()
}

pub fn gen1_types(national: u16) -> Option<(u8, u8)> {
    if national == 0 {
        return None;
    }
    GEN1_TYPES.get(usize::from(national) - 1).copied()
}

pub fn gen1_index_to_national(index: u8) -> Option<u16> {
    match GEN1_INDEX_TO_NATIONAL.get(usize::from(index)) {
        Some(&0) | None => None,
        Some(&national) => Some(national),
    }
}

pub fn national_to_gen1_index(national: u16) -> Option<u8> {
    if national == 0 {
        return None;
    }
    GEN1_INDEX_TO_NATIONAL
        .iter()
        .position(|&n| n == national)
        .map(|index| index as u8)
}

pub fn gen3_index_to_national(index: u16) -> Option<u16> {
    match index {
        1..=GEN2_DEX_MAX => Some(index),
        GEN3_HOENN_INDEX_START..=GEN3_INDEX_MAX => Some(
            GEN3_HOENN_INDEX_TO_NATIONAL[usize::from(index - GEN3_HOENN_INDEX_START)],
        ),
        // 252..=276 hold unused placeholder entries
        _ => None,
    }
}

pub fn national_to_gen3_index(national: u16) -> Option<u16> {
    match national {
        1..=GEN2_DEX_MAX => Some(national),
        252..=NATIONAL_DEX_MAX => GEN3_HOENN_INDEX_TO_NATIONAL
            .iter()
            .position(|&n| n == national)
            .map(|pos| GEN3_HOENN_INDEX_START + pos as u16),
        _ => None,
    }
}

#[rustfmt::skip]
const SPECIES: [Species; NATIONAL_DEX_MAX as usize] = [
    //       name             hp  atk  def  spa  spd  spe  growth
    sp("Bulbasaur",    45,  49,  49,  65,  65,  45, MediumSlow),
    sp("Ivysaur",      60,  62,  63,  80,  80,  60, MediumSlow),
    sp("Venusaur",     80,  82,  83, 100, 100,  80, MediumSlow),
    sp("Charmander",   39,  52,  43,  60,  50,  65, MediumSlow),
    sp("Charmeleon",   58,  64,  58,  80,  65,  80, MediumSlow),
    sp("Charizard",    78,  84,  78, 109,  85, 100, MediumSlow),
    sp("Squirtle",     44,  48,  65,  50,  64,  43, MediumSlow),
    sp("Wartortle",    59,  63,  80,  65,  80,  58, MediumSlow),
    sp("Blastoise",    79,  83, 100,  85, 105,  78, MediumSlow),
    sp("Caterpie",     45,  30,  35,  20,  20,  45, MediumFast),
    sp("Metapod",      50,  20,  55,  25,  25,  30, MediumFast),
    sp("Butterfree",   60,  45,  50,  80,  80,  70, MediumFast),
    sp("Weedle",       40,  35,  30,  20,  20,  50, MediumFast),
    sp("Kakuna",       45,  25,  50,  25,  25,  35, MediumFast),
    sp("Beedrill",     65,  80,  40,  45,  80,  75, MediumFast),
    sp("Pidgey",       40,  45,  40,  35,  35,  56, MediumSlow),
    sp("Pidgeotto",    63,  60,  55,  50,  50,  71, MediumSlow),
    sp("Pidgeot",      83,  80,  75,  70,  70,  91, MediumSlow),
    sp("Rattata",      30,  56,  35,  25,  35,  72, MediumFast),
    sp("Raticate",     55,  81,  60,  50,  70,  97, MediumFast),
    sp("Spearow",      40,  60,  30,  31,  31,  70, MediumFast),
    sp("Fearow",       65,  90,  65,  61,  61, 100, MediumFast),
    sp("Ekans",        35,  60,  44,  40,  54,  55, MediumFast),
    sp("Arbok",        60,  85,  69,  65,  79,  80, MediumFast),
    sp("Pikachu",      35,  55,  30,  50,  40,  90, MediumFast),
    sp("Raichu",       60,  90,  55,  90,  80, 100, MediumFast),
    sp("Sandshrew",    50,  75,  85,  20,  30,  40, MediumFast),
    sp("Sandslash",    75, 100, 110,  45,  55,  65, MediumFast),
    sp("Nidoran♀",     55,  47,  52,  40,  40,  41, MediumSlow),
    sp("Nidorina",     70,  62,  67,  55,  55,  56, MediumSlow),
    sp("Nidoqueen",    90,  82,  87,  75,  85,  76, MediumSlow),
    sp("Nidoran♂",     46,  57,  40,  40,  40,  50, MediumSlow),
    sp("Nidorino",     61,  72,  57,  55,  55,  65, MediumSlow),
    sp("Nidoking",     81,  92,  77,  85,  75,  85, MediumSlow),
    sp("Clefairy",     70,  45,  48,  60,  65,  35, Fast),
    sp("Clefable",     95,  70,  73,  85,  90,  60, Fast),
    sp("Vulpix",       38,  41,  40,  50,  65,  65, MediumFast),
    sp("Ninetales",    73,  76,  75,  81, 100, 100, MediumFast),
    sp("Jigglypuff",  115,  45,  20,  45,  25,  20, Fast),
    sp("Wigglytuff",  140,  70,  45,  75,  50,  45, Fast),
    sp("Zubat",        40,  45,  35,  30,  40,  55, MediumFast),
    sp("Golbat",       75,  80,  70,  65,  75,  90, MediumFast),
    sp("Oddish",       45,  50,  55,  75,  65,  30, MediumSlow),
    sp("Gloom",        60,  65,  70,  85,  75,  40, MediumSlow),
    sp("Vileplume",    75,  80,  85, 100,  90,  50, MediumSlow),
    sp("Paras",        35,  70,  55,  45,  55,  25, MediumFast),
    sp("Parasect",     60,  95,  80,  60,  80,  30, MediumFast),
    sp("Venonat",      60,  55,  50,  40,  55,  45, MediumFast),
    sp("Venomoth",     70,  65,  60,  90,  75,  90, MediumFast),
    sp("Diglett",      10,  55,  25,  35,  45,  95, MediumFast),
    sp("Dugtrio",      35,  80,  50,  50,  70, 120, MediumFast),
    sp("Meowth",       40,  45,  35,  40,  40,  90, MediumFast),
    sp("Persian",      65,  70,  60,  65,  65, 115, MediumFast),
    sp("Psyduck",      50,  52,  48,  65,  50,  55, MediumFast),
    sp("Golduck",      80,  82,  78,  95,  80,  85, MediumFast),
    sp("Mankey",       40,  80,  35,  35,  45,  70, MediumFast),
    sp("Primeape",     65, 105,  60,  60,  70,  95, MediumFast),
    sp("Growlithe",    55,  70,  45,  70,  50,  60, Slow),
    sp("Arcanine",     90, 110,  80, 100,  80,  95, Slow),
    sp("Poliwag",      40,  50,  40,  40,  40,  90, MediumSlow),
    sp("Poliwhirl",    65,  65,  65,  50,  50,  90, MediumSlow),
    sp("Poliwrath",    90,  85,  95,  70,  90,  70, MediumSlow),
    sp("Abra",         25,  20,  15, 105,  55,  90, MediumSlow),
    sp("Kadabra",      40,  35,  30, 120,  70, 105, MediumSlow),
    sp("Alakazam",     55,  50,  45, 135,  85, 120, MediumSlow),
    sp("Machop",       70,  80,  50,  35,  35,  35, MediumSlow),
    sp("Machoke",      80, 100,  70,  50,  60,  45, MediumSlow),
    sp("Machamp",      90, 130,  80,  65,  85,  55, MediumSlow),
    sp("Bellsprout",   50,  75,  35,  70,  30,  40, MediumSlow),
    sp("Weepinbell",   65,  90,  50,  85,  45,  55, MediumSlow),
    sp("Victreebel",   80, 105,  65, 100,  60,  70, MediumSlow),
    sp("Tentacool",    40,  40,  35,  50, 100,  70, Slow),
    sp("Tentacruel",   80,  70,  65,  80, 120, 100, Slow),
    sp("Geodude",      40,  80, 100,  30,  30,  20, MediumSlow),
    sp("Graveler",     55,  95, 115,  45,  45,  35, MediumSlow),
    sp("Golem",        80, 110, 130,  55,  65,  45, MediumSlow),
    sp("Ponyta",       50,  85,  55,  65,  65,  90, MediumFast),
    sp("Rapidash",     65, 100,  70,  80,  80, 105, MediumFast),
    sp("Slowpoke",     90,  65,  65,  40,  40,  15, MediumFast),
    sp("Slowbro",      95,  75, 110, 100,  80,  30, MediumFast),
    sp("Magnemite",    25,  35,  70,  95,  55,  45, MediumFast),
    sp("Magneton",     50,  60,  95, 120,  70,  70, MediumFast),
    sp("Farfetch'd",   52,  65,  55,  58,  62,  60, MediumFast),
    sp("Doduo",        35,  85,  45,  35,  35,  75, MediumFast),
    sp("Dodrio",       60, 110,  70,  60,  60, 100, MediumFast),
    sp("Seel",         65,  45,  55,  45,  70,  45, MediumFast),
    sp("Dewgong",      90,  70,  80,  70,  95,  70, MediumFast),
    sp("Grimer",       80,  80,  50,  40,  50,  25, MediumFast),
    sp("Muk",         105, 105,  75,  65, 100,  50, MediumFast),
    sp("Shellder",     30,  65, 100,  45,  25,  40, Slow),
    sp("Cloyster",     50,  95, 180,  85,  45,  70, Slow),
    sp("Gastly",       30,  35,  30, 100,  35,  80, MediumSlow),
    sp("Haunter",      45,  50,  45, 115,  55,  95, MediumSlow),
    sp("Gengar",       60,  65,  60, 130,  75, 110, MediumSlow),
    sp("Onix",         35,  45, 160,  30,  45,  70, MediumFast),
    sp("Drowzee",      60,  48,  45,  43,  90,  42, MediumFast),
    sp("Hypno",        85,  73,  70,  73, 115,  67, MediumFast),
    sp("Krabby",       30, 105,  90,  25,  25,  50, MediumFast),
    sp("Kingler",      55, 130, 115,  50,  50,  75, MediumFast),
    sp("Voltorb",      40,  30,  50,  55,  55, 100, MediumFast),
    sp("Electrode",    60,  50,  70,  80,  80, 140, MediumFast),
    sp("Exeggcute",    60,  40,  80,  60,  45,  40, Slow),
    sp("Exeggutor",    95,  95,  85, 125,  65,  55, Slow),
    sp("Cubone",       50,  50,  95,  40,  50,  35, MediumFast),
    sp("Marowak",      60,  80, 110,  50,  80,  45, MediumFast),
    sp("Hitmonlee",    50, 120,  53,  35, 110,  87, MediumFast),
    sp("Hitmonchan",   50, 105,  79,  35, 110,  76, MediumFast),
    sp("Lickitung",    90,  55,  75,  60,  75,  30, MediumFast),
    sp("Koffing",      40,  65,  95,  60,  45,  35, MediumFast),
    sp("Weezing",      65,  90, 120,  85,  70,  60, MediumFast),
    sp("Rhyhorn",      80,  85,  95,  30,  30,  25, Slow),
    sp("Rhydon",      105, 130, 120,  45,  45,  40, Slow),
    sp("Chansey",     250,   5,   5,  35, 105,  50, Fast),
    sp("Tangela",      65,  55, 115, 100,  40,  60, MediumFast),
    sp("Kangaskhan",  105,  95,  80,  40,  80,  90, MediumFast),
    sp("Horsea",       30,  40,  70,  70,  25,  60, MediumFast),
    sp("Seadra",       55,  65,  95,  95,  45,  85, MediumFast),
    sp("Goldeen",      45,  67,  60,  35,  50,  63, MediumFast),
    sp("Seaking",      80,  92,  65,  65,  80,  68, MediumFast),
    sp("Staryu",       30,  45,  55,  70,  55,  85, Slow),
    sp("Starmie",      60,  75,  85, 100,  85, 115, Slow),
    sp("Mr. Mime",     40,  45,  65, 100, 120,  90, MediumFast),
    sp("Scyther",      70, 110,  80,  55,  80, 105, MediumFast),
    sp("Jynx",         65,  50,  35, 115,  95,  95, MediumFast),
    sp("Electabuzz",   65,  83,  57,  95,  85, 105, MediumFast),
    sp("Magmar",       65,  95,  57, 100,  85,  93, MediumFast),
    sp("Pinsir",       65, 125, 100,  55,  70,  85, Slow),
    sp("Tauros",       75, 100,  95,  40,  70, 110, Slow),
    sp("Magikarp",     20,  10,  55,  15,  20,  80, Slow),
    sp("Gyarados",     95, 125,  79,  60, 100,  81, Slow),
    sp("Lapras",      130,  85,  80,  85,  95,  60, Slow),
    sp("Ditto",        48,  48,  48,  48,  48,  48, MediumFast),
    sp("Eevee",        55,  55,  50,  45,  65,  55, MediumFast),
    sp("Vaporeon",    130,  65,  60, 110,  95,  65, MediumFast),
    sp("Jolteon",      65,  65,  60, 110,  95, 130, MediumFast),
    sp("Flareon",      65, 130,  60,  95, 110,  65, MediumFast),
    sp("Porygon",      65,  60,  70,  85,  75,  40, MediumFast),
    sp("Omanyte",      35,  40, 100,  90,  55,  35, MediumFast),
    sp("Omastar",      70,  60, 125, 115,  70,  55, MediumFast),
    sp("Kabuto",       30,  80,  90,  55,  45,  55, MediumFast),
    sp("Kabutops",     60, 115, 105,  65,  70,  80, MediumFast),
    sp("Aerodactyl",   80, 105,  65,  60,  75, 130, Slow),
    sp("Snorlax",     160, 110,  65,  65, 110,  30, Slow),
    sp("Articuno",     90,  85, 100,  95, 125,  85, Slow),
    sp("Zapdos",       90,  90,  85, 125,  90, 100, Slow),
    sp("Moltres",      90, 100,  90, 125,  85,  90, Slow),
    sp("Dratini",      41,  64,  45,  50,  50,  50, Slow),
    sp("Dragonair",    61,  84,  65,  70,  70,  70, Slow),
    sp("Dragonite",    91, 134,  95, 100, 100,  80, Slow),
    sp("Mewtwo",      106, 110,  90, 154,  90, 130, Slow),
    sp("Mew",         100, 100, 100, 100, 100, 100, MediumSlow),
    sp("Chikorita",    45,  49,  65,  49,  65,  45, MediumSlow),
    sp("Bayleef",      60,  62,  80,  63,  80,  60, MediumSlow),
    sp("Meganium",     80,  82, 100,  83, 100,  80, MediumSlow),
    sp("Cyndaquil",    39,  52,  43,  60,  50,  65, MediumSlow),
    sp("Quilava",      58,  64,  58,  80,  65,  80, MediumSlow),
    sp("Typhlosion",   78,  84,  78, 109,  85, 100, MediumSlow),
    sp("Totodile",     50,  65,  64,  44,  48,  43, MediumSlow),
    sp("Croconaw",     65,  80,  80,  59,  63,  58, MediumSlow),
    sp("Feraligatr",   85, 105, 100,  79,  83,  78, MediumSlow),
    sp("Sentret",      35,  46,  34,  35,  45,  20, MediumFast),
    sp("Furret",       85,  76,  64,  45,  55,  90, MediumFast),
    sp("Hoothoot",     60,  30,  30,  36,  56,  50, MediumFast),
    sp("Noctowl",     100,  50,  50,  76,  96,  70, MediumFast),
    sp("Ledyba",       40,  20,  30,  40,  80,  55, Fast),
    sp("Ledian",       55,  35,  50,  55, 110,  85, Fast),
    sp("Spinarak",     40,  60,  40,  40,  40,  30, Fast),
    sp("Ariados",      70,  90,  70,  60,  60,  40, Fast),
    sp("Crobat",       85,  90,  80,  70,  80, 130, MediumFast),
    sp("Chinchou",     75,  38,  38,  56,  56,  67, Slow),
    sp("Lanturn",     125,  58,  58,  76,  76,  67, Slow),
    sp("Pichu",        20,  40,  15,  35,  35,  60, MediumFast),
    sp("Cleffa",       50,  25,  28,  45,  55,  15, Fast),
    sp("Igglybuff",    90,  30,  15,  40,  20,  15, Fast),
    sp("Togepi",       35,  20,  65,  40,  65,  20, Fast),
    sp("Togetic",      55,  40,  85,  80, 105,  40, Fast),
    sp("Natu",         40,  50,  45,  70,  45,  70, MediumFast),
    sp("Xatu",         65,  75,  70,  95,  70,  95, MediumFast),
    sp("Mareep",       55,  40,  40,  65,  45,  35, MediumSlow),
    sp("Flaaffy",      70,  55,  55,  80,  60,  45, MediumSlow),
    sp("Ampharos",     90,  75,  75, 115,  90,  55, MediumSlow),
    sp("Bellossom",    75,  80,  85,  90, 100,  50, MediumSlow),
    sp("Marill",       70,  20,  50,  20,  50,  40, Fast),
    sp("Azumarill",   100,  50,  80,  50,  80,  50, Fast),
    sp("Sudowoodo",    70, 100, 115,  30,  65,  30, MediumFast),
    sp("Politoed",     90,  75,  75,  90, 100,  70, MediumSlow),
    sp("Hoppip",       35,  35,  40,  35,  55,  50, MediumSlow),
    sp("Skiploom",     55,  45,  50,  45,  65,  80, MediumSlow),
    sp("Jumpluff",     75,  55,  70,  55,  85, 110, MediumSlow),
    sp("Aipom",        55,  70,  55,  40,  55,  85, Fast),
    sp("Sunkern",      30,  30,  30,  30,  30,  30, MediumSlow),
    sp("Sunflora",     75,  75,  55, 105,  85,  30, MediumSlow),
    sp("Yanma",        65,  65,  45,  75,  45,  95, MediumFast),
    sp("Wooper",       55,  45,  45,  25,  25,  15, MediumFast),
    sp("Quagsire",     95,  85,  85,  65,  65,  35, MediumFast),
    sp("Espeon",       65,  65,  60, 130,  95, 110, MediumFast),
    sp("Umbreon",      95,  65, 110,  60, 130,  65, MediumFast),
    sp("Murkrow",      60,  85,  42,  85,  42,  91, MediumSlow),
    sp("Slowking",     95,  75,  80, 100, 110,  30, MediumFast),
    sp("Misdreavus",   60,  60,  60,  85,  85,  85, Fast),
    sp("Unown",        48,  72,  48,  72,  48,  48, MediumFast),
    sp("Wobbuffet",   190,  33,  58,  33,  58,  33, MediumFast),
    sp("Girafarig",    70,  80,  65,  90,  65,  85, MediumFast),
    sp("Pineco",       50,  65,  90,  35,  35,  15, MediumFast),
    sp("Forretress",   75,  90, 140,  60,  60,  40, MediumFast),
    sp("Dunsparce",   100,  70,  70,  65,  65,  45, MediumFast),
    sp("Gligar",       65,  75, 105,  35,  65,  85, MediumSlow),
    sp("Steelix",      75,  85, 200,  55,  65,  30, MediumFast),
    sp("Snubbull",     60,  80,  50,  40,  40,  30, Fast),
    sp("Granbull",     90, 120,  75,  60,  60,  45, Fast),
    sp("Qwilfish",     65,  95,  75,  55,  55,  85, MediumFast),
    sp("Scizor",       70, 130, 100,  55,  80,  65, MediumFast),
    sp("Shuckle",      20,  10, 230,  10, 230,   5, MediumSlow),
    sp("Heracross",    80, 125,  75,  40,  95,  85, Slow),
    sp("Sneasel",      55,  95,  55,  35,  75, 115, MediumSlow),
    sp("Teddiursa",    60,  80,  50,  50,  50,  40, MediumFast),
    sp("Ursaring",     90, 130,  75,  75,  75,  55, MediumFast),
    sp("Slugma",       40,  40,  40,  70,  40,  20, MediumFast),
    sp("Magcargo",     50,  50, 120,  80,  80,  30, MediumFast),
    sp("Swinub",       50,  50,  40,  30,  30,  50, Slow),
    sp("Piloswine",   100, 100,  80,  60,  60,  50, Slow),
    sp("Corsola",      55,  55,  85,  65,  85,  35, Fast),
    sp("Remoraid",     35,  65,  35,  65,  35,  65, MediumFast),
    sp("Octillery",    75, 105,  75, 105,  75,  45, MediumFast),
    sp("Delibird",     45,  55,  45,  65,  45,  75, Fast),
    sp("Mantine",      65,  40,  70,  80, 140,  70, Slow),
    sp("Skarmory",     65,  80, 140,  40,  70,  70, Slow),
    sp("Houndour",     45,  60,  30,  80,  50,  65, Slow),
    sp("Houndoom",     75,  90,  50, 110,  80,  95, Slow),
    sp("Kingdra",      75,  95,  95,  95,  95,  85, MediumFast),
    sp("Phanpy",       90,  60,  60,  40,  40,  40, MediumFast),
    sp("Donphan",      90, 120, 120,  60,  60,  50, MediumFast),
    sp("Porygon2",     85,  80,  90, 105,  95,  60, MediumFast),
    sp("Stantler",     73,  95,  62,  85,  65,  85, Slow),
    sp("Smeargle",     55,  20,  35,  20,  45,  75, Fast),
    sp("Tyrogue",      35,  35,  35,  35,  35,  35, MediumFast),
    sp("Hitmontop",    50,  95,  95,  35, 110,  70, MediumFast),
    sp("Smoochum",     45,  30,  15,  85,  65,  65, MediumFast),
    sp("Elekid",       45,  63,  37,  65,  55,  95, MediumFast),
    sp("Magby",        45,  75,  37,  70,  55,  83, MediumFast),
    sp("Miltank",      95,  80, 105,  40,  70, 100, Slow),
    sp("Blissey",     255,  10,  10,  75, 135,  55, Fast),
    sp("Raikou",       90,  85,  75, 115, 100, 115, Slow),
    sp("Entei",       115, 115,  85,  90,  75, 100, Slow),
    sp("Suicune",     100,  75, 115,  90, 115,  85, Slow),
    sp("Larvitar",     50,  64,  50,  45,  50,  41, Slow),
    sp("Pupitar",      70,  84,  70,  65,  70,  51, Slow),
    sp("Tyranitar",   100, 134, 110,  95, 100,  61, Slow),
    sp("Lugia",       106,  90, 130,  90, 154, 110, Slow),
    sp("Ho-Oh",       106, 130,  90, 110, 154,  90, Slow),
    sp("Celebi",      100, 100, 100, 100, 100, 100, MediumSlow),
    sp("Treecko",      40,  45,  35,  65,  55,  70, MediumSlow),
    sp("Grovyle",      50,  65,  45,  85,  65,  95, MediumSlow),
    sp("Sceptile",     70,  85,  65, 105,  85, 120, MediumSlow),
    sp("Torchic",      45,  60,  40,  70,  50,  45, MediumSlow),
    sp("Combusken",    60,  85,  60,  85,  60,  55, MediumSlow),
    sp("Blaziken",     80, 120,  70, 110,  70,  80, MediumSlow),
    sp("Mudkip",       50,  70,  50,  50,  50,  40, MediumSlow),
    sp("Marshtomp",    70,  85,  70,  60,  70,  50, MediumSlow),
    sp("Swampert",    100, 110,  90,  85,  90,  60, MediumSlow),
    sp("Poochyena",    35,  55,  35,  30,  30,  35, MediumFast),
    sp("Mightyena",    70,  90,  70,  60,  60,  70, MediumFast),
    sp("Zigzagoon",    38,  30,  41,  30,  41,  60, MediumFast),
    sp("Linoone",      78,  70,  61,  50,  61, 100, MediumFast),
    sp("Wurmple",      45,  45,  35,  20,  30,  20, MediumFast),
    sp("Silcoon",      50,  35,  55,  25,  25,  15, MediumFast),
    sp("Beautifly",    60,  70,  50,  90,  50,  65, MediumFast),
    sp("Cascoon",      50,  35,  55,  25,  25,  15, MediumFast),
    sp("Dustox",       60,  50,  70,  50,  90,  65, MediumFast),
    sp("Lotad",        40,  30,  30,  40,  50,  30, MediumSlow),
    sp("Lombre",       60,  50,  50,  60,  70,  50, MediumSlow),
    sp("Ludicolo",     80,  70,  70,  90, 100,  70, MediumSlow),
    sp("Seedot",       40,  40,  50,  30,  30,  30, MediumSlow),
    sp("Nuzleaf",      70,  70,  40,  60,  40,  60, MediumSlow),
    sp("Shiftry",      90, 100,  60,  90,  60,  80, MediumSlow),
    sp("Taillow",      40,  55,  30,  30,  30,  85, MediumSlow),
    sp("Swellow",      60,  85,  60,  50,  50, 125, MediumSlow),
    sp("Wingull",      40,  30,  30,  55,  30,  85, MediumFast),
    sp("Pelipper",     60,  50, 100,  85,  70,  65, MediumFast),
    sp("Ralts",        28,  25,  25,  45,  35,  40, Slow),
    sp("Kirlia",       38,  35,  35,  65,  55,  50, Slow),
    sp("Gardevoir",    68,  65,  65, 125, 115,  80, Slow),
    sp("Surskit",      40,  30,  32,  50,  52,  65, MediumFast),
    sp("Masquerain",   70,  60,  62,  80,  82,  60, MediumFast),
    sp("Shroomish",    60,  40,  60,  40,  60,  35, Fluctuating),
    sp("Breloom",      60, 130,  80,  60,  60,  70, Fluctuating),
    sp("Slakoth",      60,  60,  60,  35,  35,  30, Slow),
    sp("Vigoroth",     80,  80,  80,  55,  55,  90, Slow),
    sp("Slaking",     150, 160, 100,  95,  65, 100, Slow),
    sp("Nincada",      31,  45,  90,  30,  30,  40, Erratic),
    sp("Ninjask",      61,  90,  45,  50,  50, 160, Erratic),
    sp("Shedinja",      1,  90,  45,  30,  30,  40, Erratic),
    sp("Whismur",      64,  51,  23,  51,  23,  28, MediumSlow),
    sp("Loudred",      84,  71,  43,  71,  43,  48, MediumSlow),
    sp("Exploud",     104,  91,  63,  91,  63,  68, MediumSlow),
    sp("Makuhita",     72,  60,  30,  20,  30,  25, Fluctuating),
    sp("Hariyama",    144, 120,  60,  40,  60,  50, Fluctuating),
    sp("Azurill",      50,  20,  40,  20,  40,  20, Fast),
    sp("Nosepass",     30,  45, 135,  45,  90,  30, MediumFast),
    sp("Skitty",       50,  45,  45,  35,  35,  50, Fast),
    sp("Delcatty",     70,  65,  65,  55,  55,  70, Fast),
    sp("Sableye",      50,  75,  75,  65,  65,  50, MediumSlow),
    sp("Mawile",       50,  85,  85,  55,  55,  50, Fast),
    sp("Aron",         50,  70, 100,  40,  40,  30, Slow),
    sp("Lairon",       60,  90, 140,  50,  50,  40, Slow),
    sp("Aggron",       70, 110, 180,  60,  60,  50, Slow),
    sp("Meditite",     30,  40,  55,  40,  55,  60, MediumFast),
    sp("Medicham",     60,  60,  75,  60,  75,  80, MediumFast),
    sp("Electrike",    40,  45,  40,  65,  40,  65, Slow),
    sp("Manectric",    70,  75,  60, 105,  60, 105, Slow),
    sp("Plusle",       60,  50,  40,  85,  75,  95, MediumFast),
    sp("Minun",        60,  40,  50,  75,  85,  95, MediumFast),
    sp("Volbeat",      65,  73,  55,  47,  75,  85, Erratic),
    sp("Illumise",     65,  47,  55,  73,  75,  85, Fluctuating),
    sp("Roselia",      50,  60,  45, 100,  80,  65, MediumSlow),
    sp("Gulpin",       70,  43,  53,  43,  53,  40, Fluctuating),
    sp("Swalot",      100,  73,  83,  73,  83,  55, Fluctuating),
    sp("Carvanha",     45,  90,  20,  65,  20,  65, Slow),
    sp("Sharpedo",     70, 120,  40,  95,  40,  95, Slow),
    sp("Wailmer",     130,  70,  35,  70,  35,  60, Fluctuating),
    sp("Wailord",     170,  90,  45,  90,  45,  60, Fluctuating),
    sp("Numel",        60,  60,  40,  65,  45,  35, MediumFast),
    sp("Camerupt",     70, 100,  70, 105,  75,  40, MediumFast),
    sp("Torkoal",      70,  85, 140,  85,  70,  20, MediumFast),
    sp("Spoink",       60,  25,  35,  70,  80,  60, Fast),
    sp("Grumpig",      80,  45,  65,  90, 110,  80, Fast),
    sp("Spinda",       60,  60,  60,  60,  60,  60, Fast),
    sp("Trapinch",     45, 100,  45,  45,  45,  10, MediumSlow),
    sp("Vibrava",      50,  70,  50,  50,  50,  70, MediumSlow),
    sp("Flygon",       80, 100,  80,  80,  80, 100, MediumSlow),
    sp("Cacnea",       50,  85,  40,  85,  40,  35, MediumSlow),
    sp("Cacturne",     70, 115,  60, 115,  60,  55, MediumSlow),
    sp("Swablu",       45,  40,  60,  40,  75,  50, Erratic),
    sp("Altaria",      75,  70,  90,  70, 105,  80, Erratic),
    sp("Zangoose",     73, 115,  60,  60,  60,  90, Erratic),
    sp("Seviper",      73, 100,  60, 100,  60,  65, Fluctuating),
    sp("Lunatone",     70,  55,  65,  95,  85,  70, Fast),
    sp("Solrock",      70,  95,  85,  55,  65,  70, Fast),
    sp("Barboach",     50,  48,  43,  46,  41,  60, MediumFast),
    sp("Whiscash",    110,  78,  73,  76,  71,  60, MediumFast),
    sp("Corphish",     43,  80,  65,  50,  35,  35, Fluctuating),
    sp("Crawdaunt",    63, 120,  85,  90,  55,  55, Fluctuating),
    sp("Baltoy",       40,  40,  55,  40,  70,  55, MediumFast),
    sp("Claydol",      60,  70, 105,  70, 120,  75, MediumFast),
    sp("Lileep",       66,  41,  77,  61,  87,  23, Erratic),
    sp("Cradily",      86,  81,  97,  81, 107,  43, Erratic),
    sp("Anorith",      45,  95,  50,  40,  50,  75, Erratic),
    sp("Armaldo",      75, 125, 100,  70,  80,  45, Erratic),
    sp("Feebas",       20,  15,  20,  10,  55,  80, Erratic),
    sp("Milotic",      95,  60,  79, 100, 125,  81, Erratic),
    sp("Castform",     70,  70,  70,  70,  70,  70, MediumFast),
    sp("Kecleon",      60,  90,  70,  60, 120,  40, MediumSlow),
    sp("Shuppet",      44,  75,  35,  63,  33,  45, Fast),
    sp("Banette",      64, 115,  65,  83,  63,  65, Fast),
    sp("Duskull",      20,  40,  90,  30,  90,  25, Fast),
    sp("Dusclops",     40,  70, 130,  60, 130,  25, Fast),
    sp("Tropius",      99,  68,  83,  72,  87,  51, Slow),
    sp("Chimecho",     65,  50,  70,  95,  80,  65, Fast),
    sp("Absol",        65, 130,  60,  75,  60,  75, MediumSlow),
    sp("Wynaut",       95,  23,  48,  23,  48,  23, MediumFast),
    sp("Snorunt",      50,  50,  50,  50,  50,  50, MediumFast),
    sp("Glalie",       80,  80,  80,  80,  80,  80, MediumFast),
    sp("Spheal",       70,  40,  50,  55,  50,  25, MediumSlow),
    sp("Sealeo",       90,  60,  70,  75,  70,  45, MediumSlow),
    sp("Walrein",     110,  80,  90,  95,  90,  65, MediumSlow),
    sp("Clamperl",     35,  64,  85,  74,  55,  32, Erratic),
    sp("Huntail",      55, 104, 105,  94,  75,  52, Erratic),
    sp("Gorebyss",     55,  84, 105, 114,  75,  52, Erratic),
    sp("Relicanth",   100,  90, 130,  45,  65,  55, Slow),
    sp("Luvdisc",      43,  30,  55,  40,  65,  97, Fast),
    sp("Bagon",        45,  75,  60,  40,  30,  50, Slow),
    sp("Shelgon",      65,  95, 100,  60,  50,  50, Slow),
    sp("Salamence",    95, 135,  80, 110,  80, 100, Slow),
    sp("Beldum",       40,  55,  80,  35,  60,  30, Slow),
    sp("Metang",       60,  75, 100,  55,  80,  50, Slow),
    sp("Metagross",    80, 135, 130,  95,  90,  70, Slow),
    sp("Regirock",     80, 100, 200,  50, 100,  50, Slow),
    sp("Regice",       80,  50, 100, 100, 200,  50, Slow),
    sp("Registeel",    80,  75, 150,  75, 150,  50, Slow),
    sp("Latias",       80,  80,  90, 110, 130, 110, Slow),
    sp("Latios",       80,  90,  80, 130, 110, 110, Slow),
    sp("Kyogre",      100, 100,  90, 150, 140,  90, Slow),
    sp("Groudon",     100, 150, 140, 100,  90,  90, Slow),
    sp("Rayquaza",    105, 150,  90, 150,  90,  95, Slow),
    sp("Jirachi",     100, 100, 100, 100, 100, 100, Slow),
    sp("Deoxys",       50, 150,  50, 150,  50, 150, Slow),
];

#[rustfmt::skip]
const GEN1_SPECIAL: [u8; GEN1_DEX_MAX as usize] = [
     65,  80, 100,  50,  65,  85,  50,  65,  85,  20,  25,  80,  20,  25,  45,
     35,  50,  70,  25,  50,  31,  61,  40,  65,  50,  90,  30,  55,  40,  55,
     75,  40,  55,  75,  60,  85,  65, 100,  25,  50,  40,  75,  75,  85, 100,
     55,  80,  40,  90,  45,  70,  40,  65,  50,  80,  35,  60,  50,  80,  40,
     50,  70, 105, 120, 135,  35,  50,  65,  70,  85, 100, 100, 120,  30,  45,
     55,  65,  80,  40,  80,  95, 120,  58,  35,  60,  70,  95,  40,  65,  45,
     85, 100, 115, 130,  30,  90, 115,  25,  50,  55,  80,  60, 125,  40,  50,
     35,  35,  60,  60,  85,  30,  45, 105, 100,  40,  70,  95,  50,  80,  70,
    100, 100,  55,  95,  85,  85,  55,  40,  20, 100,  95,  48,  65, 110, 110,
    110,  75,  90, 115,  45,  70,  60,  65, 125, 125, 125,  50,  70, 100, 154,
    100,
];

#[rustfmt::skip]
const GEN1_TYPES: [(u8, u8); GEN1_DEX_MAX as usize] = [
    (GRASS, POISON), (GRASS, POISON), (GRASS, POISON), (FIRE, FIRE),
    (FIRE, FIRE), (FIRE, FLYING), (WATER, WATER), (WATER, WATER),
    (WATER, WATER), (BUG, BUG), (BUG, BUG), (BUG, FLYING),
    (BUG, POISON), (BUG, POISON), (BUG, POISON), (NORMAL, FLYING),
    (NORMAL, FLYING), (NORMAL, FLYING), (NORMAL, NORMAL), (NORMAL, NORMAL),
    (NORMAL, FLYING), (NORMAL, FLYING), (POISON, POISON), (POISON, POISON),
    (ELECTRIC, ELECTRIC), (ELECTRIC, ELECTRIC), (GROUND, GROUND), (GROUND, GROUND),
    (POISON, POISON), (POISON, POISON), (POISON, GROUND), (POISON, POISON),
    (POISON, POISON), (POISON, GROUND), (NORMAL, NORMAL), (NORMAL, NORMAL),
    (FIRE, FIRE), (FIRE, FIRE), (NORMAL, NORMAL), (NORMAL, NORMAL),
    (POISON, FLYING), (POISON, FLYING), (GRASS, POISON), (GRASS, POISON),
    (GRASS, POISON), (BUG, GRASS), (BUG, GRASS), (BUG, POISON),
    (BUG, POISON), (GROUND, GROUND), (GROUND, GROUND), (NORMAL, NORMAL),
    (NORMAL, NORMAL), (WATER, WATER), (WATER, WATER), (FIGHTING, FIGHTING),
    (FIGHTING, FIGHTING), (FIRE, FIRE), (FIRE, FIRE), (WATER, WATER),
    (WATER, WATER), (WATER, FIGHTING), (PSYCHIC, PSYCHIC), (PSYCHIC, PSYCHIC),
    (PSYCHIC, PSYCHIC), (FIGHTING, FIGHTING), (FIGHTING, FIGHTING), (FIGHTING, FIGHTING),
    (GRASS, POISON), (GRASS, POISON), (GRASS, POISON), (WATER, POISON),
    (WATER, POISON), (ROCK, GROUND), (ROCK, GROUND), (ROCK, GROUND),
    (FIRE, FIRE), (FIRE, FIRE), (WATER, PSYCHIC), (WATER, PSYCHIC),
    (ELECTRIC, ELECTRIC), (ELECTRIC, ELECTRIC), (NORMAL, FLYING), (NORMAL, FLYING),
    (NORMAL, FLYING), (WATER, WATER), (WATER, ICE), (POISON, POISON),
    (POISON, POISON), (WATER, WATER), (WATER, ICE), (GHOST, POISON),
    (GHOST, POISON), (GHOST, POISON), (ROCK, GROUND), (PSYCHIC, PSYCHIC),
    (PSYCHIC, PSYCHIC), (WATER, WATER), (WATER, WATER), (ELECTRIC, ELECTRIC),
    (ELECTRIC, ELECTRIC), (GRASS, PSYCHIC), (GRASS, PSYCHIC), (GROUND, GROUND),
    (GROUND, GROUND), (FIGHTING, FIGHTING), (FIGHTING, FIGHTING), (NORMAL, NORMAL),
    (POISON, POISON), (POISON, POISON), (GROUND, ROCK), (GROUND, ROCK),
    (NORMAL, NORMAL), (GRASS, GRASS), (NORMAL, NORMAL), (WATER, WATER),
    (WATER, WATER), (WATER, WATER), (WATER, WATER), (WATER, WATER),
    (WATER, PSYCHIC), (PSYCHIC, PSYCHIC), (BUG, FLYING), (ICE, PSYCHIC),
    (ELECTRIC, ELECTRIC), (FIRE, FIRE), (BUG, BUG), (NORMAL, NORMAL),
    (WATER, WATER), (WATER, FLYING), (WATER, ICE), (NORMAL, NORMAL),
    (NORMAL, NORMAL), (WATER, WATER), (ELECTRIC, ELECTRIC), (FIRE, FIRE),
    (NORMAL, NORMAL), (ROCK, WATER), (ROCK, WATER), (ROCK, WATER),
    (ROCK, WATER), (ROCK, FLYING), (NORMAL, NORMAL), (ICE, FLYING),
    (ELECTRIC, FLYING), (FIRE, FLYING), (DRAGON, DRAGON), (DRAGON, DRAGON),
    (DRAGON, FLYING), (PSYCHIC, PSYCHIC), (PSYCHIC, PSYCHIC),
];

/// Generation 1 internal index to national dex number, 0 for unused indices.
#[rustfmt::skip]
const GEN1_INDEX_TO_NATIONAL: [u16; 191] = [
      0, 112, 115,  32,  35,  21, 100,  34,  80,   2, 103, 108, 102,  88,  94,  29,
     31, 104, 111, 131,  59, 151, 130,  90,  72,  92, 123, 120,   9, 127, 114,   0,
      0,  58,  95,  22,  16,  79,  64,  75, 113,  67, 122, 106, 107,  24,  47,  54,
     96,  76,   0, 126,   0, 125,  82, 109,   0,  56,  86,  50, 128,   0,   0,   0,
     83,  48, 149,   0,   0,   0,  84,  60, 124, 146, 144, 145, 132,  52,  98,   0,
      0,   0,  37,  38,  25,  26,   0,   0, 147, 148, 140, 141, 116, 117,   0,   0,
     27,  28, 138, 139,  39,  40, 133, 136, 135, 134,  66,  41,  23,  46,  61,  62,
     13,  14,  15,   0,  85,  57,  51,  49,  87,   0,   0,  10,  11,  12,  68,   0,
     55,  97,  42, 150, 143, 129,   0,   0,  89,   0,  99,  91,   0, 101,  36, 110,
     53, 105,   0,  93,  63,  65,  17,  18, 121,   1,   3,  73,   0, 118, 119,   0,
      0,   0,   0,  77,  78,  19,  20,  33,  30,  74, 137, 142,   0,  81,   0,   0,
      4,   7,   5,   8,   6,   0,   0,   0,   0,  43,  44,  45,  69,  70,  71,
];

/// National dex numbers of generation 3 internal indices 277..=411.
#[rustfmt::skip]
const GEN3_HOENN_INDEX_TO_NATIONAL: [u16; 135] = [
    252, 253, 254, 255, 256, 257, 258, 259, 260, 261, 262, 263, 264, 265, 266,
    267, 268, 269, 270, 271, 272, 273, 274, 275, 290, 291, 292, 276, 277, 285,
    286, 327, 278, 279, 283, 284, 320, 321, 300, 301, 352, 343, 344, 299, 324,
    302, 339, 340, 370, 341, 342, 349, 350, 318, 319, 328, 329, 330, 296, 297,
    309, 310, 322, 323, 363, 364, 365, 331, 332, 361, 362, 337, 338, 298, 325,
    326, 311, 312, 303, 307, 308, 333, 334, 360, 355, 356, 315, 287, 288, 289,
    316, 317, 357, 293, 294, 295, 366, 367, 368, 359, 353, 354, 336, 335, 369,
    304, 305, 306, 351, 313, 314, 345, 346, 347, 348, 280, 281, 282, 371, 372,
    373, 374, 375, 376, 377, 378, 379, 382, 383, 384, 380, 381, 385, 386, 358,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_lookup_is_one_based() {
        assert_eq!(name(1), "Bulbasaur");
        assert_eq!(name(151), "Mew");
        assert_eq!(name(251), "Celebi");
        assert_eq!(name(386), "Deoxys");
        assert_eq!(name(0), "???");
        assert_eq!(name(387), "???");
    }

    #[test]
    fn gen1_index_maps_both_ways() {
        assert_eq!(gen1_index_to_national(0x99), Some(1));
        assert_eq!(gen1_index_to_national(0x01), Some(112));
        assert_eq!(gen1_index_to_national(0x1F), None);
        for national in 1..=GEN1_DEX_MAX {
            let index = national_to_gen1_index(national).expect("every kanto species has an index");
            assert_eq!(gen1_index_to_national(index), Some(national));
        }
    }

    #[test]
    fn gen3_index_maps_both_ways() {
        assert_eq!(gen3_index_to_national(277), Some(252));
        assert_eq!(gen3_index_to_national(411), Some(358));
        assert_eq!(gen3_index_to_national(260), None);
        for national in 1..=NATIONAL_DEX_MAX {
            let index = national_to_gen3_index(national).expect("every species has an index");
            assert_eq!(gen3_index_to_national(index), Some(national));
        }
    }

    #[test]
    fn gen1_special_and_types() {
        assert_eq!(gen1_special(150), Some(154));
        assert_eq!(gen1_special(72), Some(100));
        assert_eq!(gen1_types(6), Some((FIRE, FLYING)));
        assert_eq!(gen1_types(25), Some((ELECTRIC, ELECTRIC)));
        assert_eq!(gen1_types(152), None);
    }
}
