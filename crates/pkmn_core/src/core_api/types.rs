use crate::gender::Gender;
use crate::stats::StatBlock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    GameBoy,
    GameBoyColor,
    GameBoyAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    RedBlue,
    Yellow,
    GoldSilver,
    Crystal,
    RubySapphire,
    Emerald,
    FireRedLeafGreen,
}

impl Game {
    pub const ALL: [Game; 7] = [
        Game::RedBlue,
        Game::Yellow,
        Game::GoldSilver,
        Game::Crystal,
        Game::RubySapphire,
        Game::Emerald,
        Game::FireRedLeafGreen,
    ];

    pub fn generation(self) -> u8 {
        match self {
            Game::RedBlue | Game::Yellow => 1,
            Game::GoldSilver | Game::Crystal => 2,
            Game::RubySapphire | Game::Emerald | Game::FireRedLeafGreen => 3,
        }
    }

    pub fn platform(self) -> Platform {
        match self {
            Game::RedBlue | Game::Yellow => Platform::GameBoy,
            Game::GoldSilver | Game::Crystal => Platform::GameBoyColor,
            _ => Platform::GameBoyAdvance,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Game::RedBlue => "Red/Blue",
            Game::Yellow => "Yellow",
            Game::GoldSilver => "Gold/Silver",
            Game::Crystal => "Crystal",
            Game::RubySapphire => "Ruby/Sapphire",
            Game::Emerald => "Emerald",
            Game::FireRedLeafGreen => "FireRed/LeafGreen",
        }
    }

    /// Accepts short command-line names such as `rb`, `crystal` or `frlg`.
    pub fn parse(name: &str) -> Option<Self> {
        let game = match name.to_ascii_lowercase().replace(['/', '-', '_', ' '], "").as_str() {
            "rb" | "red" | "blue" | "redblue" => Game::RedBlue,
            "y" | "yellow" => Game::Yellow,
            "gs" | "gold" | "silver" | "goldsilver" => Game::GoldSilver,
            "c" | "crystal" => Game::Crystal,
            "rs" | "ruby" | "sapphire" | "rubysapphire" => Game::RubySapphire,
            "e" | "emerald" => Game::Emerald,
            "frlg" | "firered" | "leafgreen" | "fireredleafgreen" => Game::FireRedLeafGreen,
            _ => return None,
        };
        Some(game)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayTime {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveInfo {
    pub generation: u8,
    pub platform: Platform,
    pub game: Game,
    pub byte_len: usize,
    pub trainer_name: String,
    pub trainer_id: u16,
    pub secret_id: Option<u16>,
    pub trainer_gender: Gender,
    pub play_time: PlayTime,
    pub money: u32,
    pub badges: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveSlot {
    pub id: u16,
    pub name: String,
    pub pp: u8,
    pub pp_ups: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub slot: usize,
    pub species: u16,
    pub species_name: String,
    pub nickname: String,
    pub level: u8,
    pub experience: u32,
    pub current_hp: u16,
    pub stats: StatBlock,
    pub moves: Vec<MoveSlot>,
    /// Effort values in HP, Atk, Def, Spe, SpA, SpD order. Generation 1 and 2
    /// report stat experience, with one Special value in both special slots.
    pub evs: [u16; 6],
    /// Individual values in the same order. Generation 1 and 2 report DVs
    /// with the derived HP DV first.
    pub ivs: [u8; 6],
    pub held_item: Option<u16>,
    pub ot_id: u16,
    pub ot_name: String,
    pub shiny: Option<bool>,
    pub nature: Option<String>,
    pub ability_slot: Option<u8>,
    pub is_egg: bool,
    pub status: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageBox {
    pub index: usize,
    pub capacity: usize,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub party: Vec<Record>,
    pub boxes: Vec<StorageBox>,
}

/// Options for inserting a fresh record into the party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub species: u16,
    pub level: u8,
    pub nickname: Option<String>,
    /// Rolled at random when unset.
    pub ivs: Option<[u8; 6]>,
    /// Tackle and Growl when unset.
    pub moves: Option<Vec<u16>>,
    pub seed: Option<u64>,
}

impl NewRecord {
    pub fn new(species: u16, level: u8) -> Self {
        Self {
            species,
            level,
            nickname: None,
            ivs: None,
            moves: None,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecksumReport {
    pub region: String,
    pub offset: usize,
    pub stored: u16,
    pub computed: u16,
    pub valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapabilityIssue {
    EditingNotImplemented,
    LowConfidenceLayout,
    IncompleteSectionTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Capabilities {
    pub can_query: bool,
    pub can_apply_edits: bool,
    pub issues: Vec<CapabilityIssue>,
}

impl Capabilities {
    pub fn read_only(mut issues: Vec<CapabilityIssue>) -> Self {
        if !issues.contains(&CapabilityIssue::EditingNotImplemented) {
            issues.push(CapabilityIssue::EditingNotImplemented);
        }

        Self {
            can_query: true,
            can_apply_edits: false,
            issues,
        }
    }

    pub fn editable(mut issues: Vec<CapabilityIssue>) -> Self {
        issues.retain(|issue| *issue != CapabilityIssue::EditingNotImplemented);

        Self {
            can_query: true,
            can_apply_edits: true,
            issues,
        }
    }
}
