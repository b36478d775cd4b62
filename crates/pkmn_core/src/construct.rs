//! Fresh save images built from a template.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::checksum::update_checksum;
use crate::core_api::{CoreError, Game, NewRecord, Platform};
use crate::flat;
use crate::gender::Gender;
use crate::gen1;
use crate::gen2;
use crate::gen3::{self, TrainerIdentity, sections};
use crate::reader::{write_u16_be, write_u32_le};
use crate::text::Charset;

pub const DEFAULT_MONEY: u32 = 3000;
pub const DEFAULT_STARTER_LEVEL: u8 = 5;

/// Seeded when a seed is given, from OS entropy otherwise.
pub(crate) fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Immutable description of an empty save for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveTemplate {
    pub game: Game,
    pub byte_len: usize,
    /// Erased-flash value for bytes no section covers.
    pub fill: u8,
    pub default_gender: Gender,
}

impl SaveTemplate {
    pub const RED_BLUE: Self = Self::flat(Game::RedBlue);
    pub const YELLOW: Self = Self::flat(Game::Yellow);
    pub const GOLD_SILVER: Self = Self::flat(Game::GoldSilver);
    pub const CRYSTAL: Self = Self::flat(Game::Crystal);
    pub const RUBY_SAPPHIRE: Self = Self::gba(Game::RubySapphire);
    pub const EMERALD: Self = Self::gba(Game::Emerald);
    pub const FIRERED_LEAFGREEN: Self = Self::gba(Game::FireRedLeafGreen);

    const fn flat(game: Game) -> Self {
        Self {
            game,
            byte_len: flat::SAVE_LEN,
            fill: 0x00,
            default_gender: Gender::Male,
        }
    }

    const fn gba(game: Game) -> Self {
        Self {
            game,
            byte_len: gen3::SAVE_LEN,
            fill: 0xFF,
            default_gender: Gender::Male,
        }
    }

    pub fn for_game(game: Game) -> Self {
        match game {
            Game::RedBlue => Self::RED_BLUE,
            Game::Yellow => Self::YELLOW,
            Game::GoldSilver => Self::GOLD_SILVER,
            Game::Crystal => Self::CRYSTAL,
            Game::RubySapphire => Self::RUBY_SAPPHIRE,
            Game::Emerald => Self::EMERALD,
            Game::FireRedLeafGreen => Self::FIRERED_LEAFGREEN,
        }
    }

    pub fn generation(&self) -> u8 {
        self.game.generation()
    }

    pub fn platform(&self) -> Platform {
        self.game.platform()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    pub trainer_name: String,
    /// Rolled at random when unset.
    pub trainer_id: Option<u16>,
    /// Generation 3 only. Rolled at random when unset.
    pub secret_id: Option<u16>,
    /// Falls back to the template's gender. Ignored by games without one.
    pub gender: Option<Gender>,
    pub money: u32,
    /// National dex number of a starting party member.
    pub starter: Option<u16>,
    pub starter_level: u8,
    pub seed: Option<u64>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            trainer_name: "RED".to_string(),
            trainer_id: None,
            secret_id: None,
            gender: None,
            money: DEFAULT_MONEY,
            starter: None,
            starter_level: DEFAULT_STARTER_LEVEL,
            seed: None,
        }
    }
}

impl BuildOptions {
    fn starter_record(&self) -> Option<NewRecord> {
        self.starter.map(|species| NewRecord {
            // a different stream from the trainer id roll
            seed: self.seed.map(|seed| seed.wrapping_add(1)),
            ..NewRecord::new(species, self.starter_level)
        })
    }
}

/// Builds a complete save image. Checksums are written last, after every
/// payload write.
pub fn build_save(template: &SaveTemplate, options: &BuildOptions) -> Result<Vec<u8>, CoreError> {
    if options.trainer_name.trim().is_empty() {
        return Err(CoreError::invalid("trainer name must not be empty"));
    }
    debug!(
        "building {} save for {:?}",
        template.game.as_str(),
        options.trainer_name
    );
    match template.generation() {
        3 => build_gen3(template, options),
        _ => build_flat(template, options),
    }
}

fn build_gen3(template: &SaveTemplate, options: &BuildOptions) -> Result<Vec<u8>, CoreError> {
    let mut rng = rng(options.seed);
    let mut data = vec![template.fill; template.byte_len];

    let slot = sections::SLOT_OFFSETS[0];
    for section_type in 0..sections::SECTIONS_PER_SLOT {
        let offset = slot + section_type * sections::SECTION_SIZE;
        data[offset..offset + sections::SECTION_PAYLOAD_LEN].fill(0);
        sections::write_footer(&mut data, offset, section_type as u16, 1);
    }

    // Emerald keeps its key where the game code sits, so 0 and 1 would read
    // back as another variant.
    let security_key = loop {
        let key: u32 = rng.r#gen();
        if key > 1 {
            break key;
        }
    };
    let identity = TrainerIdentity {
        name: &options.trainer_name,
        gender: options.gender.unwrap_or(template.default_gender),
        trainer_id: options.trainer_id.unwrap_or_else(|| rng.r#gen()),
        secret_id: options.secret_id.unwrap_or_else(|| rng.r#gen()),
        security_key,
    };
    // section 0 is the trainer section because the footers were written in order
    gen3::write_trainer_identity(&mut data, slot, template.game, &identity);

    let mut document = gen3::Document::parse(data)?;
    document.set_money(options.money)?;
    if let Some(starter) = options.starter_record() {
        document.add_to_party(&starter)?;
    }
    let mut data = document.into_bytes();

    for section_type in 0..sections::SECTIONS_PER_SLOT {
        update_checksum(&mut data, slot + section_type * sections::SECTION_SIZE);
    }

    // Keep an older, identical backup so either slot loads.
    let backup = sections::SLOT_OFFSETS[1];
    if data.len() >= backup + sections::SLOT_SIZE {
        data.copy_within(slot..slot + sections::SLOT_SIZE, backup);
        for section_type in 0..sections::SECTIONS_PER_SLOT {
            let offset = backup + section_type * sections::SECTION_SIZE;
            write_u32_le(&mut data, offset + sections::SAVE_INDEX_OFFSET, 0);
        }
    }
    Ok(data)
}

fn build_flat(template: &SaveTemplate, options: &BuildOptions) -> Result<Vec<u8>, CoreError> {
    let mut rng = rng(options.seed);
    let layout = match template.generation() {
        1 => gen1::layout(template.game),
        _ => gen2::layout(template.game),
    };
    let mut data = vec![template.fill; template.byte_len];

    let name = Charset::Gen12.encode(&options.trainer_name, flat::list::NAME_LEN);
    data[layout.player_name..layout.player_name + name.len()].copy_from_slice(&name);
    let trainer_id = options.trainer_id.unwrap_or_else(|| rng.r#gen());
    write_u16_be(&mut data, layout.trainer_id, trainer_id);
    if let Some(offset) = layout.gender {
        data[offset] = options.gender.unwrap_or(template.default_gender).raw();
    }
    layout.party.clear(&mut data);
    layout.current_box.clear(&mut data);

    let mut document = flat::Document::parse(data, layout)?;
    document.set_money(options.money);
    if let Some(starter) = options.starter_record() {
        document.add_to_party(&starter)?;
    }
    document.seal();
    Ok(document.into_bytes())
}
