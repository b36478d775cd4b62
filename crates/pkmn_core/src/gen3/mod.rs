//! Generation 3 (Game Boy Advance) save document.

pub mod record;
pub mod sections;

use log::{debug, warn};
use rand::Rng;

use crate::checksum::update_checksum;
use crate::core_api::{
    ChecksumReport, CoreError, CoreErrorCode, Game, NewRecord, PlayTime, SaveInfo, StorageBox,
};
use crate::core_api::Record as RecordView;
use crate::gender::Gender;
use crate::moves;
use crate::reader::{read_u16_le, read_u32_le, write_u16_le, write_u32_le};
use crate::species::{self, NATIONAL_DEX_MAX};
use crate::stats::{GEN3_MAX_IV, MAX_LEVEL};
use crate::text::Charset;
use record::{Attacks, Condition, Growth, LiveData, Misc, Record};
use sections::{SAVE_BLOCK1_CHUNK, SectionTable, TEAM_ITEMS, TRAINER_INFO};

pub const SAVE_LEN: usize = 0x20000;
pub const HALF_SAVE_LEN: usize = 0x10000;

pub const PARTY_CAPACITY: usize = 6;
pub const BOX_COUNT: usize = 14;
pub const BOX_CAPACITY: usize = 30;

pub const PLAYER_NAME_LEN: usize = 7;
const MAX_EV: u16 = 255;
const MAX_EV_TOTAL: u16 = 510;
const DEFAULT_FRIENDSHIP: u8 = 70;

const OFFSET_PLAYER_NAME: usize = 0x00;
const OFFSET_PLAYER_GENDER: usize = 0x08;
const OFFSET_TRAINER_ID: usize = 0x0A;
const OFFSET_SECRET_ID: usize = 0x0C;
const OFFSET_PLAY_HOURS: usize = 0x0E;
const OFFSET_PLAY_MINUTES: usize = 0x10;
const OFFSET_PLAY_SECONDS: usize = 0x11;
const OFFSET_GAME_CODE: usize = 0xAC;
const OFFSET_FRLG_SECURITY_KEY: usize = 0xAF8;

const GAME_CODE_RUBY_SAPPHIRE: u32 = 0;
const GAME_CODE_FIRERED_LEAFGREEN: u32 = 1;

const BADGE_COUNT: u16 = 8;

/// Offsets that differ between Ruby/Sapphire, Emerald and FireRed/LeafGreen.
struct Layout {
    team_size: usize,
    team: usize,
    money: usize,
    flags: usize,
    first_badge_flag: u16,
    origin_game: u8,
}

fn layout(game: Game) -> Layout {
    match game {
        Game::FireRedLeafGreen => Layout {
            team_size: 0x034,
            team: 0x038,
            money: 0x290,
            flags: 0x0EE0,
            first_badge_flag: 0x820,
            origin_game: 4,
        },
        Game::Emerald => Layout {
            team_size: 0x234,
            team: 0x238,
            money: 0x490,
            flags: 0x1270,
            first_badge_flag: 0x867,
            origin_game: 3,
        },
        _ => Layout {
            team_size: 0x234,
            team: 0x238,
            money: 0x490,
            flags: 0x1220,
            first_badge_flag: 0x807,
            origin_game: 2,
        },
    }
}

/// Reads the variant from the game code in the trainer section.
pub fn game_from_trainer_section(data: &[u8], trainer_offset: usize) -> Game {
    match read_u32_le(data, trainer_offset + OFFSET_GAME_CODE) {
        GAME_CODE_RUBY_SAPPHIRE => Game::RubySapphire,
        GAME_CODE_FIRERED_LEAFGREEN => Game::FireRedLeafGreen,
        _ => Game::Emerald,
    }
}

pub fn trainer_name(data: &[u8], trainer_offset: usize) -> String {
    Charset::Gen3.decode(data, trainer_offset + OFFSET_PLAYER_NAME, PLAYER_NAME_LEN)
}

/// Trainer fields written into a fresh trainer section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrainerIdentity<'a> {
    pub name: &'a str,
    pub gender: Gender,
    pub trainer_id: u16,
    pub secret_id: u16,
    /// Money key. Ruby/Sapphire ignore it.
    pub security_key: u32,
}

pub(crate) fn write_trainer_identity(
    data: &mut [u8],
    trainer_offset: usize,
    game: Game,
    identity: &TrainerIdentity<'_>,
) {
    let name = Charset::Gen3.encode(identity.name, PLAYER_NAME_LEN + 1);
    let at = trainer_offset + OFFSET_PLAYER_NAME;
    data[at..at + name.len()].copy_from_slice(&name);
    data[trainer_offset + OFFSET_PLAYER_GENDER] = identity.gender.raw();
    write_u16_le(data, trainer_offset + OFFSET_TRAINER_ID, identity.trainer_id);
    write_u16_le(data, trainer_offset + OFFSET_SECRET_ID, identity.secret_id);

    let game_code = match game {
        Game::RubySapphire => GAME_CODE_RUBY_SAPPHIRE,
        Game::FireRedLeafGreen => {
            write_u32_le(data, trainer_offset + OFFSET_FRLG_SECURITY_KEY, identity.security_key);
            GAME_CODE_FIRERED_LEAFGREEN
        }
        _ => identity.security_key,
    };
    write_u32_le(data, trainer_offset + OFFSET_GAME_CODE, game_code);
}

#[derive(Debug)]
pub struct Document {
    bytes: Vec<u8>,
    table: SectionTable,
    game: Game,
}

impl Document {
    pub fn parse(bytes: Vec<u8>) -> Result<Self, CoreError> {
        if bytes.len() != SAVE_LEN && bytes.len() != HALF_SAVE_LEN {
            return Err(CoreError::new(
                CoreErrorCode::FormatUnrecognized,
                format!("{} bytes is not a generation 3 save size", bytes.len()),
            ));
        }
        let table = SectionTable::locate(&bytes).ok_or_else(|| {
            CoreError::new(CoreErrorCode::FormatUnrecognized, "no complete save slot")
        })?;
        let trainer = table.require(TRAINER_INFO)?;
        let game = game_from_trainer_section(&bytes, trainer);
        debug!("gen3 document: {} in slot {}", game.as_str(), table.slot);
        Ok(Self { bytes, table, game })
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn table(&self) -> &SectionTable {
        &self.table
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn trainer_offset(&self) -> usize {
        // presence is checked in parse
        self.table.offset(TRAINER_INFO).unwrap_or(self.table.slot_offset)
    }

    fn security_key(&self) -> u32 {
        let trainer = self.trainer_offset();
        match self.game {
            Game::RubySapphire => 0,
            Game::FireRedLeafGreen => read_u32_le(&self.bytes, trainer + OFFSET_FRLG_SECURITY_KEY),
            _ => read_u32_le(&self.bytes, trainer + OFFSET_GAME_CODE),
        }
    }

    /// Full 32-bit trainer id: visible id in the low half, secret id above.
    pub fn ot_id(&self) -> u32 {
        read_u32_le(&self.bytes, self.trainer_offset() + OFFSET_TRAINER_ID)
    }

    pub fn info(&self) -> SaveInfo {
        let trainer = self.trainer_offset();
        SaveInfo {
            generation: 3,
            platform: self.game.platform(),
            game: self.game,
            byte_len: self.bytes.len(),
            trainer_name: trainer_name(&self.bytes, trainer),
            trainer_id: read_u16_le(&self.bytes, trainer + OFFSET_TRAINER_ID),
            secret_id: Some(read_u16_le(&self.bytes, trainer + OFFSET_SECRET_ID)),
            trainer_gender: Gender::from_raw(self.bytes[trainer + OFFSET_PLAYER_GENDER]),
            play_time: PlayTime {
                hours: read_u16_le(&self.bytes, trainer + OFFSET_PLAY_HOURS),
                minutes: self.bytes[trainer + OFFSET_PLAY_MINUTES],
                seconds: self.bytes[trainer + OFFSET_PLAY_SECONDS],
            },
            money: self.money().unwrap_or(0),
            badges: self.badges().unwrap_or(0),
        }
    }

    pub fn money(&self) -> Option<u32> {
        let section = self.table.offset(TEAM_ITEMS)?;
        let raw = read_u32_le(&self.bytes, section + layout(self.game).money);
        Some(raw ^ self.security_key())
    }

    pub(crate) fn set_money(&mut self, money: u32) -> Result<(), CoreError> {
        let section = self.table.require(TEAM_ITEMS)?;
        let key = self.security_key();
        write_u32_le(&mut self.bytes, section + layout(self.game).money, money ^ key);
        update_checksum(&mut self.bytes, section);
        Ok(())
    }

    /// Maps an offset inside save block 1 to the buffer. Save block 1 is
    /// spread over sections 1–4.
    fn save_block1_offset(&self, offset: usize) -> Option<usize> {
        let chunk = offset / SAVE_BLOCK1_CHUNK;
        if chunk >= 4 {
            return None;
        }
        let section = self.table.offset(TEAM_ITEMS + chunk as u16)?;
        Some(section + offset % SAVE_BLOCK1_CHUNK)
    }

    pub fn badges(&self) -> Option<u8> {
        let layout = layout(self.game);
        let mut count = 0;
        for i in 0..BADGE_COUNT {
            let flag = layout.first_badge_flag + i;
            let byte = self.save_block1_offset(layout.flags + usize::from(flag / 8))?;
            if self.bytes[byte] & (1 << (flag % 8)) != 0 {
                count += 1;
            }
        }
        Some(count)
    }

    pub fn party_count(&self) -> Result<usize, CoreError> {
        let section = self.table.require(TEAM_ITEMS)?;
        let raw = read_u32_le(&self.bytes, section + layout(self.game).team_size) as usize;
        if raw > PARTY_CAPACITY {
            warn!("party count {raw} exceeds {PARTY_CAPACITY}, clamping");
        }
        Ok(raw.min(PARTY_CAPACITY))
    }

    fn party_offset(&self, slot: usize) -> Result<usize, CoreError> {
        let section = self.table.require(TEAM_ITEMS)?;
        Ok(section + layout(self.game).team + slot * record::PARTY_RECORD_LEN)
    }

    pub fn party(&self) -> Result<Vec<RecordView>, CoreError> {
        let count = self.party_count()?;
        let mut out = Vec::with_capacity(count);
        for slot in 0..count {
            let offset = self.party_offset(slot)?;
            if let Some(record) = record::decode(&self.bytes, offset, record::PARTY_RECORD_LEN) {
                out.push(record_view(slot, &record));
            }
        }
        Ok(out)
    }

    /// PC storage: sections 5–13 concatenated, a u32 current box followed by
    /// 14 boxes of 30 box records.
    fn pc_buffer(&self) -> Result<Vec<u8>, CoreError> {
        let mut buffer = Vec::new();
        for section_type in sections::PC_BUFFER_FIRST..=sections::PC_BUFFER_LAST {
            let offset = self.table.require(section_type)?;
            let len = crate::checksum::section_data_len(section_type);
            buffer.extend_from_slice(&self.bytes[offset..offset + len]);
        }
        Ok(buffer)
    }

    pub fn boxes(&self) -> Result<Vec<StorageBox>, CoreError> {
        let buffer = self.pc_buffer()?;
        let boxes = (0..BOX_COUNT)
            .map(|index| {
                let records = (0..BOX_CAPACITY)
                    .filter_map(|slot| {
                        let offset = 4 + (index * BOX_CAPACITY + slot) * record::BOX_RECORD_LEN;
                        record::decode(&buffer, offset, record::BOX_RECORD_LEN)
                            .map(|record| record_view(slot, &record))
                    })
                    .collect();
                StorageBox {
                    index,
                    capacity: BOX_CAPACITY,
                    records,
                }
            })
            .collect();
        Ok(boxes)
    }

    pub fn verify_checksums(&self) -> Vec<ChecksumReport> {
        sections::verify(&self.bytes, &self.table)
            .into_iter()
            .map(|check| ChecksumReport {
                region: format!("section {}", check.section_type),
                offset: check.offset,
                stored: check.stored,
                computed: check.computed,
                valid: check.is_valid(),
            })
            .collect()
    }

    fn load(&self, slot: usize) -> Result<(usize, Record), CoreError> {
        let count = self.party_count()?;
        if slot >= count {
            return Err(CoreError::out_of_range("party", slot, count));
        }
        let offset = self.party_offset(slot)?;
        let record = record::decode(&self.bytes, offset, record::PARTY_RECORD_LEN)
            .ok_or_else(|| CoreError::invalid(format!("party slot {slot} is empty")))?;
        Ok((offset, record))
    }

    fn store(&mut self, offset: usize, record: &Record) -> Result<(), CoreError> {
        let section = self.table.require(TEAM_ITEMS)?;
        record::encode(record, &mut self.bytes, offset);
        update_checksum(&mut self.bytes, section);
        Ok(())
    }

    fn edit(
        &mut self,
        slot: usize,
        apply: impl FnOnce(&mut Record) -> Result<(), CoreError>,
    ) -> Result<(), CoreError> {
        let (offset, mut record) = self.load(slot)?;
        apply(&mut record)?;
        self.store(offset, &record)
    }

    pub fn set_level(&mut self, slot: usize, level: u8) -> Result<(), CoreError> {
        check_level(level)?;
        self.edit(slot, |record| {
            let growth = species_of(record)?.growth;
            record.growth.experience = growth.exp_for_level(level);
            record.live.get_or_insert_with(LiveData::default).level = level;
            refresh_stats(record)
        })
    }

    pub fn set_ivs(&mut self, slot: usize, ivs: [u8; 6]) -> Result<(), CoreError> {
        if let Some(iv) = ivs.iter().find(|&&iv| iv > GEN3_MAX_IV) {
            return Err(CoreError::invalid(format!(
                "IV {iv} out of range 0-{GEN3_MAX_IV}"
            )));
        }
        self.edit(slot, |record| {
            record.misc.set_ivs(ivs);
            refresh_stats(record)
        })
    }

    pub fn set_evs(&mut self, slot: usize, evs: [u16; 6]) -> Result<(), CoreError> {
        if let Some(ev) = evs.iter().find(|&&ev| ev > MAX_EV) {
            return Err(CoreError::invalid(format!("EV {ev} out of range 0-{MAX_EV}")));
        }
        let total: u16 = evs.iter().sum();
        if total > MAX_EV_TOTAL {
            return Err(CoreError::invalid(format!(
                "EV total {total} exceeds {MAX_EV_TOTAL}"
            )));
        }
        self.edit(slot, |record| {
            record.condition.evs = evs.map(|ev| ev as u8);
            refresh_stats(record)
        })
    }

    pub fn set_nickname(&mut self, slot: usize, nickname: &str) -> Result<(), CoreError> {
        if nickname.is_empty() {
            return Err(CoreError::invalid("nickname must not be empty"));
        }
        self.edit(slot, |record| {
            record.set_nickname(nickname);
            Ok(())
        })
    }

    pub fn set_species(&mut self, slot: usize, national: u16) -> Result<(), CoreError> {
        let index = species::national_to_gen3_index(national).ok_or_else(|| {
            CoreError::invalid(format!("species {national} out of range 1-{NATIONAL_DEX_MAX}"))
        })?;
        self.edit(slot, |record| {
            let level = record.level();
            record.growth.species = index;
            record.flags |= record::FLAG_HAS_SPECIES;
            let growth = species_of(record)?.growth;
            if growth.level_for_exp(record.growth.experience) != level {
                record.growth.experience = growth.exp_for_level(level);
            }
            refresh_stats(record)
        })
    }

    pub fn set_moves(&mut self, slot: usize, new_moves: &[u16]) -> Result<(), CoreError> {
        let new_moves = check_moves(new_moves, moves::MAX_MOVE_ID)?;
        self.edit(slot, |record| {
            let old = record.attacks;
            for (i, &id) in new_moves.iter().enumerate() {
                if old.moves[i] == id {
                    continue;
                }
                record.attacks.moves[i] = id;
                record.attacks.pp[i] = moves::base_pp(id);
                record.growth.pp_bonuses &= !(0x03 << (i * 2));
            }
            Ok(())
        })
    }

    pub fn set_shiny(&mut self, slot: usize, shiny: bool) -> Result<(), CoreError> {
        self.edit(slot, |record| {
            if record.is_shiny() == shiny {
                return Ok(());
            }
            record.personality =
                record::personality_with_shiny(record.personality, record.ot_id, shiny)
                    .ok_or_else(|| CoreError::invalid("no personality keeps this nature"))?;
            Ok(())
        })
    }

    pub fn heal(&mut self, slot: usize) -> Result<(), CoreError> {
        self.edit(slot, |record| {
            let growth = record.growth;
            for i in 0..4 {
                let id = record.attacks.moves[i];
                record.attacks.pp[i] = moves::max_pp(id, growth.pp_ups(i), 3);
            }
            if let Some(live) = record.live.as_mut() {
                live.current_hp = live.stats.hp;
                live.status = 0;
            }
            Ok(())
        })
    }

    pub fn add_to_party(&mut self, new: &NewRecord) -> Result<usize, CoreError> {
        let count = self.party_count()?;
        if count >= PARTY_CAPACITY {
            return Err(CoreError::new(
                CoreErrorCode::RosterFull,
                format!("party already holds {PARTY_CAPACITY}"),
            ));
        }
        let record = self.new_record(new)?;
        let section = self.table.require(TEAM_ITEMS)?;
        let offset = self.party_offset(count)?;
        record::encode(&record, &mut self.bytes, offset);
        write_u32_le(
            &mut self.bytes,
            section + layout(self.game).team_size,
            count as u32 + 1,
        );
        update_checksum(&mut self.bytes, section);
        Ok(count)
    }

    fn new_record(&self, new: &NewRecord) -> Result<Record, CoreError> {
        let index = species::national_to_gen3_index(new.species).ok_or_else(|| {
            CoreError::invalid(format!("species {} out of range", new.species))
        })?;
        check_level(new.level)?;
        if let Some(ivs) = new.ivs {
            if ivs.iter().any(|&iv| iv > GEN3_MAX_IV) {
                return Err(CoreError::invalid(format!("IVs {ivs:?} out of range")));
            }
        }
        let new_moves = match &new.moves {
            Some(list) => check_moves(list, moves::MAX_MOVE_ID)?,
            None => [moves::TACKLE, moves::GROWL, 0, 0],
        };
        let entry = species::by_national(new.species)
            .ok_or_else(|| CoreError::invalid("unknown species"))?;

        let mut rng = crate::construct::rng(new.seed);
        let ot_id = self.ot_id();
        let mut personality: u32 = rng.r#gen();
        if personality == 0 && ot_id == 0 {
            personality = 1;
        }
        let ivs = new
            .ivs
            .unwrap_or_else(|| std::array::from_fn(|_| rng.gen_range(0..=GEN3_MAX_IV)));

        let trainer = self.trainer_offset();
        let female = self.bytes[trainer + OFFSET_PLAYER_GENDER] == Gender::FEMALE_RAW;
        let mut ot_name = [0xFFu8; record::OT_NAME_LEN];
        ot_name.copy_from_slice(
            &self.bytes[trainer + OFFSET_PLAYER_NAME..trainer + OFFSET_PLAYER_NAME + record::OT_NAME_LEN],
        );

        let mut record = Record {
            personality,
            ot_id,
            language: record::LANGUAGE_ENGLISH,
            flags: record::FLAG_HAS_SPECIES,
            ot_name,
            growth: Growth {
                species: index,
                experience: entry.growth.exp_for_level(new.level),
                friendship: DEFAULT_FRIENDSHIP,
                ..Growth::default()
            },
            attacks: Attacks {
                moves: new_moves,
                pp: new_moves.map(moves::base_pp),
            },
            condition: Condition::default(),
            misc: Misc {
                origins: Misc::pack_origins(
                    new.level,
                    layout(self.game).origin_game,
                    record::POKE_BALL,
                    female,
                ),
                ..Misc::default()
            },
            live: Some(LiveData {
                level: new.level,
                mail: 0xFF,
                ..LiveData::default()
            }),
            ..Record::default()
        };
        record.misc.set_ivs(ivs);
        let nickname = new
            .nickname
            .clone()
            .unwrap_or_else(|| entry.name.to_uppercase());
        record.set_nickname(&nickname);
        refresh_stats(&mut record)?;
        if let Some(live) = record.live.as_mut() {
            live.current_hp = live.stats.hp;
        }
        Ok(record)
    }

    pub fn remove_from_party(&mut self, slot: usize) -> Result<(), CoreError> {
        let count = self.party_count()?;
        if slot >= count {
            return Err(CoreError::out_of_range("party", slot, count));
        }
        if count == 1 {
            return Err(CoreError::invalid("the party must keep one member"));
        }
        let section = self.table.require(TEAM_ITEMS)?;
        let start = self.party_offset(slot)?;
        let end = self.party_offset(count)?;
        let len = record::PARTY_RECORD_LEN;
        self.bytes.copy_within(start + len..end, start);
        self.bytes[end - len..end].fill(0);
        write_u32_le(
            &mut self.bytes,
            section + layout(self.game).team_size,
            count as u32 - 1,
        );
        update_checksum(&mut self.bytes, section);
        Ok(())
    }
}

fn check_level(level: u8) -> Result<(), CoreError> {
    if level == 0 || level > MAX_LEVEL {
        return Err(CoreError::invalid(format!(
            "level {level} out of range 1-{MAX_LEVEL}"
        )));
    }
    Ok(())
}

/// Validates 1–4 distinct non-zero move ids and pads them to four slots.
pub(crate) fn check_moves(list: &[u16], max_id: u16) -> Result<[u16; 4], CoreError> {
    if list.is_empty() || list.len() > 4 {
        return Err(CoreError::invalid(format!(
            "expected 1-4 moves, got {}",
            list.len()
        )));
    }
    let mut out = [0u16; 4];
    for (i, &id) in list.iter().enumerate() {
        if id == 0 || id > max_id {
            return Err(CoreError::invalid(format!("move {id} out of range 1-{max_id}")));
        }
        if list[..i].contains(&id) {
            return Err(CoreError::invalid(format!("move {id} listed twice")));
        }
        out[i] = id;
    }
    Ok(out)
}

fn species_of(record: &Record) -> Result<&'static species::Species, CoreError> {
    record
        .national_species()
        .and_then(species::by_national)
        .ok_or_else(|| {
            CoreError::invalid(format!("unknown species index {}", record.growth.species))
        })
}

/// Rewrites live stats from the record's inputs, clamping current HP.
fn refresh_stats(record: &mut Record) -> Result<(), CoreError> {
    species_of(record)?;
    let level = record.level();
    let stats = record
        .derived_stats(level)
        .ok_or_else(|| CoreError::invalid("stats unavailable for species"))?;
    if let Some(live) = record.live.as_mut() {
        live.stats = stats;
        live.current_hp = live.current_hp.min(stats.hp);
    }
    Ok(())
}

fn record_view(slot: usize, record: &Record) -> RecordView {
    let national = record.national_species().unwrap_or(0);
    let level = record.level();
    let (stats, current_hp, status) = match &record.live {
        Some(live) => (live.stats, live.current_hp, live.status as u8),
        None => {
            let stats = record.derived_stats(level).unwrap_or_default();
            (stats, stats.hp, 0)
        }
    };
    let moves = record
        .attacks
        .moves
        .iter()
        .enumerate()
        .filter(|&(_, &id)| id != 0)
        .map(|(i, &id)| crate::core_api::MoveSlot {
            id,
            name: moves::name(id).to_string(),
            pp: record.attacks.pp[i],
            pp_ups: record.growth.pp_ups(i),
        })
        .collect();

    RecordView {
        slot,
        species: national,
        species_name: species::name(national).to_string(),
        nickname: record.nickname(),
        level,
        experience: record.growth.experience,
        current_hp,
        stats,
        moves,
        evs: record.condition.evs.map(u16::from),
        ivs: record.misc.ivs(),
        held_item: Some(record.growth.item),
        ot_id: record.trainer_id(),
        ot_name: record.ot_name(),
        shiny: Some(record.is_shiny()),
        nature: Some(record.nature().name().to_string()),
        ability_slot: Some(record.misc.ability_slot()),
        is_egg: record.misc.is_egg(),
        status,
    }
}
