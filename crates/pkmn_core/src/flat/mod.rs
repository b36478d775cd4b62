//! Flat 32 KiB save document shared by generations 1 and 2.
//!
//! The two generations differ only in offsets and a handful of field
//! encodings, which [`FlatLayout`] describes. The per-game layouts live in
//! `gen1` and `gen2`.

pub mod list;
pub mod record;

use log::debug;
use rand::Rng;

use crate::checksum::{gen1_checksum, gen2_checksum};
use crate::core_api::Record as RecordView;
use crate::core_api::{
    ChecksumReport, CoreError, CoreErrorCode, Game, MoveSlot, NewRecord, PlayTime, SaveInfo,
    StorageBox,
};
use crate::gender::Gender;
use crate::moves;
use crate::reader::{read_bcd, read_u16_be, read_u16_le, read_u24_be, write_bcd, write_u16_le, write_u24_be};
use crate::species::{self, BaseStats};
use crate::stats::{self, Dvs, GEN12_MAX_DV, MAX_LEVEL, StatBlock};
use crate::text::Charset;
use list::{ListLayout, NAME_LEN};
use record::{FlatRecord, RecordLayout};

pub const SAVE_LEN: usize = 0x8000;
pub const PARTY_CAPACITY: usize = 6;
pub const BOX_CAPACITY: usize = 20;

/// Species list marker for an egg in generation 2.
const GEN2_EGG: u8 = 0xFD;
const DEFAULT_FRIENDSHIP: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyFormat {
    /// Three bytes of packed BCD.
    Bcd,
    /// Three-byte big-endian integer.
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumKind {
    /// One byte, complement of the byte sum.
    Complement8,
    /// Little-endian 16-bit byte sum.
    Sum16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatChecksum {
    pub kind: ChecksumKind,
    pub start: usize,
    pub end: usize,
    pub at: usize,
}

impl FlatChecksum {
    pub fn computed(&self, data: &[u8]) -> u16 {
        match self.kind {
            ChecksumKind::Complement8 => u16::from(gen1_checksum(data, self.start..=self.end)),
            ChecksumKind::Sum16 => gen2_checksum(data, self.start..=self.end),
        }
    }

    pub fn stored(&self, data: &[u8]) -> u16 {
        match self.kind {
            ChecksumKind::Complement8 => u16::from(data[self.at]),
            ChecksumKind::Sum16 => read_u16_le(data, self.at),
        }
    }

    pub fn is_valid(&self, data: &[u8]) -> bool {
        data.len() == SAVE_LEN && self.stored(data) == self.computed(data)
    }

    pub fn write(&self, data: &mut [u8]) {
        let value = self.computed(data);
        match self.kind {
            ChecksumKind::Complement8 => data[self.at] = value as u8,
            ChecksumKind::Sum16 => write_u16_le(data, self.at, value),
        }
    }
}

#[derive(Debug)]
pub struct FlatLayout {
    pub game: Game,
    pub record: &'static RecordLayout,
    pub party: ListLayout,
    pub current_box: ListLayout,
    pub player_name: usize,
    pub trainer_id: usize,
    pub money: usize,
    pub money_format: MoneyFormat,
    pub badges: usize,
    pub badge_bytes: usize,
    pub play_hours: usize,
    pub play_hours_wide: bool,
    pub play_minutes: usize,
    pub play_seconds: usize,
    pub gender: Option<usize>,
    pub checksum: FlatChecksum,
}

impl FlatLayout {
    pub fn generation(&self) -> u8 {
        self.game.generation()
    }

    pub fn trainer_name(&self, data: &[u8]) -> String {
        Charset::Gen12.decode(data, self.player_name, NAME_LEN)
    }

    fn national(&self, raw: u8) -> Option<u16> {
        match self.generation() {
            1 => species::gen1_index_to_national(raw),
            _ => (1..=species::GEN2_DEX_MAX)
                .contains(&u16::from(raw))
                .then_some(u16::from(raw)),
        }
    }

    fn raw_species(&self, national: u16) -> Option<u8> {
        match self.generation() {
            1 => species::national_to_gen1_index(national),
            _ => (1..=species::GEN2_DEX_MAX)
                .contains(&national)
                .then_some(national as u8),
        }
    }

    /// Base stats as this generation sees them. Generation 1 has a single
    /// Special that feeds both special stats.
    fn base_stats(&self, national: u16) -> Option<BaseStats> {
        let mut base = species::by_national(national)?.base;
        if self.generation() == 1 {
            let special = species::gen1_special(national)?;
            base.sp_attack = special;
            base.sp_defense = special;
        }
        Some(base)
    }
}

#[derive(Debug)]
pub struct Document {
    bytes: Vec<u8>,
    layout: &'static FlatLayout,
}

impl Document {
    pub fn parse(bytes: Vec<u8>, layout: &'static FlatLayout) -> Result<Self, CoreError> {
        if bytes.len() != SAVE_LEN {
            return Err(CoreError::new(
                CoreErrorCode::FormatUnrecognized,
                format!("{} bytes is not a {SAVE_LEN}-byte save", bytes.len()),
            ));
        }
        debug!("flat document: {}", layout.game.as_str());
        Ok(Self { bytes, layout })
    }

    pub fn game(&self) -> Game {
        self.layout.game
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn generation(&self) -> u8 {
        self.layout.generation()
    }

    pub fn info(&self) -> SaveInfo {
        let l = self.layout;
        let data = &self.bytes;
        let money = match l.money_format {
            MoneyFormat::Bcd => read_bcd(data, l.money, 3),
            MoneyFormat::Binary => read_u24_be(data, l.money),
        };
        let badges = data[l.badges..l.badges + l.badge_bytes]
            .iter()
            .map(|b| b.count_ones() as u8)
            .sum();
        let hours = if l.play_hours_wide {
            read_u16_be(data, l.play_hours)
        } else {
            u16::from(data[l.play_hours])
        };

        SaveInfo {
            generation: self.generation(),
            platform: l.game.platform(),
            game: l.game,
            byte_len: data.len(),
            trainer_name: l.trainer_name(data),
            trainer_id: read_u16_be(data, l.trainer_id),
            secret_id: None,
            trainer_gender: l.gender.map_or(Gender::Male, |o| Gender::from_raw(data[o])),
            play_time: PlayTime {
                hours,
                minutes: data[l.play_minutes],
                seconds: data[l.play_seconds],
            },
            money,
            badges,
        }
    }

    pub(crate) fn set_money(&mut self, money: u32) {
        let l = self.layout;
        match l.money_format {
            MoneyFormat::Bcd => write_bcd(&mut self.bytes, l.money, 3, money),
            MoneyFormat::Binary => write_u24_be(&mut self.bytes, l.money, money.min(0xFF_FFFF)),
        }
        self.seal();
    }

    /// Recomputes the stored checksum.
    pub(crate) fn seal(&mut self) {
        self.layout.checksum.write(&mut self.bytes);
    }

    pub fn verify_checksums(&self) -> Vec<ChecksumReport> {
        let checksum = self.layout.checksum;
        let stored = checksum.stored(&self.bytes);
        let computed = checksum.computed(&self.bytes);
        vec![ChecksumReport {
            region: format!("main {:#06x}-{:#06x}", checksum.start, checksum.end),
            offset: checksum.at,
            stored,
            computed,
            valid: stored == computed,
        }]
    }

    fn list_views(&self, list: &ListLayout, record_len: usize) -> Vec<RecordView> {
        (0..list.count(&self.bytes))
            .filter_map(|slot| {
                let record =
                    self.layout
                        .record
                        .decode(&self.bytes, list.record_offset(slot), record_len)?;
                Some(self.view(list, slot, &record))
            })
            .collect()
    }

    pub fn party(&self) -> Vec<RecordView> {
        self.list_views(&self.layout.party, self.layout.record.party_len)
    }

    /// Only the current box lives in the main bank.
    pub fn boxes(&self) -> Vec<StorageBox> {
        let list = &self.layout.current_box;
        vec![StorageBox {
            index: 0,
            capacity: list.capacity,
            records: self.list_views(list, self.layout.record.box_len),
        }]
    }

    fn derive(&self, record: &FlatRecord) -> Option<StatBlock> {
        let national = self.layout.national(record.species)?;
        let base = self.layout.base_stats(national)?;
        Some(stats::derive_gen12_stats(
            &base,
            record.dvs,
            record.stat_exp6(),
            record.level,
        ))
    }

    fn view(&self, list: &ListLayout, slot: usize, record: &FlatRecord) -> RecordView {
        let national = self.layout.national(record.species).unwrap_or(0);
        let gen2 = self.generation() == 2;
        let stats = record
            .stats
            .or_else(|| self.derive(record))
            .unwrap_or_default();
        let current_hp = match (record.stats, gen2) {
            (None, true) => stats.hp,
            _ => record.current_hp,
        };
        let moves = record
            .moves
            .iter()
            .enumerate()
            .filter(|&(_, &id)| id != 0)
            .map(|(i, &id)| MoveSlot {
                id: u16::from(id),
                name: moves::name(u16::from(id)).to_string(),
                pp: record.current_pp(i),
                pp_ups: record.pp_ups(i),
            })
            .collect();

        RecordView {
            slot,
            species: national,
            species_name: species::name(national).to_string(),
            nickname: Charset::Gen12.decode(&self.bytes, list.nickname_offset(slot), NAME_LEN),
            level: record.level,
            experience: record.experience,
            current_hp,
            stats,
            moves,
            evs: record.stat_exp6(),
            ivs: record.dvs.as_array(),
            held_item: gen2.then_some(u16::from(record.held_item)),
            ot_id: record.ot_id,
            ot_name: Charset::Gen12.decode(&self.bytes, list.ot_name_offset(slot), NAME_LEN),
            shiny: gen2.then(|| record.dvs.is_shiny()),
            nature: None,
            ability_slot: None,
            is_egg: gen2 && self.bytes[list.species_offset(slot)] == GEN2_EGG,
            status: record.status,
        }
    }

    fn load(&self, slot: usize) -> Result<(usize, FlatRecord), CoreError> {
        let party = &self.layout.party;
        let count = party.count(&self.bytes);
        if slot >= count {
            return Err(CoreError::out_of_range("party", slot, count));
        }
        let offset = party.record_offset(slot);
        let record = self
            .layout
            .record
            .decode(&self.bytes, offset, self.layout.record.party_len)
            .ok_or_else(|| CoreError::invalid(format!("party slot {slot} is empty")))?;
        Ok((offset, record))
    }

    fn store(&mut self, offset: usize, record: &FlatRecord) {
        let len = self.layout.record.party_len;
        self.layout.record.encode(record, &mut self.bytes, offset, len);
        self.seal();
    }

    fn edit(
        &mut self,
        slot: usize,
        apply: impl FnOnce(&Self, &mut FlatRecord) -> Result<(), CoreError>,
    ) -> Result<(), CoreError> {
        let (offset, mut record) = self.load(slot)?;
        apply(self, &mut record)?;
        self.store(offset, &record);
        Ok(())
    }

    /// Rewrites the stored stats from the record's inputs, clamping current HP.
    fn refresh_stats(&self, record: &mut FlatRecord) -> Result<(), CoreError> {
        let stats = self.derive(record).ok_or_else(|| {
            CoreError::invalid(format!("unknown species index {}", record.species))
        })?;
        record.stats = Some(stats);
        record.current_hp = record.current_hp.min(stats.hp);
        Ok(())
    }

    fn growth_of(&self, record: &FlatRecord) -> Result<stats::GrowthRate, CoreError> {
        self.layout
            .national(record.species)
            .and_then(species::by_national)
            .map(|s| s.growth)
            .ok_or_else(|| CoreError::invalid(format!("unknown species index {}", record.species)))
    }

    pub fn set_level(&mut self, slot: usize, level: u8) -> Result<(), CoreError> {
        check_level(level)?;
        self.edit(slot, |doc, record| {
            record.experience = doc.growth_of(record)?.exp_for_level(level);
            record.level = level;
            doc.refresh_stats(record)
        })
    }

    /// Takes six values in stat order. Generation 1 and 2 derive the HP DV and
    /// share one Special DV, so the HP and Sp. Defense entries are ignored.
    pub fn set_ivs(&mut self, slot: usize, ivs: [u8; 6]) -> Result<(), CoreError> {
        if let Some(dv) = ivs.iter().find(|&&dv| dv > GEN12_MAX_DV) {
            return Err(CoreError::invalid(format!(
                "DV {dv} out of range 0-{GEN12_MAX_DV}"
            )));
        }
        self.edit(slot, |doc, record| {
            record.dvs = Dvs {
                attack: ivs[1],
                defense: ivs[2],
                speed: ivs[3],
                special: ivs[4],
            };
            doc.refresh_stats(record)
        })
    }

    /// Stat experience in stat order; the Sp. Defense entry is ignored.
    pub fn set_evs(&mut self, slot: usize, evs: [u16; 6]) -> Result<(), CoreError> {
        self.edit(slot, |doc, record| {
            record.stat_exp = [evs[0], evs[1], evs[2], evs[3], evs[4]];
            doc.refresh_stats(record)
        })
    }

    pub fn set_nickname(&mut self, slot: usize, nickname: &str) -> Result<(), CoreError> {
        if nickname.is_empty() {
            return Err(CoreError::invalid("nickname must not be empty"));
        }
        let party = self.layout.party;
        let count = party.count(&self.bytes);
        if slot >= count {
            return Err(CoreError::out_of_range("party", slot, count));
        }
        let offset = party.nickname_offset(slot);
        let encoded = Charset::Gen12.encode(nickname, NAME_LEN);
        self.bytes[offset..offset + NAME_LEN].copy_from_slice(&encoded);
        self.seal();
        Ok(())
    }

    pub fn set_species(&mut self, slot: usize, national: u16) -> Result<(), CoreError> {
        let raw = self.layout.raw_species(national).ok_or_else(|| {
            CoreError::invalid(format!(
                "species {national} out of range 1-{}",
                species::dex_max(self.generation())
            ))
        })?;
        self.edit(slot, |doc, record| {
            record.species = raw;
            if let Some(types) = species::gen1_types(national).filter(|_| doc.generation() == 1) {
                record.types = types;
            }
            let growth = doc.growth_of(record)?;
            if growth.level_for_exp(record.experience) != record.level {
                record.experience = growth.exp_for_level(record.level);
            }
            doc.refresh_stats(record)
        })?;
        let species_offset = self.layout.party.species_offset(slot);
        let egg = self.generation() == 2 && self.bytes[species_offset] == GEN2_EGG;
        if !egg {
            self.bytes[species_offset] = raw;
        }
        self.seal();
        Ok(())
    }

    pub fn set_moves(&mut self, slot: usize, new_moves: &[u16]) -> Result<(), CoreError> {
        let new_moves =
            crate::gen3::check_moves(new_moves, moves::max_move_id(self.generation()))?;
        self.edit(slot, |_, record| {
            for (i, &id) in new_moves.iter().enumerate() {
                if u16::from(record.moves[i]) == id {
                    continue;
                }
                record.moves[i] = id as u8;
                record.set_pp(i, moves::base_pp(id), 0);
            }
            Ok(())
        })
    }

    pub fn set_shiny(&mut self, slot: usize, shiny: bool) -> Result<(), CoreError> {
        if self.generation() == 1 {
            return Err(CoreError::new(
                CoreErrorCode::UnsupportedOperation,
                "generation 1 has no shiny records",
            ));
        }
        self.edit(slot, |doc, record| {
            if record.dvs.is_shiny() == shiny {
                return Ok(());
            }
            if shiny {
                if !matches!(record.dvs.attack, 2 | 3 | 6 | 7 | 10 | 11 | 14 | 15) {
                    record.dvs.attack = 10;
                }
                record.dvs.defense = 10;
                record.dvs.speed = 10;
                record.dvs.special = 10;
            } else {
                record.dvs.attack = 9;
            }
            doc.refresh_stats(record)
        })
    }

    pub fn heal(&mut self, slot: usize) -> Result<(), CoreError> {
        self.edit(slot, |doc, record| {
            for i in 0..4 {
                let ups = record.pp_ups(i);
                let full = moves::max_pp(u16::from(record.moves[i]), ups, doc.generation());
                record.set_pp(i, full, ups);
            }
            if let Some(stats) = record.stats {
                record.current_hp = stats.hp;
            }
            record.status = 0;
            Ok(())
        })
    }

    pub fn add_to_party(&mut self, new: &NewRecord) -> Result<usize, CoreError> {
        let party = self.layout.party;
        if party.count(&self.bytes) >= PARTY_CAPACITY {
            return Err(CoreError::new(
                CoreErrorCode::RosterFull,
                format!("party already holds {PARTY_CAPACITY}"),
            ));
        }
        let generation = self.generation();
        let raw = self.layout.raw_species(new.species).ok_or_else(|| {
            CoreError::invalid(format!("species {} out of range", new.species))
        })?;
        check_level(new.level)?;
        if let Some(ivs) = new.ivs {
            if ivs.iter().any(|&dv| dv > GEN12_MAX_DV) {
                return Err(CoreError::invalid(format!("DVs {ivs:?} out of range")));
            }
        }
        let new_moves = match &new.moves {
            Some(list) => crate::gen3::check_moves(list, moves::max_move_id(generation))?,
            None => [moves::TACKLE, moves::GROWL, 0, 0],
        };
        let entry = species::by_national(new.species)
            .ok_or_else(|| CoreError::invalid("unknown species"))?;

        let mut rng = crate::construct::rng(new.seed);
        let dvs = match new.ivs {
            Some(ivs) => Dvs {
                attack: ivs[1],
                defense: ivs[2],
                speed: ivs[3],
                special: ivs[4],
            },
            None => Dvs {
                attack: rng.gen_range(0..=GEN12_MAX_DV),
                defense: rng.gen_range(0..=GEN12_MAX_DV),
                speed: rng.gen_range(0..=GEN12_MAX_DV),
                special: rng.gen_range(0..=GEN12_MAX_DV),
            },
        };

        let mut record = FlatRecord {
            species: raw,
            types: species::gen1_types(new.species)
                .filter(|_| generation == 1)
                .unwrap_or_default(),
            moves: new_moves.map(|id| id as u8),
            ot_id: read_u16_be(&self.bytes, self.layout.trainer_id),
            experience: entry.growth.exp_for_level(new.level),
            dvs,
            friendship: DEFAULT_FRIENDSHIP,
            level: new.level,
            ..FlatRecord::default()
        };
        for (i, &id) in new_moves.iter().enumerate() {
            record.set_pp(i, moves::base_pp(id), 0);
        }
        record.current_hp = u16::MAX;
        self.refresh_stats(&mut record)?;

        let nickname = new
            .nickname
            .clone()
            .unwrap_or_else(|| entry.name.to_uppercase().replace('’', "'"));
        let nickname = Charset::Gen12.encode(&nickname, NAME_LEN);
        let mut ot_name = [0u8; NAME_LEN];
        ot_name.copy_from_slice(&self.bytes[self.layout.player_name..self.layout.player_name + NAME_LEN]);

        let slot = party.push(&mut self.bytes, raw, &ot_name, &nickname);
        let offset = party.record_offset(slot);
        self.store(offset, &record);
        Ok(slot)
    }

    pub fn remove_from_party(&mut self, slot: usize) -> Result<(), CoreError> {
        let party = self.layout.party;
        let count = party.count(&self.bytes);
        if slot >= count {
            return Err(CoreError::out_of_range("party", slot, count));
        }
        if count == 1 {
            return Err(CoreError::invalid("the party must keep one member"));
        }
        party.remove(&mut self.bytes, slot);
        self.seal();
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
