//! Generation 1 and 2 record codec.
//!
//! Both generations store records as plain big-endian fields. A box record is
//! a prefix of the party record; fields past its end are simply absent.

use crate::reader::{read_u16_be, read_u24_be, slice_at, write_u16_be, write_u24_be};
use crate::stats::{Dvs, Stat, StatBlock};

#[derive(Debug)]
pub struct RecordLayout {
    pub party_len: usize,
    pub box_len: usize,
    pub species: usize,
    pub held_item: Option<usize>,
    pub current_hp: usize,
    pub box_level: Option<usize>,
    pub status: usize,
    pub types: Option<usize>,
    pub moves: usize,
    pub ot_id: usize,
    pub experience: usize,
    pub stat_exp: usize,
    pub dvs: usize,
    pub pp: usize,
    pub friendship: Option<usize>,
    pub level: usize,
    /// Max HP, Atk, Def, Spe, SpA, SpD. Generation 1 repeats its Special.
    pub stats: [usize; 6],
}

/// Stat experience: HP, Atk, Def, Spe, Special.
pub const STAT_EXP_COUNT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRecord {
    pub species: u8,
    pub held_item: u8,
    pub current_hp: u16,
    pub status: u8,
    pub types: (u8, u8),
    pub moves: [u8; 4],
    pub ot_id: u16,
    pub experience: u32,
    pub stat_exp: [u16; STAT_EXP_COUNT],
    pub dvs: Dvs,
    /// Current PP in the low six bits, PP Ups in the top two.
    pub pp: [u8; 4],
    pub friendship: u8,
    pub level: u8,
    /// Present only for party records.
    pub stats: Option<StatBlock>,
}

impl FlatRecord {
    pub fn pp_ups(&self, slot: usize) -> u8 {
        self.pp[slot] >> 6
    }

    pub fn current_pp(&self, slot: usize) -> u8 {
        self.pp[slot] & 0x3F
    }

    pub fn set_pp(&mut self, slot: usize, pp: u8, ups: u8) {
        self.pp[slot] = (ups.min(3) << 6) | (pp & 0x3F);
    }

    /// Stat experience in six-stat order.
    pub fn stat_exp6(&self) -> [u16; 6] {
        let [hp, atk, def, spe, spc] = self.stat_exp;
        [hp, atk, def, spe, spc, spc]
    }
}

impl RecordLayout {
    fn fits(&self, offset: usize, width: usize, len: usize) -> bool {
        offset + width <= len
    }

    /// Decodes `len` bytes at `base`. A zero species byte is an empty slot.
    pub fn decode(&self, data: &[u8], base: usize, len: usize) -> Option<FlatRecord> {
        let raw = slice_at(data, base, len)?;
        let species = raw[self.species];
        if species == 0 {
            return None;
        }

        let mut moves = [0u8; 4];
        moves.copy_from_slice(&raw[self.moves..self.moves + 4]);
        let mut pp = [0u8; 4];
        pp.copy_from_slice(&raw[self.pp..self.pp + 4]);
        let stat_exp = std::array::from_fn(|i| read_u16_be(raw, self.stat_exp + i * 2));

        let party = len >= self.party_len;
        let level = match self.box_level {
            Some(box_level) if !party => raw[box_level],
            _ => raw[self.level],
        };
        let stats = party.then(|| {
            StatBlock::from_fn(|stat| read_u16_be(raw, self.stats[stat.index()]))
        });

        Some(FlatRecord {
            species,
            held_item: self.held_item.map_or(0, |o| raw[o]),
            current_hp: if self.fits(self.current_hp, 2, len) {
                read_u16_be(raw, self.current_hp)
            } else {
                0
            },
            status: if self.fits(self.status, 1, len) {
                raw[self.status]
            } else {
                0
            },
            types: self.types.map_or((0, 0), |o| (raw[o], raw[o + 1])),
            moves,
            ot_id: read_u16_be(raw, self.ot_id),
            experience: read_u24_be(raw, self.experience),
            stat_exp,
            dvs: Dvs::from_bytes(raw[self.dvs], raw[self.dvs + 1]),
            pp,
            friendship: self.friendship.map_or(0, |o| raw[o]),
            level,
            stats,
        })
    }

    /// Writes every modelled field that lies inside `len` bytes at `base`.
    /// Unmodelled bytes are left untouched.
    pub fn encode(&self, record: &FlatRecord, data: &mut [u8], base: usize, len: usize) {
        let raw = &mut data[base..base + len];
        raw[self.species] = record.species;
        if let Some(o) = self.held_item {
            raw[o] = record.held_item;
        }
        if self.fits(self.current_hp, 2, len) {
            write_u16_be(raw, self.current_hp, record.current_hp);
        }
        if self.fits(self.status, 1, len) {
            raw[self.status] = record.status;
        }
        if let Some(o) = self.types {
            raw[o] = record.types.0;
            raw[o + 1] = record.types.1;
        }
        raw[self.moves..self.moves + 4].copy_from_slice(&record.moves);
        write_u16_be(raw, self.ot_id, record.ot_id);
        write_u24_be(raw, self.experience, record.experience);
        for (i, &value) in record.stat_exp.iter().enumerate() {
            write_u16_be(raw, self.stat_exp + i * 2, value);
        }
        raw[self.dvs..self.dvs + 2].copy_from_slice(&record.dvs.to_bytes());
        raw[self.pp..self.pp + 4].copy_from_slice(&record.pp);
        if let Some(o) = self.friendship {
            raw[o] = record.friendship;
        }
        if let Some(o) = self.box_level {
            raw[o] = record.level;
        }
        if self.fits(self.level, 1, len) {
            raw[self.level] = record.level;
        }
        if let (true, Some(stats)) = (len >= self.party_len, record.stats) {
            for stat in Stat::ALL {
                write_u16_be(raw, self.stats[stat.index()], stats.get(stat));
            }
        }
    }
}
