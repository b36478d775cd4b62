//! Save slots and the section table of a generation 3 save.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::checksum::section_checksum;
use crate::core_api::{CoreError, CoreErrorCode};
use crate::reader::{read_u16_le, read_u32_le, write_u16_le, write_u32_le};

pub const SECTION_SIZE: usize = 0x1000;
pub const SECTION_PAYLOAD_LEN: usize = 0x0FF4;
pub const SECTION_ID_OFFSET: usize = 0x0FF4;
pub const CHECKSUM_OFFSET: usize = 0x0FF6;
pub const SIGNATURE_OFFSET: usize = 0x0FF8;
pub const SAVE_INDEX_OFFSET: usize = 0x0FFC;
pub const SIGNATURE: u32 = 0x0801_2025;

pub const SECTIONS_PER_SLOT: usize = 14;
pub const SLOT_SIZE: usize = SECTION_SIZE * SECTIONS_PER_SLOT;
pub const SLOT_OFFSETS: [usize; 2] = [0, 0xE000];

pub const TRAINER_INFO: u16 = 0;
pub const TEAM_ITEMS: u16 = 1;
pub const PC_BUFFER_FIRST: u16 = 5;
pub const PC_BUFFER_LAST: u16 = 13;

/// Used bytes of each save block 1 section (types 1–4); the rest is padding.
pub const SAVE_BLOCK1_CHUNK: usize = 3968;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTable {
    pub slot: usize,
    pub slot_offset: usize,
    pub save_index: u32,
    offsets: [Option<usize>; SECTIONS_PER_SLOT],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCheck {
    pub section_type: u16,
    pub offset: usize,
    pub stored: u16,
    pub computed: u16,
}

impl SectionCheck {
    pub fn is_valid(&self) -> bool {
        self.stored == self.computed
    }
}

fn slot_fits(data: &[u8], slot_offset: usize) -> bool {
    data.len() >= slot_offset + SLOT_SIZE
}

fn slot_signed(data: &[u8], slot_offset: usize) -> bool {
    read_u32_le(data, slot_offset + SIGNATURE_OFFSET) == SIGNATURE
}

impl SectionTable {
    /// Picks the active slot and maps each section type to its byte offset.
    ///
    /// The slot with the strictly greater save index wins and a tie goes to
    /// slot 0. A slot without the footer signature only wins when the other
    /// slot is unsigned too. Returns `None` when no slot fits in `data`.
    pub fn locate(data: &[u8]) -> Option<Self> {
        let candidates: Vec<(usize, usize, u32, bool)> = SLOT_OFFSETS
            .iter()
            .enumerate()
            .filter(|&(_, &offset)| slot_fits(data, offset))
            .map(|(slot, &offset)| {
                (
                    slot,
                    offset,
                    read_u32_le(data, offset + SAVE_INDEX_OFFSET),
                    slot_signed(data, offset),
                )
            })
            .collect();

        let mut best = *candidates.first()?;
        for &candidate in &candidates[1..] {
            let (_, _, index, signed) = candidate;
            let (_, _, best_index, best_signed) = best;
            if (signed && !best_signed) || (signed == best_signed && index > best_index) {
                best = candidate;
            }
        }

        let (slot, slot_offset, save_index, _) = best;
        debug!("gen3 active slot {slot} (save index {save_index})");

        let mut offsets = [None; SECTIONS_PER_SLOT];
        for i in 0..SECTIONS_PER_SLOT {
            let offset = slot_offset + i * SECTION_SIZE;
            let section_type = read_u16_le(data, offset + SECTION_ID_OFFSET);
            match offsets.get_mut(usize::from(section_type)) {
                Some(entry @ None) => *entry = Some(offset),
                Some(Some(_)) => warn!("section type {section_type} appears twice in slot {slot}"),
                None => debug!("ignoring section with type {section_type} at {offset:#x}"),
            }
        }

        Some(Self {
            slot,
            slot_offset,
            save_index,
            offsets,
        })
    }

    pub fn offset(&self, section_type: u16) -> Option<usize> {
        self.offsets.get(usize::from(section_type)).copied().flatten()
    }

    pub fn require(&self, section_type: u16) -> Result<usize, CoreError> {
        self.offset(section_type).ok_or_else(|| {
            CoreError::new(
                CoreErrorCode::SectionMissing,
                format!("section {section_type} missing from slot {}", self.slot),
            )
        })
    }

    pub fn is_complete(&self) -> bool {
        self.offsets.iter().all(Option::is_some)
    }

    pub fn present(&self) -> impl Iterator<Item = (u16, usize)> + '_ {
        self.offsets
            .iter()
            .enumerate()
            .filter_map(|(ty, offset)| offset.map(|o| (ty as u16, o)))
    }
}

/// Compares stored and computed checksums for every section of the slot.
pub fn verify(data: &[u8], table: &SectionTable) -> Vec<SectionCheck> {
    table
        .present()
        .map(|(section_type, offset)| SectionCheck {
            section_type,
            offset,
            stored: read_u16_le(data, offset + CHECKSUM_OFFSET),
            computed: section_checksum(&data[offset..offset + SECTION_SIZE]),
        })
        .collect()
}

pub fn write_footer(data: &mut [u8], offset: usize, section_type: u16, save_index: u32) {
    write_u16_le(data, offset + SECTION_ID_OFFSET, section_type);
    write_u16_le(data, offset + CHECKSUM_OFFSET, 0);
    write_u32_le(data, offset + SIGNATURE_OFFSET, SIGNATURE);
    write_u32_le(data, offset + SAVE_INDEX_OFFSET, save_index);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_image(len: usize, indices: [u32; 2]) -> Vec<u8> {
        let mut data = vec![0u8; len];
        for (slot, &slot_offset) in SLOT_OFFSETS.iter().enumerate() {
            if !slot_fits(&data, slot_offset) {
                continue;
            }
            for i in 0..SECTIONS_PER_SLOT {
                // rotate so the table has to be read, not assumed
                let ty = ((i + 3) % SECTIONS_PER_SLOT) as u16;
                write_footer(&mut data, slot_offset + i * SECTION_SIZE, ty, indices[slot]);
            }
        }
        data
    }

    #[test]
    fn higher_save_index_wins() {
        let data = slot_image(0x20000, [4, 5]);
        let table = SectionTable::locate(&data).unwrap();
        assert_eq!(table.slot, 1);
        assert_eq!(table.slot_offset, 0xE000);
        assert_eq!(table.offset(3), Some(0xE000));
        assert_eq!(table.offset(0), Some(0xE000 + 11 * SECTION_SIZE));
        assert!(table.is_complete());
    }

    #[test]
    fn tie_goes_to_slot_zero() {
        let data = slot_image(0x20000, [7, 7]);
        assert_eq!(SectionTable::locate(&data).unwrap().slot, 0);
    }

    #[test]
    fn half_size_image_uses_first_slot() {
        let data = slot_image(0x10000, [1, 0]);
        let table = SectionTable::locate(&data).unwrap();
        assert_eq!(table.slot, 0);
        assert!(SectionTable::locate(&data[..0x1000]).is_none());
    }

    #[test]
    fn unsigned_slot_loses() {
        let mut data = slot_image(0x20000, [1, 2]);
        write_u32_le(&mut data, 0xE000 + SIGNATURE_OFFSET, 0xFFFF_FFFF);
        assert_eq!(SectionTable::locate(&data).unwrap().slot, 0);
    }

    #[test]
    fn missing_section_is_reported() {
        let mut data = slot_image(0x20000, [1, 0]);
        write_u16_le(&mut data, 11 * SECTION_SIZE + SECTION_ID_OFFSET, 3);
        let table = SectionTable::locate(&data).unwrap();
        assert!(!table.is_complete());
        let err = table.require(TRAINER_INFO).unwrap_err();
        assert_eq!(err.code, CoreErrorCode::SectionMissing);
    }

    #[test]
    fn verify_flags_stale_checksums() {
        let mut data = slot_image(0x20000, [1, 0]);
        let table = SectionTable::locate(&data).unwrap();
        for (_, offset) in table.present() {
            crate::checksum::update_checksum(&mut data, offset);
        }
        assert!(verify(&data, &table).iter().all(SectionCheck::is_valid));

        let first = table.offset(TEAM_ITEMS).unwrap();
        data[first] ^= 0x01;
        let bad: Vec<_> = verify(&data, &table)
            .into_iter()
            .filter(|c| !c.is_valid())
            .map(|c| c.section_type)
            .collect();
        assert_eq!(bad, [TEAM_ITEMS]);
    }
}
