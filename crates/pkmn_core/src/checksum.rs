//! Integrity values for all three save layouts.

use std::ops::RangeInclusive;

use crate::gen3::sections::{
    CHECKSUM_OFFSET, SECTION_ID_OFFSET, SECTION_PAYLOAD_LEN, SECTION_SIZE,
};
use crate::reader::{read_u16_le, write_u16_le};

/// Sums `payload` as little-endian 32-bit words with wraparound, then folds
/// the high half onto the low half. A trailing partial word is ignored.
pub fn compute_checksum(payload: &[u8]) -> u16 {
    let sum = payload.chunks_exact(4).fold(0u32, |acc, word| {
        acc.wrapping_add(u32::from_le_bytes([word[0], word[1], word[2], word[3]]))
    });
    ((sum >> 16) as u16).wrapping_add(sum as u16)
}

/// Number of payload bytes the game includes in a section's checksum.
pub fn section_data_len(section_type: u16) -> usize {
    match section_type {
        0 => 3884,
        1..=3 | 5..=12 => 3968,
        4 => 3848,
        13 => 2000,
        _ => SECTION_PAYLOAD_LEN,
    }
}

/// Checksum of one 4096-byte section, using the length for its type tag.
pub fn section_checksum(section: &[u8]) -> u16 {
    let section_type = read_u16_le(section, SECTION_ID_OFFSET);
    compute_checksum(&section[..section_data_len(section_type)])
}

/// Recomputes the checksum of the section at `section_offset` and stores it in
/// the section footer.
pub fn update_checksum(buffer: &mut [u8], section_offset: usize) {
    let section = &buffer[section_offset..section_offset + SECTION_SIZE];
    let checksum = section_checksum(section);
    write_u16_le(buffer, section_offset + CHECKSUM_OFFSET, checksum);
}

/// Generation 1: one's complement of the 8-bit byte sum.
pub fn gen1_checksum(data: &[u8], range: RangeInclusive<usize>) -> u8 {
    !data[range].iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Generation 2: 16-bit byte sum.
pub fn gen2_checksum(data: &[u8], range: RangeInclusive<usize>) -> u16 {
    data[range]
        .iter()
        .fold(0u16, |acc, &b| acc.wrapping_add(u16::from(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_carry_from_high_half() {
        let mut payload = vec![0u8; 8];
        payload[..4].copy_from_slice(&0x0001_FFFFu32.to_le_bytes());
        payload[4..].copy_from_slice(&0x0000_0001u32.to_le_bytes());
        // sum = 0x0002_0000 -> 0x0002 + 0x0000
        assert_eq!(compute_checksum(&payload), 0x0002);
    }

    #[test]
    fn word_sum_wraps() {
        let mut payload = vec![0u8; 8];
        payload[..4].copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
        payload[4..].copy_from_slice(&0x0000_0002u32.to_le_bytes());
        // sum wraps to 1
        assert_eq!(compute_checksum(&payload), 0x0001);
    }

    #[test]
    fn update_writes_footer() {
        let mut buffer = vec![0u8; SECTION_SIZE];
        buffer[0] = 0x10;
        buffer[SECTION_ID_OFFSET] = 1;
        update_checksum(&mut buffer, 0);
        assert_eq!(read_u16_le(&buffer, CHECKSUM_OFFSET), 0x0010);
    }

    #[test]
    fn section_length_excludes_unused_tail() {
        let mut buffer = vec![0u8; SECTION_SIZE];
        buffer[SECTION_ID_OFFSET] = 13;
        buffer[2000] = 0x55;
        assert_eq!(section_checksum(&buffer), 0);
        buffer[1999] = 0x01;
        assert_eq!(section_checksum(&buffer), 0x0100);
    }

    #[test]
    fn flat_checksums() {
        let data = [1u8, 2, 3, 250];
        assert_eq!(gen1_checksum(&data, 0..=3), !0u8);
        assert_eq!(gen2_checksum(&data, 0..=3), 256);
        assert_eq!(gen1_checksum(&data, 0..=2), !6u8);
    }
}
