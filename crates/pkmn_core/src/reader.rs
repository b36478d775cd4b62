//! Fixed-offset field access over save buffers.
//!
//! Every document validates the buffer length before it hands out offsets, so
//! these helpers index directly. Generation 1 and 2 store multi-byte values
//! big-endian, generation 3 little-endian.

pub fn read_u16_le(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

pub fn read_u16_be(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

pub fn read_u24_be(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([0, data[offset], data[offset + 1], data[offset + 2]])
}

pub fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

pub fn write_u16_le(data: &mut [u8], offset: usize, value: u16) {
    data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

pub fn write_u16_be(data: &mut [u8], offset: usize, value: u16) {
    data[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

/// Writes the low 24 bits of `value`.
pub fn write_u24_be(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 3].copy_from_slice(&value.to_be_bytes()[1..]);
}

pub fn write_u32_le(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Returns `data[offset..offset + len]` when the whole range is in bounds.
pub fn slice_at(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    data.get(offset..offset.checked_add(len)?)
}

/// Three-byte packed BCD as used by generation 1 money.
pub fn read_bcd(data: &[u8], offset: usize, len: usize) -> u32 {
    data[offset..offset + len].iter().fold(0u32, |acc, &b| {
        acc * 100 + u32::from(b >> 4) * 10 + u32::from(b & 0x0F)
    })
}

/// Writes `value` as `len` bytes of packed BCD, saturating at the largest
/// representable value.
pub fn write_bcd(data: &mut [u8], offset: usize, len: usize, value: u32) {
    let max = 10u32.pow(2 * len as u32) - 1;
    let mut remaining = value.min(max);
    for i in (0..len).rev() {
        let pair = (remaining % 100) as u8;
        remaining /= 100;
        data[offset + i] = ((pair / 10) << 4) | (pair % 10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bcd_matches_hand_encoded_money() {
        let mut data = [0u8; 3];
        write_bcd(&mut data, 0, 3, 123_456);
        assert_eq!(data, [0x12, 0x34, 0x56]);
        assert_eq!(read_bcd(&data, 0, 3), 123_456);
    }

    #[test]
    fn bcd_saturates() {
        let mut data = [0u8; 3];
        write_bcd(&mut data, 0, 3, 5_000_000);
        assert_eq!(data, [0x99, 0x99, 0x99]);
    }

    #[test]
    fn u24_writes_low_bytes_only() {
        let mut data = [0xAAu8; 4];
        write_u24_be(&mut data, 0, 0x0012_3456);
        assert_eq!(data, [0x12, 0x34, 0x56, 0xAA]);
        assert_eq!(read_u24_be(&data, 0), 0x12_3456);
    }

    #[test]
    fn slice_at_rejects_out_of_bounds() {
        let data = [0u8; 8];
        assert!(slice_at(&data, 4, 4).is_some());
        assert!(slice_at(&data, 5, 4).is_none());
        assert!(slice_at(&data, usize::MAX, 2).is_none());
    }
}
