//! Generation 1 and 2 record lists.
//!
//! A list is a count byte, a species list of `capacity + 1` bytes ended by
//! 0xFF, `capacity` records, then `capacity` trainer names and `capacity`
//! nicknames of 11 bytes each.

pub const NAME_LEN: usize = 11;
pub const LIST_TERMINATOR: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    pub offset: usize,
    pub capacity: usize,
    pub record_len: usize,
}

impl ListLayout {
    pub const fn len(&self) -> usize {
        1 + (self.capacity + 1) + self.capacity * (self.record_len + 2 * NAME_LEN)
    }

    pub fn count(&self, data: &[u8]) -> usize {
        usize::from(data[self.offset]).min(self.capacity)
    }

    pub fn species_offset(&self, slot: usize) -> usize {
        self.offset + 1 + slot
    }

    pub fn record_offset(&self, slot: usize) -> usize {
        self.offset + 1 + self.capacity + 1 + slot * self.record_len
    }

    pub fn ot_name_offset(&self, slot: usize) -> usize {
        self.record_offset(self.capacity) + slot * NAME_LEN
    }

    pub fn nickname_offset(&self, slot: usize) -> usize {
        self.ot_name_offset(self.capacity) + slot * NAME_LEN
    }

    /// Writes an empty list.
    pub fn clear(&self, data: &mut [u8]) {
        data[self.offset..self.offset + self.len()].fill(0);
        data[self.species_offset(0)] = LIST_TERMINATOR;
    }

    /// Removes `slot` from every parallel table, shifting later entries down
    /// and zeroing the vacated tail. `slot` must be below the live count.
    pub fn remove(&self, data: &mut [u8], slot: usize) {
        let count = self.count(data);
        debug_assert!(slot < count);

        let shift = |data: &mut [u8], start: usize, width: usize| {
            let from = start + (slot + 1) * width;
            let end = start + count * width;
            data.copy_within(from..end, start + slot * width);
            data[end - width..end].fill(0);
        };
        shift(data, self.species_offset(0), 1);
        shift(data, self.record_offset(0), self.record_len);
        shift(data, self.ot_name_offset(0), NAME_LEN);
        shift(data, self.nickname_offset(0), NAME_LEN);

        data[self.species_offset(count - 1)] = LIST_TERMINATOR;
        data[self.offset] = (count - 1) as u8;
    }

    /// Appends the species byte, names and a zeroed record slot, returning the
    /// new entry's index. The caller fills the record and must have checked
    /// the capacity.
    pub fn push(&self, data: &mut [u8], species: u8, ot_name: &[u8], nickname: &[u8]) -> usize {
        let slot = self.count(data);
        debug_assert!(slot < self.capacity);

        data[self.species_offset(slot)] = species;
        data[self.species_offset(slot + 1)] = LIST_TERMINATOR;
        let record = self.record_offset(slot);
        data[record..record + self.record_len].fill(0);
        let ot = self.ot_name_offset(slot);
        data[ot..ot + NAME_LEN].copy_from_slice(&ot_name[..NAME_LEN]);
        let nick = self.nickname_offset(slot);
        data[nick..nick + NAME_LEN].copy_from_slice(&nickname[..NAME_LEN]);
        data[self.offset] = (slot + 1) as u8;
        slot
    }
}
