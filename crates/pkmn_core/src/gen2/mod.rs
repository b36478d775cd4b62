//! Generation 2 (Gold, Silver, Crystal) main bank layout.

use crate::core_api::Game;
use crate::flat::list::ListLayout;
use crate::flat::record::RecordLayout;
use crate::flat::{BOX_CAPACITY, ChecksumKind, FlatChecksum, FlatLayout, MoneyFormat, PARTY_CAPACITY};

pub const TRAINER_ID: usize = 0x2009;
pub const PLAYER_NAME: usize = 0x200B;
pub const CHECKSUM_START: usize = 0x2009;

pub const PARTY_RECORD_LEN: usize = 48;
pub const BOX_RECORD_LEN: usize = 32;

/// Crystal stores the player's gender here.
const CRYSTAL_GENDER: usize = 0x3E3D;

static RECORD: RecordLayout = RecordLayout {
    party_len: PARTY_RECORD_LEN,
    box_len: BOX_RECORD_LEN,
    species: 0x00,
    held_item: Some(0x01),
    current_hp: 0x22,
    box_level: None,
    status: 0x20,
    types: None,
    moves: 0x02,
    ot_id: 0x06,
    experience: 0x08,
    stat_exp: 0x0B,
    dvs: 0x15,
    pp: 0x17,
    friendship: Some(0x1B),
    level: 0x1F,
    stats: [0x24, 0x26, 0x28, 0x2A, 0x2C, 0x2E],
};

const GS_CHECKSUM: FlatChecksum = FlatChecksum {
    kind: ChecksumKind::Sum16,
    start: CHECKSUM_START,
    end: 0x2D68,
    at: 0x2D69,
};

const CRYSTAL_CHECKSUM: FlatChecksum = FlatChecksum {
    kind: ChecksumKind::Sum16,
    start: CHECKSUM_START,
    end: 0x2B82,
    at: 0x2D0D,
};

pub static GOLD_SILVER: FlatLayout = FlatLayout {
    game: Game::GoldSilver,
    record: &RECORD,
    party: ListLayout {
        offset: 0x288A,
        capacity: PARTY_CAPACITY,
        record_len: PARTY_RECORD_LEN,
    },
    current_box: ListLayout {
        offset: 0x2D6C,
        capacity: BOX_CAPACITY,
        record_len: BOX_RECORD_LEN,
    },
    player_name: PLAYER_NAME,
    trainer_id: TRAINER_ID,
    money: 0x23DB,
    money_format: MoneyFormat::Binary,
    badges: 0x23E4,
    badge_bytes: 2,
    play_hours: 0x2053,
    play_hours_wide: true,
    play_minutes: 0x2055,
    play_seconds: 0x2056,
    gender: None,
    checksum: GS_CHECKSUM,
};

pub static CRYSTAL: FlatLayout = FlatLayout {
    game: Game::Crystal,
    record: &RECORD,
    party: ListLayout {
        offset: 0x2865,
        capacity: PARTY_CAPACITY,
        record_len: PARTY_RECORD_LEN,
    },
    current_box: ListLayout {
        offset: 0x2D10,
        capacity: BOX_CAPACITY,
        record_len: BOX_RECORD_LEN,
    },
    player_name: PLAYER_NAME,
    trainer_id: TRAINER_ID,
    money: 0x23DC,
    money_format: MoneyFormat::Binary,
    badges: 0x23E5,
    badge_bytes: 2,
    play_hours: 0x2052,
    play_hours_wide: true,
    play_minutes: 0x2054,
    play_seconds: 0x2055,
    gender: Some(CRYSTAL_GENDER),
    checksum: CRYSTAL_CHECKSUM,
};

pub fn layout(game: Game) -> &'static FlatLayout {
    match game {
        Game::Crystal => &CRYSTAL,
        _ => &GOLD_SILVER,
    }
}

pub fn checksum_valid(data: &[u8], game: Game) -> bool {
    layout(game).checksum.is_valid(data)
}

pub fn trainer_name(data: &[u8]) -> String {
    GOLD_SILVER.trainer_name(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flat::SAVE_LEN;
    use crate::reader::read_u16_le;

    #[test]
    fn lists_stay_inside_the_bank() {
        for layout in [&GOLD_SILVER, &CRYSTAL] {
            assert!(layout.party.offset + layout.party.len() < layout.current_box.offset);
            assert!(layout.current_box.offset + layout.current_box.len() < SAVE_LEN);
        }
        // Gold/Silver parties sit inside the checked range.
        assert!(GOLD_SILVER.party.offset + GOLD_SILVER.party.len() <= GS_CHECKSUM.end);
    }

    #[test]
    fn checksum_is_little_endian_byte_sum() {
        let mut data = vec![0u8; SAVE_LEN];
        data[CHECKSUM_START] = 0xFF;
        data[CHECKSUM_START + 1] = 0x02;
        GS_CHECKSUM.write(&mut data);
        assert_eq!(read_u16_le(&data, GS_CHECKSUM.at), 0x0101);
        assert!(checksum_valid(&data, Game::GoldSilver));
        assert!(!checksum_valid(&data, Game::Crystal));
    }
}
