//! Generation 1 (Red, Blue, Yellow) main bank layout.
//!
//! Yellow shares every offset used here with Red and Blue; only the variant
//! tag differs.

use crate::core_api::Game;
use crate::flat::list::ListLayout;
use crate::flat::record::RecordLayout;
use crate::flat::{BOX_CAPACITY, ChecksumKind, FlatChecksum, FlatLayout, MoneyFormat, PARTY_CAPACITY};

pub const PLAYER_NAME: usize = 0x2598;
pub const MONEY: usize = 0x25F3;
pub const BADGES: usize = 0x2602;
pub const TRAINER_ID: usize = 0x2605;
pub const PLAY_HOURS: usize = 0x2CED;
pub const PLAY_MINUTES: usize = 0x2CEF;
pub const PLAY_SECONDS: usize = 0x2CF0;
pub const PARTY: usize = 0x2F2C;
pub const CURRENT_BOX: usize = 0x30C0;
pub const CHECKSUM: usize = 0x3523;

pub const PARTY_RECORD_LEN: usize = 44;
pub const BOX_RECORD_LEN: usize = 33;

static RECORD: RecordLayout = RecordLayout {
    party_len: PARTY_RECORD_LEN,
    box_len: BOX_RECORD_LEN,
    species: 0x00,
    // 0x07 holds the catch rate, which Gold and Silver reuse as the held item.
    held_item: None,
    current_hp: 0x01,
    box_level: Some(0x03),
    status: 0x04,
    types: Some(0x05),
    moves: 0x08,
    ot_id: 0x0C,
    experience: 0x0E,
    stat_exp: 0x11,
    dvs: 0x1B,
    pp: 0x1D,
    friendship: None,
    level: 0x21,
    stats: [0x22, 0x24, 0x26, 0x28, 0x2A, 0x2A],
};

const PARTY_LIST: ListLayout = ListLayout {
    offset: PARTY,
    capacity: PARTY_CAPACITY,
    record_len: PARTY_RECORD_LEN,
};

const BOX_LIST: ListLayout = ListLayout {
    offset: CURRENT_BOX,
    capacity: BOX_CAPACITY,
    record_len: BOX_RECORD_LEN,
};

const MAIN_CHECKSUM: FlatChecksum = FlatChecksum {
    kind: ChecksumKind::Complement8,
    start: PLAYER_NAME,
    end: CHECKSUM - 1,
    at: CHECKSUM,
};

pub static RED_BLUE: FlatLayout = FlatLayout {
    game: Game::RedBlue,
    record: &RECORD,
    party: PARTY_LIST,
    current_box: BOX_LIST,
    player_name: PLAYER_NAME,
    trainer_id: TRAINER_ID,
    money: MONEY,
    money_format: MoneyFormat::Bcd,
    badges: BADGES,
    badge_bytes: 1,
    play_hours: PLAY_HOURS,
    play_hours_wide: false,
    play_minutes: PLAY_MINUTES,
    play_seconds: PLAY_SECONDS,
    gender: None,
    checksum: MAIN_CHECKSUM,
};

pub static YELLOW: FlatLayout = FlatLayout {
    game: Game::Yellow,
    record: &RECORD,
    party: PARTY_LIST,
    current_box: BOX_LIST,
    player_name: PLAYER_NAME,
    trainer_id: TRAINER_ID,
    money: MONEY,
    money_format: MoneyFormat::Bcd,
    badges: BADGES,
    badge_bytes: 1,
    play_hours: PLAY_HOURS,
    play_hours_wide: false,
    play_minutes: PLAY_MINUTES,
    play_seconds: PLAY_SECONDS,
    gender: None,
    checksum: MAIN_CHECKSUM,
};

pub fn layout(game: Game) -> &'static FlatLayout {
    match game {
        Game::Yellow => &YELLOW,
        _ => &RED_BLUE,
    }
}

pub fn checksum_valid(data: &[u8]) -> bool {
    MAIN_CHECKSUM.is_valid(data)
}

pub fn trainer_name(data: &[u8]) -> String {
    RED_BLUE.trainer_name(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flat::SAVE_LEN;

    #[test]
    fn record_layout_fits_its_lengths() {
        assert!(RECORD.stats[5] + 2 <= PARTY_RECORD_LEN);
        assert!(RECORD.pp + 4 <= BOX_RECORD_LEN);
        assert_eq!(PARTY_LIST.len(), 404);
        assert!(BOX_LIST.offset + BOX_LIST.len() <= CHECKSUM);
    }

    #[test]
    fn checksum_is_complement_of_byte_sum() {
        let mut data = vec![0u8; SAVE_LEN];
        assert!(!checksum_valid(&data));
        MAIN_CHECKSUM.write(&mut data);
        assert_eq!(data[CHECKSUM], 0xFF);
        assert!(checksum_valid(&data));

        data[PLAYER_NAME] = 0x80;
        assert!(!checksum_valid(&data));
        MAIN_CHECKSUM.write(&mut data);
        assert_eq!(data[CHECKSUM], 0x7F);
    }

    #[test]
    fn short_buffer_never_validates() {
        assert!(!checksum_valid(&[0u8; 0x100]));
    }
}
