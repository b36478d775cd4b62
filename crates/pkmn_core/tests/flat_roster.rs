use pkmn_core::construct::{BuildOptions, SaveTemplate, build_save};
use pkmn_core::core_api::{CapabilityIssue, CoreErrorCode, Engine, Game, NewRecord, Session};
use pkmn_core::flat::list::NAME_LEN;
use pkmn_core::gen1;
use pkmn_core::gen2;
use pkmn_core::species;
use pkmn_core::stats::{self, Dvs};
use pkmn_core::text::Charset;

const PIKACHU: u16 = 25;
const CHIKORITA: u16 = 152;

fn options(starter: Option<u16>) -> BuildOptions {
    BuildOptions {
        trainer_name: "ASH".to_string(),
        trainer_id: Some(31337),
        starter,
        seed: Some(3),
        ..BuildOptions::default()
    }
}

fn open(bytes: Vec<u8>, hint: Option<Game>) -> Session {
    Engine::new()
        .open_bytes(bytes, hint)
        .expect("failed to open flat save")
}

fn red_blue() -> Session {
    open(build_save(&SaveTemplate::RED_BLUE, &options(Some(PIKACHU))).unwrap(), None)
}

fn add(session: &mut Session, species: u16, level: u8, seed: u64) {
    let new = NewRecord {
        seed: Some(seed),
        ..NewRecord::new(species, level)
    };
    session.add_to_party(&new).expect("add to party");
}

#[test]
fn gen1_save_reports_trainer_and_starter() {
    let session = red_blue();
    let info = session.info();
    assert_eq!(info.generation, 1);
    assert_eq!(info.game, Game::RedBlue);
    assert_eq!(info.byte_len, 32_768);
    assert_eq!(info.trainer_name, "ASH");
    assert_eq!(info.trainer_id, 31337);
    assert_eq!(info.secret_id, None);
    assert_eq!(info.money, 3000);

    let party = session.party().unwrap();
    assert_eq!(party.len(), 1);
    let pikachu = &party[0];
    assert_eq!(pikachu.species, PIKACHU);
    assert_eq!(pikachu.nickname, "PIKACHU");
    assert_eq!(pikachu.ot_name, "ASH");
    assert_eq!(pikachu.ot_id, 31337);
    assert_eq!(pikachu.level, 5);
    assert_eq!(pikachu.held_item, None);
    assert_eq!(pikachu.shiny, None);
    assert_eq!(pikachu.nature, None);
    assert_eq!(pikachu.current_hp, pikachu.stats.hp);
    assert!(pikachu.ivs.iter().all(|&dv| dv <= 15));

    let boxes = session.boxes().unwrap();
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].capacity, 20);
    assert!(boxes[0].records.is_empty());
}

#[test]
fn gen1_level_edit_uses_special_and_dvs() {
    let mut session = red_blue();
    session.set_ivs(0, [0, 15, 14, 13, 12, 0]).unwrap();
    session.set_level(0, 50).unwrap();
    assert!(gen1::checksum_valid(session.bytes()));

    let record = session.party().unwrap().remove(0);
    assert_eq!(record.level, 50);
    let dvs = Dvs {
        attack: 15,
        defense: 14,
        speed: 13,
        special: 12,
    };
    assert_eq!(record.ivs, dvs.as_array());

    let mut base = species::by_national(PIKACHU).unwrap().base;
    let special = species::gen1_special(PIKACHU).unwrap();
    base.sp_attack = special;
    base.sp_defense = special;
    let expected = stats::derive_gen12_stats(&base, dvs, [0; 6], 50);
    assert_eq!(record.stats, expected);
    assert_eq!(record.stats.sp_attack, record.stats.sp_defense);
    let growth = species::by_national(PIKACHU).unwrap().growth;
    assert_eq!(record.experience, growth.exp_for_level(50));
}

#[test]
fn gen1_stat_experience_raises_stats() {
    let mut session = red_blue();
    session.set_level(0, 100).unwrap();
    let before = session.party().unwrap()[0].stats;
    session
        .set_evs(0, [65_535, 65_535, 0, 0, 0, 0])
        .unwrap();

    let record = session.party().unwrap().remove(0);
    assert_eq!(record.evs[..2], [65_535, 65_535]);
    assert_eq!(record.stats.hp, before.hp + 63);
    assert_eq!(record.stats.attack, before.attack + 63);
    assert_eq!(record.stats.defense, before.defense);
}

#[test]
fn gen1_species_edit_rewrites_list_and_types() {
    let mut session = red_blue();
    session.set_species(0, 6).unwrap();
    assert!(gen1::checksum_valid(session.bytes()));

    let record = session.party().unwrap().remove(0);
    assert_eq!(record.species, 6);
    assert_eq!(record.species_name, "Charizard");
    assert_eq!(record.level, 5);

    let err = session.set_species(0, 152).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
}

#[test]
fn gen1_remove_shifts_names_and_records() {
    let mut session = red_blue();
    add(&mut session, 1, 10, 1);
    add(&mut session, 4, 11, 2);
    add(&mut session, 7, 12, 3);
    session.remove_from_party(1).unwrap();

    let party = session.party().unwrap();
    let summary: Vec<(usize, u16, &str, u8)> = party
        .iter()
        .map(|r| (r.slot, r.species, r.nickname.as_str(), r.level))
        .collect();
    assert_eq!(
        summary,
        [
            (0, PIKACHU, "PIKACHU", 5),
            (1, 4, "CHARMANDER", 11),
            (2, 7, "SQUIRTLE", 12),
        ]
    );
    assert!(gen1::checksum_valid(session.bytes()));

    let err = session.remove_from_party(3).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::IndexOutOfRange);
}

#[test]
fn gen1_has_no_shiny_flag() {
    let mut session = red_blue();
    let before = session.bytes().to_vec();
    let err = session.set_shiny(0, true).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::UnsupportedOperation);
    assert_eq!(session.bytes(), before.as_slice());
}

#[test]
fn gen1_nickname_is_truncated_to_ten_characters() {
    let mut session = red_blue();
    session.set_nickname(0, "Sparky").unwrap();
    assert_eq!(session.party().unwrap()[0].nickname, "Sparky");
    session.set_nickname(0, "ABCDEFGHIJKLM").unwrap();
    assert_eq!(session.party().unwrap()[0].nickname, "ABCDEFGHIJ");
    assert!(gen1::checksum_valid(session.bytes()));
}

#[test]
fn gen2_shiny_toggle_rewrites_dvs() {
    let bytes = build_save(&SaveTemplate::GOLD_SILVER, &options(Some(CHIKORITA))).unwrap();
    let mut session = open(bytes, None);
    assert_eq!(session.game(), Game::GoldSilver);

    let record = session.party().unwrap().remove(0);
    assert_eq!(record.species, CHIKORITA);
    assert_eq!(record.held_item, Some(0));

    session.set_shiny(0, true).unwrap();
    let shiny = session.party().unwrap().remove(0);
    assert_eq!(shiny.shiny, Some(true));
    assert_eq!(shiny.ivs[2..5], [10, 10, 10]);
    assert!(gen2::checksum_valid(session.bytes(), Game::GoldSilver));

    session.set_shiny(0, false).unwrap();
    assert_eq!(session.party().unwrap()[0].shiny, Some(false));
}

#[test]
fn gen2_heal_restores_pp_and_hp() {
    let bytes = build_save(&SaveTemplate::CRYSTAL, &options(Some(CHIKORITA))).unwrap();
    let mut session = open(bytes, None);
    assert_eq!(session.game(), Game::Crystal);
    session.set_moves(0, &[33, 45, 75]).unwrap();
    session.heal(0).unwrap();

    let record = session.party().unwrap().remove(0);
    let pp: Vec<u8> = record.moves.iter().map(|m| m.pp).collect();
    assert_eq!(pp, [35, 40, 25]);
    assert_eq!(record.current_hp, record.stats.hp);
    assert!(gen2::checksum_valid(session.bytes(), Game::Crystal));
}

#[test]
fn gen2_party_fills_to_six() {
    let bytes = build_save(&SaveTemplate::CRYSTAL, &options(Some(CHIKORITA))).unwrap();
    let mut session = open(bytes, None);
    for seed in 0..5 {
        add(&mut session, 155, 5, seed);
    }
    let err = session
        .add_to_party(&NewRecord::new(158, 5))
        .unwrap_err();
    assert_eq!(err.code, CoreErrorCode::RosterFull);
    assert_eq!(session.party().unwrap().len(), 6);
}

#[test]
fn yellow_is_chosen_by_hint() {
    let bytes = build_save(&SaveTemplate::YELLOW, &options(Some(PIKACHU))).unwrap();
    assert_eq!(open(bytes.clone(), None).game(), Game::RedBlue);
    assert_eq!(open(bytes, Some(Game::Yellow)).game(), Game::Yellow);
}

#[test]
fn name_only_layout_is_read_only() {
    let mut bytes = vec![0u8; 32_768];
    let name = Charset::Gen12.encode("GARY", NAME_LEN);
    bytes[gen1::PLAYER_NAME..gen1::PLAYER_NAME + NAME_LEN].copy_from_slice(&name);

    let mut session = open(bytes, None);
    assert_eq!(session.info().trainer_name, "GARY");
    let caps = session.capabilities();
    assert!(caps.can_query);
    assert!(!caps.can_apply_edits);
    assert!(caps.issues.contains(&CapabilityIssue::LowConfidenceLayout));

    let err = session.set_level(0, 10).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::UnsupportedOperation);
}

#[test]
fn unusual_trainer_names_still_open() {
    let mut bytes = vec![0u8; 32_768];
    bytes[gen1::PLAYER_NAME..gen1::PLAYER_NAME + 3].copy_from_slice(&[0x7F, 0x7F, 0x50]);
    let session = open(bytes, None);
    assert_eq!(session.game(), Game::RedBlue);
    assert_eq!(session.info().trainer_name, "  ");
    assert!(session
        .capabilities()
        .issues
        .contains(&CapabilityIssue::LowConfidenceLayout));

    let mut bytes = build_save(&SaveTemplate::RED_BLUE, &options(Some(PIKACHU))).unwrap();
    bytes[gen1::PLAYER_NAME + 1] = 0xE1;
    gen1::RED_BLUE.checksum.write(&mut bytes);
    let session = open(bytes, None);
    assert_eq!(session.info().trainer_name, "A?H");
    assert!(session.capabilities().issues.is_empty());
}

#[test]
fn gen2_egg_keeps_its_marker_through_species_edit() {
    let mut bytes = build_save(&SaveTemplate::GOLD_SILVER, &options(Some(CHIKORITA))).unwrap();
    let marker = gen2::GOLD_SILVER.party.species_offset(0);
    bytes[marker] = 0xFD;
    gen2::GOLD_SILVER.checksum.write(&mut bytes);

    let mut session = open(bytes, None);
    assert_eq!(session.game(), Game::GoldSilver);
    assert!(session.party().unwrap()[0].is_egg);

    session.set_species(0, 155).unwrap();
    assert_eq!(session.bytes()[marker], 0xFD);
    let record = session.party().unwrap().remove(0);
    assert!(record.is_egg);
    assert_eq!(record.species, 155);
    assert!(gen2::checksum_valid(session.bytes(), Game::GoldSilver));
}
