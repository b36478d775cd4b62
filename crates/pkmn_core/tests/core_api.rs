use pkmn_core::checksum::update_checksum;
use pkmn_core::construct::{BuildOptions, SaveTemplate, build_save};
use pkmn_core::core_api::{CapabilityIssue, CoreErrorCode, Engine, Game, Platform};
use pkmn_core::gen3::sections::{SECTION_ID_OFFSET, SECTION_SIZE, SectionTable, TRAINER_INFO};
use pkmn_core::gender::Gender;
use pkmn_core::reader::write_u16_le;
use serde_json::Value;

const PIKACHU: u16 = 25;
const TOTODILE: u16 = 158;
const MUDKIP: u16 = 258;

fn options(starter: u16) -> BuildOptions {
    BuildOptions {
        trainer_name: "BRENDAN".to_string(),
        trainer_id: Some(4242),
        secret_id: Some(1717),
        starter: Some(starter),
        seed: Some(11),
        ..BuildOptions::default()
    }
}

#[test]
fn engine_builds_and_opens_every_game() {
    let engine = Engine::new();
    for game in Game::ALL {
        let session = engine
            .build(&SaveTemplate::for_game(game), &options(PIKACHU))
            .unwrap_or_else(|e| panic!("failed to build {game:?}: {e}"));

        assert_eq!(session.game(), game);
        assert_eq!(session.info().generation, game.generation());
        assert_eq!(session.info().platform, game.platform());
        let caps = session.capabilities();
        assert!(caps.can_query);
        assert!(caps.can_apply_edits, "{game:?}: {:?}", caps.issues);
        assert!(caps.issues.is_empty(), "{game:?}: {:?}", caps.issues);
        assert!(
            session.verify_checksums().iter().all(|r| r.valid),
            "{game:?}"
        );
    }
}

#[test]
fn engine_auto_detects_emerald() {
    let bytes = build_save(&SaveTemplate::EMERALD, &options(MUDKIP)).unwrap();
    let session = Engine::new()
        .open_bytes(bytes, None)
        .expect("failed to open Emerald save");

    let info = session.info();
    assert_eq!(session.game(), Game::Emerald);
    assert_eq!(info.platform, Platform::GameBoyAdvance);
    assert_eq!(info.trainer_name, "BRENDAN");
    assert_eq!(info.trainer_id, 4242);
    assert_eq!(info.secret_id, Some(1717));
    assert_eq!(info.trainer_gender, Gender::Male);
    assert_eq!(info.badges, 0);

    let party = session.party().unwrap();
    assert_eq!(party.len(), 1);
    assert_eq!(party[0].species_name, "Mudkip");
    assert_eq!(party[0].ot_name, "BRENDAN");
    assert!(party[0].nature.is_some());
}

#[test]
fn unknown_length_is_unrecognized() {
    let err = Engine::new()
        .open_bytes(vec![0u8; 1234], None)
        .unwrap_err();
    assert_eq!(err.code, CoreErrorCode::FormatUnrecognized);
    assert!(
        err.message.starts_with("unrecognized save file"),
        "{}",
        err.message
    );
}

#[test]
fn blank_gba_image_is_unrecognized() {
    let err = Engine::new()
        .open_bytes(vec![0xFFu8; 0x20000], None)
        .unwrap_err();
    assert_eq!(err.code, CoreErrorCode::FormatUnrecognized);
}

#[test]
fn out_of_table_trainer_name_still_opens() {
    let mut bytes = build_save(&SaveTemplate::EMERALD, &options(MUDKIP)).unwrap();
    let trainer = SectionTable::locate(&bytes)
        .and_then(|table| table.offset(TRAINER_INFO))
        .unwrap();
    bytes[trainer + 1] = 0x01;
    update_checksum(&mut bytes, trainer);

    let session = Engine::new().open_bytes(bytes, None).unwrap();
    assert_eq!(session.game(), Game::Emerald);
    assert_eq!(session.info().trainer_name, "B?ENDAN");
    assert!(session.capabilities().can_apply_edits);
}

#[test]
fn hint_from_other_family_is_ignored() {
    let bytes = build_save(&SaveTemplate::FIRERED_LEAFGREEN, &options(MUDKIP)).unwrap();
    let session = Engine::new()
        .open_bytes(bytes, Some(Game::Crystal))
        .unwrap();
    assert_eq!(session.game(), Game::FireRedLeafGreen);
}

#[test]
fn half_size_image_opens_first_slot() {
    let mut bytes = build_save(&SaveTemplate::RUBY_SAPPHIRE, &options(MUDKIP)).unwrap();
    bytes.truncate(0x10000);
    let session = Engine::new().open_bytes(bytes, None).unwrap();
    assert_eq!(session.game(), Game::RubySapphire);
    assert_eq!(session.info().byte_len, 0x10000);
    assert_eq!(session.party().unwrap().len(), 1);
}

#[test]
fn missing_team_section_is_reported() {
    let mut bytes = build_save(&SaveTemplate::EMERALD, &options(MUDKIP)).unwrap();
    write_u16_le(&mut bytes, SECTION_SIZE + SECTION_ID_OFFSET, 0x7F);

    let mut session = Engine::new().open_bytes(bytes, None).unwrap();
    assert!(session
        .capabilities()
        .issues
        .contains(&CapabilityIssue::IncompleteSectionTable));
    assert_eq!(session.info().trainer_name, "BRENDAN");

    let err = session.party().unwrap_err();
    assert_eq!(err.code, CoreErrorCode::SectionMissing);
    let err = session.set_level(0, 20).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::SectionMissing);
}

#[test]
fn edit_errors_name_the_operation() {
    let mut session = Engine::new()
        .build(&SaveTemplate::CRYSTAL, &options(TOTODILE))
        .unwrap();
    let err = session.set_level(0, 0).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
    assert!(err.message.starts_with("failed to set level"), "{}", err.message);

    let err = session.heal(4).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::IndexOutOfRange);

    let err = session.remove_from_party(0).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
}

#[test]
fn edits_survive_reopening_the_buffer() {
    let engine = Engine::new();
    let mut session = engine
        .build(&SaveTemplate::FIRERED_LEAFGREEN, &options(MUDKIP))
        .unwrap();
    session.set_level(0, 36).unwrap();
    session.set_nickname(0, "Swampy").unwrap();

    let reopened = engine.open_bytes(session.into_bytes(), None).unwrap();
    let party = reopened.party().unwrap();
    assert_eq!(party[0].level, 36);
    assert_eq!(party[0].nickname, "Swampy");
    assert!(reopened.verify_checksums().iter().all(|r| r.valid));
}

#[test]
fn roster_serializes_to_json() {
    let session = Engine::new()
        .build(&SaveTemplate::GOLD_SILVER, &options(TOTODILE))
        .unwrap();
    let roster = serde_json::to_value(session.roster().unwrap()).unwrap();
    let party = roster["party"].as_array().unwrap();
    assert_eq!(party.len(), 1);
    assert_eq!(party[0]["species"], Value::from(TOTODILE));
    assert_eq!(party[0]["nickname"], Value::from("TOTODILE"));
    assert_eq!(roster["boxes"][0]["capacity"], Value::from(20));

    let info = serde_json::to_value(session.info()).unwrap();
    assert_eq!(info["trainer_name"], Value::from("BRENDAN"));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("pkmn_core_missing_save_does_not_exist.sav");
    let err = Engine::new().open_path(&path, None).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::Io);
    assert!(err.message.starts_with("failed to read"), "{}", err.message);
}
