use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use pkmn_core::construct::{BuildOptions, SaveTemplate, build_save};
use pkmn_core::core_api::{Engine, Game};
use serde_json::Value;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pkmn-se"))
        .args(args)
        .output()
        .expect("failed to run pkmn-se CLI")
}

fn temp_output_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{}_{}.sav", std::process::id(), nanos))
}

/// Writes a freshly built save to a temp file and returns its path.
fn write_save(prefix: &str, template: &SaveTemplate, starter: u16) -> PathBuf {
    let options = BuildOptions {
        trainer_name: "MAY".to_string(),
        trainer_id: Some(2468),
        secret_id: Some(1357),
        money: 12_345,
        starter: Some(starter),
        seed: Some(5),
        ..BuildOptions::default()
    };
    let bytes = build_save(template, &options).expect("failed to build save");
    let path = temp_output_path(prefix);
    fs::write(&path, bytes).expect("failed to write save fixture");
    path
}

fn reopen(path: &Path) -> pkmn_core::core_api::Session {
    let bytes = fs::read(path).expect("failed to read written save");
    Engine::new()
        .open_bytes(bytes, None)
        .expect("failed to reopen written save")
}

#[test]
fn cli_prints_single_trainer_name_field() {
    let path = write_save("pkmn_cli_name", &SaveTemplate::EMERALD, 255);
    let path_str = path.to_string_lossy().to_string();
    let output = run_cli(&["--trainer-name", &path_str]);
    let _ = fs::remove_file(&path);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "trainer_name=MAY");
}

#[test]
fn cli_prints_multiple_requested_fields_in_fixed_order() {
    let path = write_save("pkmn_cli_fields", &SaveTemplate::CRYSTAL, 155);
    let path_str = path.to_string_lossy().to_string();
    let output = run_cli(&["--party", "--money", "--variant", &path_str]);
    let _ = fs::remove_file(&path);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "game=Crystal",
            "generation=2",
            "money=12345",
            "party=1:CYNDAQUIL (Cyndaquil) Lv5",
        ]
    );
}

#[test]
fn cli_json_field_mode_only_includes_requested_fields() {
    let path = write_save("pkmn_cli_json", &SaveTemplate::FIRERED_LEAFGREEN, 4);
    let path_str = path.to_string_lossy().to_string();
    let output = run_cli(&["--json", "--trainer-id", "--badges", &path_str]);
    let _ = fs::remove_file(&path);
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    let object = json.as_object().expect("top-level JSON object");
    assert_eq!(object.len(), 2);
    assert_eq!(json["trainer_id"], Value::from(2468));
    assert_eq!(json["badges"], Value::from(0));
}

#[test]
fn cli_default_json_carries_info_capabilities_and_roster() {
    let path = write_save("pkmn_cli_default_json", &SaveTemplate::RED_BLUE, 25);
    let path_str = path.to_string_lossy().to_string();
    let output = run_cli(&["--json", &path_str]);
    let _ = fs::remove_file(&path);
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(json["info"]["trainer_name"], Value::from("MAY"));
    assert_eq!(json["info"]["generation"], Value::from(1));
    assert_eq!(json["capabilities"]["can_apply_edits"], Value::from(true));
    assert_eq!(json["roster"]["party"][0]["species"], Value::from(25));
}

#[test]
fn cli_summary_lists_party() {
    let path = write_save("pkmn_cli_summary", &SaveTemplate::RUBY_SAPPHIRE, 258);
    let path_str = path.to_string_lossy().to_string();
    let output = run_cli(&[&path_str]);
    let _ = fs::remove_file(&path);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ruby/Sapphire (generation 3, 131072 bytes)"), "{stdout}");
    assert!(stdout.contains("Money: 12,345"), "{stdout}");
    assert!(stdout.contains(" ::: Party (1/6) :::"), "{stdout}");
    assert!(stdout.contains("1:MUDKIP (Mudkip) Lv5"), "{stdout}");
}

#[test]
fn cli_set_level_writes_output() {
    let path = write_save("pkmn_cli_level_in", &SaveTemplate::EMERALD, 252);
    let out = temp_output_path("pkmn_cli_level_out");
    let path_str = path.to_string_lossy().to_string();
    let out_str = out.to_string_lossy().to_string();

    let output = run_cli(&["--set-level", "42", "--output", &out_str, &path_str]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote save to"), "{stdout}");

    let session = reopen(&out);
    let _ = fs::remove_file(&path);
    let _ = fs::remove_file(&out);
    assert_eq!(session.party().unwrap()[0].level, 42);
    assert!(session.verify_checksums().iter().all(|r| r.valid));
}

#[test]
fn cli_applies_several_edits_in_one_run() {
    let path = write_save("pkmn_cli_multi_in", &SaveTemplate::GOLD_SILVER, 152);
    let out = temp_output_path("pkmn_cli_multi_out");
    let path_str = path.to_string_lossy().to_string();
    let out_str = out.to_string_lossy().to_string();

    let output = run_cli(&[
        "--set-nickname",
        "LEAFY",
        "--set-moves",
        "33,45,75",
        "--add-species",
        "158",
        "--add-level",
        "12",
        "--seed",
        "9",
        "--output",
        &out_str,
        &path_str,
    ]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let session = reopen(&out);
    let _ = fs::remove_file(&path);
    let _ = fs::remove_file(&out);
    let party = session.party().unwrap();
    assert_eq!(party.len(), 2);
    assert_eq!(party[0].nickname, "LEAFY");
    let move_ids: Vec<u16> = party[0].moves.iter().map(|m| m.id).collect();
    assert_eq!(move_ids, [33, 45, 75]);
    assert_eq!(party[1].species, 158);
    assert_eq!(party[1].level, 12);
}

#[test]
fn cli_new_builds_save_with_starter() {
    let out = temp_output_path("pkmn_cli_new");
    let out_str = out.to_string_lossy().to_string();
    let output = run_cli(&[
        "--new",
        "frlg",
        "--new-name",
        "LEAF",
        "--new-gender",
        "female",
        "--starter",
        "1",
        "--seed",
        "17",
        "--output",
        &out_str,
    ]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let session = reopen(&out);
    let _ = fs::remove_file(&out);
    assert_eq!(session.game(), Game::FireRedLeafGreen);
    assert_eq!(session.info().trainer_name, "LEAF");
    assert_eq!(session.info().trainer_gender.to_string(), "Female");
    let party = session.party().unwrap();
    assert_eq!(party.len(), 1);
    assert_eq!(party[0].species_name, "Bulbasaur");
}

#[test]
fn cli_verify_reports_checksums() {
    let path = write_save("pkmn_cli_verify", &SaveTemplate::YELLOW, 25);
    let path_str = path.to_string_lossy().to_string();
    let output = run_cli(&["--verify", "--game", "yellow", &path_str]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.trim_end().ends_with("ok"), "{stdout}");

    let mut bytes = fs::read(&path).unwrap();
    bytes[0x2F2C + 8] ^= 0xFF;
    fs::write(&path, bytes).unwrap();
    let output = run_cli(&["--verify", "--game", "y", &path_str]);
    let _ = fs::remove_file(&path);
    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MISMATCH"), "{stdout}");
}

#[test]
fn cli_edit_without_output_is_rejected() {
    let path = write_save("pkmn_cli_no_output", &SaveTemplate::EMERALD, 252);
    let before = fs::read(&path).unwrap();
    let path_str = path.to_string_lossy().to_string();
    let output = run_cli(&["--set-level", "50", &path_str]);
    let after = fs::read(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--output"), "{stderr}");
    assert_eq!(before, after);
}

#[test]
fn cli_rejected_edit_exits_with_error() {
    let path = write_save("pkmn_cli_bad_edit", &SaveTemplate::RED_BLUE, 25);
    let out = temp_output_path("pkmn_cli_bad_edit_out");
    let path_str = path.to_string_lossy().to_string();
    let out_str = out.to_string_lossy().to_string();
    let output = run_cli(&["--set-shiny", "true", "--output", &out_str, &path_str]);
    let _ = fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error applying shiny edit"), "{stderr}");
    assert!(!out.exists());
}

#[test]
fn cli_rejects_unknown_game_hint() {
    let output = run_cli(&["--game", "stadium", "missing.sav"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid game value 'stadium'"), "{stderr}");
}
