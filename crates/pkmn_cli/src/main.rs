use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use pkmn_core::construct::{BuildOptions, DEFAULT_STARTER_LEVEL, SaveTemplate};
use pkmn_core::core_api::{ChecksumReport, Engine, Game, NewRecord, Record, Session, StorageBox};
use pkmn_core::gender::Gender;
use serde_json::{Map as JsonMap, Value as JsonValue};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE.SAV", required_unless_present = "new")]
    path: Option<PathBuf>,
    #[arg(
        long,
        value_name = "rb|y|gs|c|rs|e|frlg",
        value_parser = parse_game
    )]
    game: Option<Game>,
    #[arg(long)]
    variant: bool,
    #[arg(long = "trainer-name")]
    trainer_name: bool,
    #[arg(long = "trainer-id")]
    trainer_id: bool,
    #[arg(long)]
    money: bool,
    #[arg(long)]
    badges: bool,
    #[arg(long = "play-time")]
    play_time: bool,
    #[arg(long)]
    party: bool,
    #[arg(long)]
    boxes: bool,
    #[arg(long)]
    json: bool,
    /// Compares stored and recomputed checksums.
    #[arg(long)]
    verify: bool,
    #[arg(short, long)]
    verbose: bool,
    /// Zero-based party slot the --set-* flags apply to.
    #[arg(long, default_value_t = 0)]
    slot: usize,
    #[arg(long = "set-level")]
    set_level: Option<u8>,
    #[arg(long = "set-ivs", value_name = "HP,ATK,DEF,SPE,SPA,SPD", value_parser = parse_ivs)]
    set_ivs: Option<[u8; 6]>,
    #[arg(long = "set-evs", value_name = "HP,ATK,DEF,SPE,SPA,SPD", value_parser = parse_evs)]
    set_evs: Option<[u16; 6]>,
    #[arg(long = "set-nickname")]
    set_nickname: Option<String>,
    #[arg(long = "set-species", value_name = "DEX")]
    set_species: Option<u16>,
    #[arg(long = "set-moves", value_name = "ID,...", value_delimiter = ',')]
    set_moves: Option<Vec<u16>>,
    #[arg(long = "set-shiny", value_name = "true|false")]
    set_shiny: Option<bool>,
    #[arg(long)]
    heal: bool,
    /// Removes the --slot party member.
    #[arg(long)]
    remove: bool,
    #[arg(long = "add-species", value_name = "DEX")]
    add_species: Option<u16>,
    #[arg(long = "add-level", default_value_t = DEFAULT_STARTER_LEVEL)]
    add_level: u8,
    /// Builds a fresh save for GAME instead of reading one.
    #[arg(
        long,
        value_name = "GAME",
        value_parser = parse_game,
        conflicts_with = "path"
    )]
    new: Option<Game>,
    #[arg(long = "new-name", default_value = "RED")]
    new_name: String,
    #[arg(long = "new-gender", value_parser = parse_gender, requires = "new")]
    new_gender: Option<Gender>,
    #[arg(long, value_name = "DEX", requires = "new")]
    starter: Option<u16>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Copy)]
struct FieldSelection {
    variant: bool,
    trainer_name: bool,
    trainer_id: bool,
    money: bool,
    badges: bool,
    play_time: bool,
    party: bool,
    boxes: bool,
}

impl FieldSelection {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            variant: cli.variant,
            trainer_name: cli.trainer_name,
            trainer_id: cli.trainer_id,
            money: cli.money,
            badges: cli.badges,
            play_time: cli.play_time,
            party: cli.party,
            boxes: cli.boxes,
        }
    }

    fn is_field_mode(&self) -> bool {
        self.variant
            || self.trainer_name
            || self.trainer_id
            || self.money
            || self.badges
            || self.play_time
            || self.party
            || self.boxes
    }

    fn selected_pairs(&self, session: &Session) -> Vec<(&'static str, String)> {
        let info = session.info();
        let mut out = Vec::new();

        if self.variant {
            out.push(("game", info.game.as_str().to_string()));
            out.push(("generation", info.generation.to_string()));
        }
        if self.trainer_name {
            out.push(("trainer_name", info.trainer_name.clone()));
        }
        if self.trainer_id {
            out.push(("trainer_id", format!("{:05}", info.trainer_id)));
        }
        if self.money {
            out.push(("money", info.money.to_string()));
        }
        if self.badges {
            out.push(("badges", info.badges.to_string()));
        }
        if self.play_time {
            out.push((
                "play_time",
                format_play_time(
                    info.play_time.hours,
                    info.play_time.minutes,
                    info.play_time.seconds,
                ),
            ));
        }
        if self.party {
            for record in party_or_exit(session) {
                out.push(("party", format_record_line(&record)));
            }
        }
        if self.boxes {
            for storage in boxes_or_exit(session) {
                out.push((
                    "box",
                    format!(
                        "{}={}/{}",
                        storage.index + 1,
                        storage.records.len(),
                        storage.capacity
                    ),
                ));
            }
        }

        out
    }

    fn selected_json(&self, session: &Session) -> JsonMap<String, JsonValue> {
        let info = session.info();
        let mut out = JsonMap::new();

        if self.variant {
            out.insert(
                "game".to_string(),
                JsonValue::String(info.game.as_str().to_string()),
            );
            out.insert("generation".to_string(), JsonValue::from(info.generation));
        }
        if self.trainer_name {
            out.insert(
                "trainer_name".to_string(),
                JsonValue::String(info.trainer_name.clone()),
            );
        }
        if self.trainer_id {
            out.insert("trainer_id".to_string(), JsonValue::from(info.trainer_id));
        }
        if self.money {
            out.insert("money".to_string(), JsonValue::from(info.money));
        }
        if self.badges {
            out.insert("badges".to_string(), JsonValue::from(info.badges));
        }
        if self.play_time {
            out.insert("play_time".to_string(), to_json(&info.play_time));
        }
        if self.party {
            out.insert("party".to_string(), to_json(&party_or_exit(session)));
        }
        if self.boxes {
            out.insert("boxes".to_string(), to_json(&boxes_or_exit(session)));
        }

        out
    }
}

#[derive(Debug, Default)]
struct RecordEdits {
    level: Option<u8>,
    ivs: Option<[u8; 6]>,
    evs: Option<[u16; 6]>,
    nickname: Option<String>,
    species: Option<u16>,
    moves: Option<Vec<u16>>,
    shiny: Option<bool>,
    heal: bool,
    remove: bool,
    add: Option<NewRecord>,
}

impl RecordEdits {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            level: cli.set_level,
            ivs: cli.set_ivs,
            evs: cli.set_evs,
            nickname: cli.set_nickname.clone(),
            species: cli.set_species,
            moves: cli.set_moves.clone(),
            shiny: cli.set_shiny,
            heal: cli.heal,
            remove: cli.remove,
            add: cli.add_species.map(|species| NewRecord {
                seed: cli.seed,
                ..NewRecord::new(species, cli.add_level)
            }),
        }
    }

    fn is_empty(&self) -> bool {
        self.level.is_none()
            && self.ivs.is_none()
            && self.evs.is_none()
            && self.nickname.is_none()
            && self.species.is_none()
            && self.moves.is_none()
            && self.shiny.is_none()
            && !self.heal
            && !self.remove
            && self.add.is_none()
    }

    /// Species first so level and stat edits see the new base stats; removal
    /// and insertion last so `slot` keeps pointing at the same member.
    fn apply(&self, session: &mut Session, slot: usize) {
        if let Some(species) = self.species {
            session
                .set_species(slot, species)
                .unwrap_or_else(|e| fail_edit("species", e));
        }
        if let Some(level) = self.level {
            session
                .set_level(slot, level)
                .unwrap_or_else(|e| fail_edit("level", e));
        }
        if let Some(ivs) = self.ivs {
            session
                .set_ivs(slot, ivs)
                .unwrap_or_else(|e| fail_edit("IV", e));
        }
        if let Some(evs) = self.evs {
            session
                .set_evs(slot, evs)
                .unwrap_or_else(|e| fail_edit("EV", e));
        }
        if let Some(nickname) = &self.nickname {
            session
                .set_nickname(slot, nickname)
                .unwrap_or_else(|e| fail_edit("nickname", e));
        }
        if let Some(moves) = &self.moves {
            session
                .set_moves(slot, moves)
                .unwrap_or_else(|e| fail_edit("moves", e));
        }
        if let Some(shiny) = self.shiny {
            session
                .set_shiny(slot, shiny)
                .unwrap_or_else(|e| fail_edit("shiny", e));
        }
        if self.heal {
            session.heal(slot).unwrap_or_else(|e| fail_edit("heal", e));
        }
        if self.remove {
            session
                .remove_from_party(slot)
                .unwrap_or_else(|e| fail_edit("remove", e));
        }
        if let Some(new) = &self.add {
            session
                .add_to_party(new)
                .unwrap_or_else(|e| fail_edit("add", e));
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let fields = FieldSelection::from_cli(&cli);
    let edits = RecordEdits::from_cli(&cli);
    let has_edits = !edits.is_empty();
    let writes = has_edits || cli.new.is_some();

    if writes && cli.output.is_none() {
        eprintln!("--set-*, --heal, --remove, --add-species and --new require --output <PATH>");
        process::exit(2);
    }
    if !writes && cli.output.is_some() {
        eprintln!("--output requires an edit flag or --new");
        process::exit(2);
    }

    let engine = Engine::new();
    let mut session = match cli.new {
        Some(game) => {
            let options = BuildOptions {
                trainer_name: cli.new_name.clone(),
                gender: cli.new_gender,
                starter: cli.starter,
                seed: cli.seed,
                ..BuildOptions::default()
            };
            engine
                .build(&SaveTemplate::for_game(game), &options)
                .unwrap_or_else(|e| {
                    eprintln!("Error building {} save", game.as_str());
                    eprintln!("  {e}");
                    process::exit(1);
                })
        }
        None => {
            // clap enforces the path when --new is absent
            let Some(path) = cli.path.as_ref() else {
                eprintln!("missing save file path");
                process::exit(2);
            };
            engine.open_path(path, cli.game).unwrap_or_else(|e| {
                eprintln!("Error parsing save file: {}", path.display());
                eprintln!("  {e}");
                process::exit(1);
            })
        }
    };

    edits.apply(&mut session, cli.slot);

    if let Some(out_path) = cli.output.as_ref() {
        fs::write(out_path, session.bytes()).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", out_path.display());
            process::exit(1);
        });
    }

    if cli.verify {
        let reports = session.verify_checksums();
        if cli.json {
            println!("{}", render_json(&to_json(&reports)));
        } else {
            print_checksums(&reports);
        }
        if reports.iter().any(|r| !r.valid) {
            process::exit(3);
        }
        return;
    }

    if cli.json {
        let json = if fields.is_field_mode() {
            JsonValue::Object(fields.selected_json(&session))
        } else {
            default_json(&session)
        };
        println!("{}", render_json(&json));
        return;
    }

    if fields.is_field_mode() {
        for (key, value) in fields.selected_pairs(&session) {
            println!("{key}={value}");
        }
        return;
    }

    if let Some(out_path) = cli.output.as_ref() {
        println!("Wrote save to {}", out_path.display());
        return;
    }

    print_summary(&session);
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter(Some("pkmn_core"), level)
        .init();
}

fn fail_edit(what: &str, error: pkmn_core::core_api::CoreError) -> ! {
    eprintln!("Error applying {what} edit: {error}");
    process::exit(1);
}

fn party_or_exit(session: &Session) -> Vec<Record> {
    session.party().unwrap_or_else(|e| {
        eprintln!("Error reading party: {e}");
        process::exit(1);
    })
}

fn boxes_or_exit(session: &Session) -> Vec<StorageBox> {
    session.boxes().unwrap_or_else(|e| {
        eprintln!("Error reading boxes: {e}");
        process::exit(1);
    })
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> JsonValue {
    serde_json::to_value(value).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    })
}

fn render_json(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    })
}

fn default_json(session: &Session) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("info".to_string(), to_json(session.info()));
    out.insert("capabilities".to_string(), to_json(session.capabilities()));
    let roster = match session.roster() {
        Ok(roster) => to_json(&roster),
        Err(e) => {
            log::warn!("roster unavailable: {e}");
            JsonValue::Null
        }
    };
    out.insert("roster".to_string(), roster);
    JsonValue::Object(out)
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn print_summary(session: &Session) {
    let info = session.info();

    println!(
        "{} (generation {}, {} bytes)",
        info.game.as_str(),
        info.generation,
        info.byte_len
    );
    println!(
        "Trainer: {}  ID: {:05}  Gender: {}",
        info.trainer_name, info.trainer_id, info.trainer_gender
    );
    println!(
        "Play time: {}  Money: {}  Badges: {}",
        format_play_time(
            info.play_time.hours,
            info.play_time.minutes,
            info.play_time.seconds
        ),
        format_number_with_commas(info.money),
        info.badges
    );
    if !session.capabilities().can_apply_edits {
        println!("Read-only: {:?}", session.capabilities().issues);
    }
    println!();

    match session.party() {
        Ok(party) => {
            println!(" ::: Party ({}/6) :::", party.len());
            for record in &party {
                print_record(record);
            }
        }
        Err(e) => println!(" ::: Party ::: unavailable ({e})"),
    }
    println!();

    match session.boxes() {
        Ok(boxes) => {
            println!(" ::: Boxes :::");
            for storage in boxes.iter().filter(|b| !b.records.is_empty()) {
                println!(
                    "  Box {} ({}/{})",
                    storage.index + 1,
                    storage.records.len(),
                    storage.capacity
                );
                for record in &storage.records {
                    println!("    {}", format_record_line(record));
                }
            }
        }
        Err(e) => println!(" ::: Boxes ::: unavailable ({e})"),
    }
}

fn print_record(record: &Record) {
    println!("  {}", format_record_line(record));
    let stats = &record.stats;
    println!(
        "     HP {}/{}  Atk {}  Def {}  Spe {}  SpA {}  SpD {}",
        record.current_hp,
        stats.hp,
        stats.attack,
        stats.defense,
        stats.speed,
        stats.sp_attack,
        stats.sp_defense
    );
    let moves = record
        .moves
        .iter()
        .map(|m| format!("{} ({})", m.name, m.pp))
        .collect::<Vec<_>>()
        .join(", ");
    println!("     Moves: {}", if moves.is_empty() { "none" } else { moves.as_str() });
    println!(
        "     IVs: {}  EVs: {}",
        join_values(&record.ivs),
        join_values(&record.evs)
    );
    let mut extras = Vec::new();
    if let Some(nature) = &record.nature {
        extras.push(format!("Nature: {nature}"));
    }
    if record.shiny == Some(true) {
        extras.push("Shiny".to_string());
    }
    if record.is_egg {
        extras.push("Egg".to_string());
    }
    extras.push(format!("OT: {} ({:05})", record.ot_name, record.ot_id));
    println!("     {}", extras.join("  "));
}

fn print_checksums(reports: &[ChecksumReport]) {
    for report in reports {
        println!(
            "{:<24} @{:#07x}  stored={:#06x} computed={:#06x}  {}",
            report.region,
            report.offset,
            report.stored,
            report.computed,
            if report.valid { "ok" } else { "MISMATCH" }
        );
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn parse_game(value: &str) -> Result<Game, String> {
    Game::parse(value).ok_or_else(|| {
        format!("invalid game value '{value}', expected one of: rb, y, gs, c, rs, e, frlg")
    })
}

fn parse_gender(value: &str) -> Result<Gender, String> {
    Gender::parse(value)
        .ok_or_else(|| format!("invalid gender '{value}', expected male or female"))
}

fn parse_six<T: std::str::FromStr>(value: &str) -> Result<[T; 6], String> {
    let parts = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<T>()
                .map_err(|_| format!("'{part}' is not a number"))
        })
        .collect::<Result<Vec<T>, String>>()?;
    let count = parts.len();
    parts
        .try_into()
        .map_err(|_| format!("expected 6 comma-separated values, got {count}"))
}

fn parse_ivs(value: &str) -> Result<[u8; 6], String> {
    parse_six(value)
}

fn parse_evs(value: &str) -> Result<[u16; 6], String> {
    parse_six(value)
}

fn format_record_line(record: &Record) -> String {
    format!(
        "{}:{} ({}) Lv{}",
        record.slot + 1,
        record.nickname,
        record.species_name,
        record.level
    )
}

fn format_play_time(hours: u16, minutes: u8, seconds: u8) -> String {
    format!("{hours}:{minutes:02}:{seconds:02}")
}

fn join_values<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

fn format_number_with_commas(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
