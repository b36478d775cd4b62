//! Format detection over raw save bytes.
//!
//! The byte length picks the family: 32 KiB is generation 1 or 2, 64 or 128
//! KiB is generation 3. Within the 32 KiB family a layout whose stored
//! checksum validates wins outright; otherwise a layout with any trainer name
//! is taken and flagged as low confidence, preferring one whose name is
//! plausible.

use log::{debug, warn};

use crate::core_api::{CapabilityIssue, CoreError, CoreErrorCode, Game};
use crate::flat;
use crate::gen1;
use crate::gen2;
use crate::gen3;
use crate::gen3::sections::{SectionTable, TRAINER_INFO};
use crate::text::Charset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub game: Game,
    pub issues: Vec<CapabilityIssue>,
}

impl Detection {
    fn confident(game: Game) -> Self {
        Self {
            game,
            issues: Vec::new(),
        }
    }

    fn low_confidence(game: Game) -> Self {
        Self {
            game,
            issues: vec![CapabilityIssue::LowConfidenceLayout],
        }
    }

    pub fn generation(&self) -> u8 {
        self.game.generation()
    }
}

fn unrecognized(message: impl Into<String>) -> CoreError {
    CoreError::new(CoreErrorCode::FormatUnrecognized, message)
}

/// A candidate layout is accepted when its trainer name decodes to anything
/// at all. Unknown bytes count, they decode to the placeholder.
pub fn name_present(charset: Charset, data: &[u8], offset: usize, max_units: usize) -> bool {
    !charset.decode(data, offset, max_units).is_empty()
}

/// Stricter than [`name_present`]: every byte is in the charset's table and at
/// least one character is visible. Only used to rank candidates.
pub fn plausible_name(charset: Charset, data: &[u8], offset: usize, max_units: usize) -> bool {
    let Some(tail) = data.get(offset..) else {
        return false;
    };
    let units: Vec<u8> = tail
        .iter()
        .take(max_units)
        .take_while(|&&b| b != charset.terminator())
        .copied()
        .collect();
    units.iter().all(|&b| charset.decode_byte(b).is_some())
        && units
            .iter()
            .filter_map(|&b| charset.decode_byte(b))
            .any(|ch| !ch.is_whitespace())
}

pub fn detect(data: &[u8]) -> Result<Detection, CoreError> {
    match data.len() {
        flat::SAVE_LEN => detect_flat(data),
        gen3::SAVE_LEN | gen3::HALF_SAVE_LEN => detect_gen3(data),
        len => Err(unrecognized(format!("no save format is {len} bytes long"))),
    }
}

/// Like [`detect`], but a hint picks the variant inside the detected size
/// family. Yellow is only ever chosen this way. A hint from the wrong family
/// is ignored.
pub fn detect_with_hint(data: &[u8], hint: Option<Game>) -> Result<Detection, CoreError> {
    let Some(hint) = hint else {
        return detect(data);
    };
    match (hint.generation(), data.len()) {
        (1 | 2, flat::SAVE_LEN) => {
            let layout = match hint.generation() {
                1 => gen1::layout(hint),
                _ => gen2::layout(hint),
            };
            debug!("using hinted layout {}", hint.as_str());
            if layout.checksum.is_valid(data) {
                Ok(Detection::confident(hint))
            } else {
                Ok(Detection::low_confidence(hint))
            }
        }
        (3, _) => {
            let detected = detect(data)?;
            if detected.game != hint {
                debug!(
                    "hint {} ignored, game code says {}",
                    hint.as_str(),
                    detected.game.as_str()
                );
            }
            Ok(detected)
        }
        _ => {
            warn!("hint {} does not fit a {}-byte save", hint.as_str(), data.len());
            detect(data)
        }
    }
}

fn detect_flat(data: &[u8]) -> Result<Detection, CoreError> {
    let name_len = flat::list::NAME_LEN;
    let gen1_name = name_present(Charset::Gen12, data, gen1::PLAYER_NAME, name_len);
    let gen2_name = name_present(Charset::Gen12, data, gen2::PLAYER_NAME, name_len);

    if gen1_name && gen1::checksum_valid(data) {
        debug!("generation 1 checksum matches");
        return Ok(Detection::confident(Game::RedBlue));
    }
    for game in [Game::Crystal, Game::GoldSilver] {
        if gen2_name && gen2::checksum_valid(data, game) {
            debug!("{} checksum matches", game.as_str());
            return Ok(Detection::confident(game));
        }
    }

    let candidates = [
        (Game::RedBlue, gen1_name, gen1::PLAYER_NAME),
        (Game::GoldSilver, gen2_name, gen2::PLAYER_NAME),
    ];
    let present = || candidates.iter().filter(|&&(_, named, _)| named);
    let guess = present()
        .find(|&&(_, _, offset)| plausible_name(Charset::Gen12, data, offset, name_len))
        .or_else(|| present().next());
    match guess {
        Some(&(game, _, _)) => {
            warn!(
                "no checksum matches, guessing {} from the trainer name",
                game.as_str()
            );
            Ok(Detection::low_confidence(game))
        }
        None => Err(unrecognized("no trainer name at any 32 KiB layout offset")),
    }
}

fn detect_gen3(data: &[u8]) -> Result<Detection, CoreError> {
    let table = SectionTable::locate(data).ok_or_else(|| unrecognized("no save slot fits"))?;
    let trainer = table
        .offset(TRAINER_INFO)
        .ok_or_else(|| unrecognized("active slot has no trainer section"))?;
    if !name_present(Charset::Gen3, data, trainer, gen3::PLAYER_NAME_LEN) {
        return Err(unrecognized("no trainer name in the trainer section"));
    }

    let game = gen3::game_from_trainer_section(data, trainer);
    debug!("generation 3 save, game code says {}", game.as_str());
    let mut detection = Detection::confident(game);
    if !table.is_complete() {
        warn!("slot {} is missing sections", table.slot);
        detection.issues.push(CapabilityIssue::IncompleteSectionTable);
    }
    Ok(detection)
}
