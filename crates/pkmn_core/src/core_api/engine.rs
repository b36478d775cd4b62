use std::fs;
use std::path::Path;

use log::debug;

use crate::construct::{self, BuildOptions, SaveTemplate};
use crate::detect::{self, Detection};
use crate::flat;
use crate::gen1;
use crate::gen2;
use crate::gen3;

use super::error::{CoreError, CoreErrorCode};
use super::types::{
    Capabilities, CapabilityIssue, ChecksumReport, Game, NewRecord, Record, Roster, SaveInfo,
    StorageBox,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

#[derive(Debug)]
enum LoadedDocument {
    Flat(Box<flat::Document>),
    Gen3(Box<gen3::Document>),
}

/// An edit session over one owned save buffer.
#[derive(Debug)]
pub struct Session {
    game: Game,
    info: SaveInfo,
    capabilities: Capabilities,
    document: LoadedDocument,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Takes ownership of `bytes` for the lifetime of the session.
    pub fn open_bytes(&self, bytes: Vec<u8>, hint: Option<Game>) -> Result<Session, CoreError> {
        let detection = detect::detect_with_hint(&bytes, hint).map_err(|e| {
            CoreError::new(e.code, format!("unrecognized save file: {}", e.message))
        })?;
        let Detection { game, issues } = detection;

        let document = match game.generation() {
            1 => LoadedDocument::Flat(Box::new(flat::Document::parse(bytes, gen1::layout(game))?)),
            2 => LoadedDocument::Flat(Box::new(flat::Document::parse(bytes, gen2::layout(game))?)),
            _ => LoadedDocument::Gen3(Box::new(gen3::Document::parse(bytes)?)),
        };

        let capabilities = if issues.contains(&CapabilityIssue::LowConfidenceLayout) {
            Capabilities::read_only(issues)
        } else {
            Capabilities::editable(issues)
        };
        debug!("opened {} save, {:?}", game.as_str(), capabilities);

        let info = match &document {
            LoadedDocument::Flat(doc) => doc.info(),
            LoadedDocument::Gen3(doc) => doc.info(),
        };
        Ok(Session {
            game,
            info,
            capabilities,
            document,
        })
    }

    pub fn open_path(&self, path: &Path, hint: Option<Game>) -> Result<Session, CoreError> {
        let bytes = fs::read(path).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("failed to read {}: {e}", path.display()),
            )
        })?;
        self.open_bytes(bytes, hint)
    }

    /// Builds a fresh save and opens it.
    pub fn build(
        &self,
        template: &SaveTemplate,
        options: &BuildOptions,
    ) -> Result<Session, CoreError> {
        let bytes = construct::build_save(template, options)?;
        self.open_bytes(bytes, Some(template.game))
    }
}

fn context(what: &'static str) -> impl FnOnce(CoreError) -> CoreError {
    move |e| CoreError::new(e.code, format!("failed to {what}: {}", e.message))
}

impl Session {
    pub fn game(&self) -> Game {
        self.game
    }

    pub fn info(&self) -> &SaveInfo {
        &self.info
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn party(&self) -> Result<Vec<Record>, CoreError> {
        match &self.document {
            LoadedDocument::Flat(doc) => Ok(doc.party()),
            LoadedDocument::Gen3(doc) => doc.party(),
        }
    }

    pub fn boxes(&self) -> Result<Vec<StorageBox>, CoreError> {
        match &self.document {
            LoadedDocument::Flat(doc) => Ok(doc.boxes()),
            LoadedDocument::Gen3(doc) => doc.boxes(),
        }
    }

    pub fn roster(&self) -> Result<Roster, CoreError> {
        Ok(Roster {
            party: self.party()?,
            boxes: self.boxes()?,
        })
    }

    /// Compares every stored checksum with a fresh computation. Opening a
    /// save never does this on its own.
    pub fn verify_checksums(&self) -> Vec<ChecksumReport> {
        match &self.document {
            LoadedDocument::Flat(doc) => doc.verify_checksums(),
            LoadedDocument::Gen3(doc) => doc.verify_checksums(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.document {
            LoadedDocument::Flat(doc) => doc.bytes(),
            LoadedDocument::Gen3(doc) => doc.bytes(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self.document {
            LoadedDocument::Flat(doc) => doc.into_bytes(),
            LoadedDocument::Gen3(doc) => doc.into_bytes(),
        }
    }

    fn ensure_editable(&self) -> Result<(), CoreError> {
        if self.capabilities.can_apply_edits {
            return Ok(());
        }
        Err(CoreError::new(
            CoreErrorCode::UnsupportedOperation,
            format!(
                "{} save is read-only: {:?}",
                self.game.as_str(),
                self.capabilities.issues
            ),
        ))
    }

    fn refresh_info(&mut self) {
        self.info = match &self.document {
            LoadedDocument::Flat(doc) => doc.info(),
            LoadedDocument::Gen3(doc) => doc.info(),
        };
    }

    pub fn set_level(&mut self, slot: usize, level: u8) -> Result<(), CoreError> {
        self.ensure_editable()?;
        match &mut self.document {
            LoadedDocument::Flat(doc) => doc.set_level(slot, level),
            LoadedDocument::Gen3(doc) => doc.set_level(slot, level),
        }
        .map_err(context("set level"))
    }

    pub fn set_ivs(&mut self, slot: usize, ivs: [u8; 6]) -> Result<(), CoreError> {
        self.ensure_editable()?;
        match &mut self.document {
            LoadedDocument::Flat(doc) => doc.set_ivs(slot, ivs),
            LoadedDocument::Gen3(doc) => doc.set_ivs(slot, ivs),
        }
        .map_err(context("set IVs"))
    }

    pub fn set_evs(&mut self, slot: usize, evs: [u16; 6]) -> Result<(), CoreError> {
        self.ensure_editable()?;
        match &mut self.document {
            LoadedDocument::Flat(doc) => doc.set_evs(slot, evs),
            LoadedDocument::Gen3(doc) => doc.set_evs(slot, evs),
        }
        .map_err(context("set EVs"))
    }

    pub fn set_nickname(&mut self, slot: usize, nickname: &str) -> Result<(), CoreError> {
        self.ensure_editable()?;
        match &mut self.document {
            LoadedDocument::Flat(doc) => doc.set_nickname(slot, nickname),
            LoadedDocument::Gen3(doc) => doc.set_nickname(slot, nickname),
        }
        .map_err(context("set nickname"))
    }

    pub fn set_species(&mut self, slot: usize, species: u16) -> Result<(), CoreError> {
        self.ensure_editable()?;
        match &mut self.document {
            LoadedDocument::Flat(doc) => doc.set_species(slot, species),
            LoadedDocument::Gen3(doc) => doc.set_species(slot, species),
        }
        .map_err(context("set species"))
    }

    pub fn set_moves(&mut self, slot: usize, moves: &[u16]) -> Result<(), CoreError> {
        self.ensure_editable()?;
        match &mut self.document {
            LoadedDocument::Flat(doc) => doc.set_moves(slot, moves),
            LoadedDocument::Gen3(doc) => doc.set_moves(slot, moves),
        }
        .map_err(context("set moves"))
    }

    pub fn set_shiny(&mut self, slot: usize, shiny: bool) -> Result<(), CoreError> {
        self.ensure_editable()?;
        match &mut self.document {
            LoadedDocument::Flat(doc) => doc.set_shiny(slot, shiny),
            LoadedDocument::Gen3(doc) => doc.set_shiny(slot, shiny),
        }
        .map_err(context("set shiny"))
    }

    pub fn heal(&mut self, slot: usize) -> Result<(), CoreError> {
        self.ensure_editable()?;
        match &mut self.document {
            LoadedDocument::Flat(doc) => doc.heal(slot),
            LoadedDocument::Gen3(doc) => doc.heal(slot),
        }
        .map_err(context("heal"))
    }

    /// Appends a fresh record to the party and returns its slot.
    pub fn add_to_party(&mut self, new: &NewRecord) -> Result<usize, CoreError> {
        self.ensure_editable()?;
        let slot = match &mut self.document {
            LoadedDocument::Flat(doc) => doc.add_to_party(new),
            LoadedDocument::Gen3(doc) => doc.add_to_party(new),
        }
        .map_err(context("add to party"))?;
        self.refresh_info();
        Ok(slot)
    }

    pub fn remove_from_party(&mut self, slot: usize) -> Result<(), CoreError> {
        self.ensure_editable()?;
        match &mut self.document {
            LoadedDocument::Flat(doc) => doc.remove_from_party(slot),
            LoadedDocument::Gen3(doc) => doc.remove_from_party(slot),
        }
        .map_err(context("remove from party"))?;
        self.refresh_info();
        Ok(())
    }
}
