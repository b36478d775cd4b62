pub mod checksum;
pub mod construct;
pub mod core_api;
pub mod detect;
pub mod flat;
pub mod gen1;
pub mod gen2;
pub mod gen3;
pub mod gender;
pub mod moves;
pub mod reader;
pub mod species;
pub mod stats;
pub mod text;
