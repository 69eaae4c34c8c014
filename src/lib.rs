pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CsvSink, FileSource, JsonSink, StdinSource, TextSink};
pub use config::CliConfig;
pub use core::{engine::LeagueEngine, pipeline::StandingsPipeline};
pub use utils::error::{LeagueError, Result};
