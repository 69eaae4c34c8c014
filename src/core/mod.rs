pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod ranking;
pub mod standings;

pub use crate::domain::model::{MatchResult, Outcome, StandingRow, TeamStanding};
pub use crate::domain::ports::{ConfigProvider, LineSource, Pipeline, ResultSink};
pub use crate::utils::error::Result;
