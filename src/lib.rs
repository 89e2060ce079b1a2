pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::Settings;

pub use adapters::{input::LineSource, output::WriterSink};
pub use core::{engine::SearchEngine, subset::exists_subset_summing_to};
pub use utils::error::{GroupSumError, Result};
