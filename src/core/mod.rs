pub mod engine;
pub mod expression;
pub mod subset;

pub use crate::domain::model::{OutputFormat, Problem, SearchOutcome, SearchRequest, Strategy};
pub use crate::domain::ports::{ConfigProvider, OutcomeSink, ProblemSource, Searcher};
pub use crate::utils::error::Result;
