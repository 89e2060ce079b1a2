use crate::domain::model::{OutputFormat, Problem, SearchOutcome, SearchRequest};
use crate::utils::error::Result;

/// Decides whether some subset of positions sums to the target.
///
/// Every implementation must agree with the plain include-first recursion
/// on every input, including which witness it returns.
pub trait Searcher {
    fn exists(&self, problem: &Problem) -> bool;

    /// Positions of the first satisfying subset in include-first order.
    fn witness(&self, problem: &Problem) -> Option<Vec<usize>>;
}

pub trait ProblemSource {
    fn read_problem(&mut self) -> Result<Problem>;
}

pub trait OutcomeSink {
    fn write_outcome(
        &mut self,
        problem: &Problem,
        outcome: &SearchOutcome,
        format: OutputFormat,
    ) -> Result<()>;
}

pub trait ConfigProvider {
    fn search_request(&self) -> SearchRequest;
    fn output_format(&self) -> OutputFormat;
    fn monitoring_enabled(&self) -> bool;
}
