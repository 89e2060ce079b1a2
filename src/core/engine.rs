use crate::core::subset::{
    all_subsets_summing_to, MemoizedSearcher, RecursiveSearcher, WorklistSearcher,
};
use crate::domain::model::{OutputFormat, Problem, SearchOutcome, SearchRequest, Strategy};
use crate::domain::ports::{OutcomeSink, ProblemSource, Searcher};
use crate::utils::error::{GroupSumError, Result};
use crate::utils::monitor::SystemMonitor;

pub fn searcher_for(strategy: Strategy) -> Box<dyn Searcher> {
    match strategy {
        Strategy::Recursive => Box::new(RecursiveSearcher),
        Strategy::Iterative => Box::new(WorklistSearcher),
        Strategy::Memoized => Box::new(MemoizedSearcher),
    }
}

/// Longest sequence the call-stack strategies accept.
pub const MAX_DEPTH_LIMIT: usize = 50_000;

// Stack reserved per recursion level, sized for unoptimized builds.
const STACK_BYTES_PER_LEVEL: usize = 2 * 1024;
const STACK_BASE_BYTES: usize = 1024 * 1024;

/// Runs the search for one problem under `request`.
///
/// The call-stack strategies refuse sequences longer than
/// `request.max_depth` and run on a worker thread whose stack is sized for
/// the sequence length. The iterative strategy has no depth limit.
pub fn solve(problem: &Problem, request: &SearchRequest) -> Result<SearchOutcome> {
    if request.strategy == Strategy::Iterative {
        return Ok(search(problem, request));
    }

    if problem.len() > request.max_depth {
        return Err(GroupSumError::DepthLimitExceeded {
            length: problem.len(),
            max_depth: request.max_depth,
        });
    }

    let stack_size = STACK_BASE_BYTES + problem.len() * STACK_BYTES_PER_LEVEL;
    tracing::debug!("Running {:?} search with {} byte stack", request.strategy, stack_size);

    std::thread::scope(|scope| {
        let worker = std::thread::Builder::new()
            .name("group-sum-search".to_string())
            .stack_size(stack_size)
            .spawn_scoped(scope, || search(problem, request))?;
        match worker.join() {
            Ok(outcome) => Ok(outcome),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    })
}

fn search(problem: &Problem, request: &SearchRequest) -> SearchOutcome {
    let searcher = searcher_for(request.strategy);
    let mut outcome = if request.witness {
        let witness = searcher.witness(problem);
        SearchOutcome {
            found: witness.is_some(),
            witness,
            all: None,
        }
    } else {
        SearchOutcome::found(searcher.exists(problem))
    };

    if request.all {
        outcome.all = Some(all_subsets_summing_to(&problem.sequence, problem.target));
    }

    outcome
}

/// Read, search, write: one problem per run.
pub struct SearchEngine<S: ProblemSource, O: OutcomeSink> {
    source: S,
    sink: O,
    monitor: SystemMonitor,
}

impl<S: ProblemSource, O: OutcomeSink> SearchEngine<S, O> {
    pub fn new(source: S, sink: O) -> Self {
        Self::new_with_monitoring(source, sink, false)
    }

    pub fn new_with_monitoring(source: S, sink: O, monitor_enabled: bool) -> Self {
        Self {
            source,
            sink,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&mut self, request: &SearchRequest, format: OutputFormat) -> Result<SearchOutcome> {
        tracing::debug!("Reading problem...");
        let problem = self.source.read_problem()?;
        self.monitor.log_stats("Input");

        tracing::debug!(
            "Searching {} values for target {} with {:?} strategy",
            problem.len(),
            problem.target,
            request.strategy
        );
        let outcome = solve(&problem, request)?;
        self.monitor.log_stats("Search");
        tracing::debug!("Search finished: found = {}", outcome.found);

        self.sink.write_outcome(&problem, &outcome, format)?;
        self.monitor.log_final_stats();

        Ok(outcome)
    }
}
