use crate::domain::model::Problem;
use crate::domain::ports::ProblemSource;
use crate::utils::error::{GroupSumError, Result};
use std::io::BufRead;

/// Reads a problem as two text lines: the sequence, then the target.
pub struct LineSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self, what: &str) -> Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(GroupSumError::MissingInput {
                what: what.to_string(),
            });
        }
        Ok(line)
    }
}

impl<R: BufRead> ProblemSource for LineSource<R> {
    fn read_problem(&mut self) -> Result<Problem> {
        let sequence_line = self.next_line("sequence line")?;
        let target_line = self.next_line("target line")?;

        let sequence = parse_sequence(&sequence_line)?;
        let target = parse_target(&target_line)?;

        tracing::debug!("Read sequence of {} values, target {}", sequence.len(), target);
        Ok(Problem::new(sequence, target))
    }
}

/// Parses whitespace-separated integers. A blank line is the empty sequence.
pub fn parse_sequence(line: &str) -> Result<Vec<i64>> {
    line.split_whitespace()
        .enumerate()
        .map(|(position, token)| parse_token(1, position, token))
        .collect()
}

pub fn parse_target(line: &str) -> Result<i64> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [token] => parse_token(2, 0, token),
        other => Err(GroupSumError::InvalidTarget { found: other.len() }),
    }
}

fn parse_token(line: usize, position: usize, token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| GroupSumError::ParseError {
        line,
        token: token.to_string(),
        position,
    })
}
