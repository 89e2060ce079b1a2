use crate::domain::model::{OutputFormat, Problem, SearchOutcome};
use crate::domain::ports::OutcomeSink;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// Renders outcomes to any writer, normally stdout.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    sequence: &'a [i64],
    target: i64,
    #[serde(flatten)]
    outcome: &'a SearchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    witness_values: Option<Vec<i64>>,
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl<W: Write> OutcomeSink for WriterSink<W> {
    fn write_outcome(
        &mut self,
        problem: &Problem,
        outcome: &SearchOutcome,
        format: OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Plain => {
                writeln!(self.writer, "{}", outcome.found)?;
                if let Some(witness) = &outcome.witness {
                    writeln!(self.writer, "{}", join(&problem.values_at(witness)))?;
                }
                if let Some(all) = &outcome.all {
                    for subset in all {
                        writeln!(self.writer, "{}", join(&problem.values_at(subset)))?;
                    }
                }
            }
            OutputFormat::Json => {
                let report = JsonReport {
                    sequence: &problem.sequence,
                    target: problem.target,
                    outcome,
                    witness_values: outcome.witness.as_deref().map(|w| problem.values_at(w)),
                };
                serde_json::to_writer(&mut self.writer, &report)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
