pub mod json;
pub mod md;

use crate::error::ScoreError;
use crate::types::record::EvaluationRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ndjson,
    Md,
}

pub fn render(records: &[EvaluationRecord], format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Ndjson => records
            .iter()
            .map(|record| json::to_json_line(record).map_err(ScoreError::Json))
            .collect::<Result<Vec<_>, _>>()
            .map(|lines| lines.join("\n")),
        OutputFormat::Md => Ok(md::to_markdown(records)),
    }
}
