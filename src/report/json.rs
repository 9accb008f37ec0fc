use crate::types::record::EvaluationRecord;

pub fn to_json_line(record: &EvaluationRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(record)
}
