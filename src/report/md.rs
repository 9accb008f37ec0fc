use crate::types::record::EvaluationRecord;

pub fn to_markdown(records: &[EvaluationRecord]) -> String {
    let mut output = String::new();
    output.push_str("# Model Scores\n\n");
    if records.is_empty() {
        output.push_str("- no model URLs evaluated\n");
        return output;
    }

    output.push_str(
        "| URL | Correctness | Fairness | Maintainability | License | NetScore |\n",
    );
    output.push_str("|---|---|---|---|---|---|\n");
    for record in records {
        output.push_str(&format!(
            "| {} | {:.3} ({} ms) | {:.3} ({} ms) | {:.3} ({} ms) | {:.3} ({} ms) | {:.3} |\n",
            record.url,
            record.correctness,
            record.correctness_latency,
            record.fairness,
            record.fairness_latency,
            record.maintainability,
            record.maintainability_latency,
            record.license,
            record.license_latency,
            record.net_score
        ));
    }
    output
}
