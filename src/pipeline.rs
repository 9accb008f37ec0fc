//! Batch orchestration: classify, keep model locators, evaluate each on its
//! own task, and yield records in input order.

use crate::error::{Result, ScoreError};
use crate::locator::{classify, parse, Kind};
use crate::metrics::{evaluate_all, net::net_score};
use crate::registry::Registry;
use crate::types::record::EvaluationRecord;
use futures::stream::{self, Stream, StreamExt};
use tracing::{debug, info, warn};

pub fn model_locators(locators: &[String]) -> Vec<String> {
    let mut models = Vec::new();
    let (mut datasets, mut code, mut unknown) = (0usize, 0usize, 0usize);
    for locator in locators {
        match classify(locator) {
            Kind::Model => models.push(locator.clone()),
            Kind::Dataset => datasets += 1,
            Kind::Code => code += 1,
            Kind::Unknown => unknown += 1,
        }
    }
    info!(
        models = models.len(),
        datasets,
        code,
        unknown,
        "classified locators"
    );
    models
}

pub async fn evaluate_locator(registry: &Registry, locator: &str) -> Result<EvaluationRecord> {
    let identity = parse(locator);
    debug!(
        locator,
        organization = identity.organization(),
        name = identity.name(),
        model = %identity.full_name,
        "evaluating model"
    );

    let fetched = registry.lookup(&identity).await;
    let card = evaluate_all(&fetched);
    let net = net_score(&card);
    if !(0.0..=1.0).contains(&net) {
        return Err(ScoreError::ScoreOutOfRange("NetScore", net));
    }
    Ok(EvaluationRecord::new(identity.source_locator, &card, net))
}

/// Ordered record stream over the model subset of `locators`.
///
/// Each locator runs on its own task so that an error or panic drops only that
/// locator. At most `concurrency` evaluations are in flight; `buffered` keeps
/// output in input order regardless of completion order.
pub fn record_stream(
    locators: &[String],
    registry: &Registry,
    concurrency: usize,
) -> impl Stream<Item = EvaluationRecord> {
    let registry = registry.clone();
    let tasks = model_locators(locators).into_iter().map(move |locator| {
        let registry = registry.clone();
        async move {
            let handle = {
                let locator = locator.clone();
                tokio::spawn(async move { evaluate_locator(&registry, &locator).await })
            };
            match handle.await {
                Ok(Ok(record)) => Some(record),
                Ok(Err(err)) => {
                    warn!(locator = %locator, error = %err, "skipping locator");
                    None
                }
                Err(join_err) => {
                    warn!(
                        locator = %locator,
                        error = %join_err,
                        "locator evaluation aborted; skipping"
                    );
                    None
                }
            }
        }
    });

    stream::iter(tasks)
        .buffered(concurrency.max(1))
        .filter_map(|record| async move { record })
}

pub async fn evaluate_batch(
    locators: &[String],
    registry: &Registry,
    concurrency: usize,
) -> Vec<EvaluationRecord> {
    record_stream(locators, registry, concurrency)
        .collect()
        .await
}
