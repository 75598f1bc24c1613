use std::fs;
use std::time::Instant;

use log::{info, warn};

use claimscan::utils::logging::{log_pipeline_complete, log_pipeline_start};
use claimscan::{
    AggregationConfig, CollusionConfig, Normalizer, RawClaimRecord, Result, RingOutcome,
    build_model_payload, find_ring,
};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (Some(records_path), Some(provider_id)) = (args.next(), args.next()) else {
        warn!("usage: claimscan <records.json> <provider-id> [day-window]");
        return Ok(());
    };
    let day_window = args
        .next()
        .and_then(|w| w.parse::<i64>().ok())
        .unwrap_or_else(|| CollusionConfig::default().day_window_days);

    info!("Loading raw claim records from: {records_path}");
    let start = Instant::now();
    let raws: Vec<RawClaimRecord> = serde_json::from_str(&fs::read_to_string(&records_path)?)?;
    log_pipeline_start("normalize", raws.len());
    let records = Normalizer::new().normalize_batch(&raws);
    log_pipeline_complete("normalize", records.len(), Some(start.elapsed()));

    // Cluster query
    let start = Instant::now();
    let outcome = find_ring(
        &records,
        &provider_id,
        &CollusionConfig::with_day_window(day_window),
    )?;
    match &outcome {
        RingOutcome::NotInRing => {
            info!("Provider {provider_id} is not in any suspicious cluster");
        }
        RingOutcome::Member(report) => {
            info!(
                "Provider {provider_id} is in a ring of {} providers ({:?})",
                report.size(),
                start.elapsed()
            );
        }
    }
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    // Feature/scoring query over the provider's own history
    let provider_canonical = claimscan::normalize::canonical_provider_id(&provider_id);
    let history: Vec<_> = records
        .iter()
        .filter(|r| r.provider.as_deref() == Some(provider_canonical.as_str()))
        .cloned()
        .collect();
    let (payload, explain) =
        build_model_payload(&provider_id, &history, &AggregationConfig::default())?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    println!("{}", serde_json::to_string_pretty(&explain)?);

    Ok(())
}
