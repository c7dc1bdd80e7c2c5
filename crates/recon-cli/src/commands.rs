use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use recon_engine::{ReconOptions, reconcile};
use recon_ingest::{read_conference_index_from_path, read_records_from_path, write_records_to_path};
use recon_model::OUTPUT_COLUMNS;

use crate::cli::MergeArgs;
use crate::summary::apply_table_style;
use crate::types::MergeReport;

pub fn run_merge(args: &MergeArgs) -> Result<MergeReport> {
    let span = info_span!("merge");
    let _guard = span.enter();
    let start = Instant::now();

    let authoritative = read_records_from_path(&args.authoritative)
        .with_context(|| format!("load authoritative collection {}", args.authoritative.display()))?;
    let harvested = read_records_from_path(&args.harvested)
        .with_context(|| format!("load harvested collection {}", args.harvested.display()))?;
    let index = read_conference_index_from_path(&args.conferences)
        .with_context(|| format!("load conference table {}", args.conferences.display()))?;
    info!(
        authoritative = authoritative.len(),
        harvested = harvested.len(),
        conferences = index.len(),
        "inputs loaded"
    );

    let options = ReconOptions {
        fold_unmatched: args.fold_unmatched,
    };
    let output = reconcile(&authoritative, &harvested, &index, options)
        .context("reconcile collections")?;

    write_records_to_path(&args.out, &output.merged)
        .with_context(|| format!("write merged output {}", args.out.display()))?;
    if let Some(unmatched_out) = &args.unmatched_out {
        write_records_to_path(unmatched_out, &output.unmatched)
            .with_context(|| format!("write unmatched output {}", unmatched_out.display()))?;
    }

    info!(
        merged = output.merged.len(),
        unmatched = output.unmatched.len(),
        duration_ms = start.elapsed().as_millis(),
        "merge complete"
    );

    Ok(MergeReport {
        authoritative_count: authoritative.len(),
        harvested_count: harvested.len(),
        conference_count: index.len(),
        merged_count: output.merged.len(),
        unmatched_count: output.unmatched.len(),
        matched_shared: output.matched_count,
        unmatched_shared: output.unmatched_count,
        out: args.out.clone(),
        unmatched_out: args.unmatched_out.clone(),
    })
}

pub fn run_schema() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Required", "Notes"]);
    apply_table_style(&mut table);
    for column in OUTPUT_COLUMNS {
        let (required, notes) = match column {
            "conference_id" => ("yes", "integer id of the conference instance"),
            "speaker" => ("yes", "speaker display name"),
            "title" => ("yes", "talk title"),
            "date" | "location" => ("no", "overridden from the conference table"),
            "video_url" => ("no", "normalized to watch?v= form on export"),
            _ => ("no", ""),
        };
        table.add_row(vec![column, required, notes]);
    }
    println!("{table}");
    println!("Exports prepend a 1-based `index` column.");
    Ok(())
}
