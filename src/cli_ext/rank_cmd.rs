//! `rank` command: normalize an export and attach shelf ranks.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;

use crate::cli::{AppContext, RankArgs};
use crate::core::rank::process_batch;
use crate::infra::config::load_config;
use crate::infra::io::read_text_with_fallback;
use crate::infra::table::{read_records, write_ranked};

pub fn run(args: RankArgs, ctx: &AppContext) -> Result<()> {
    let config = load_config().context("load configuration")?;
    let output = args
        .output
        .unwrap_or_else(|| config.rank.output_file.clone().into());
    let rank_field = args.rank_field.unwrap_or(config.rank.rank_field);

    let (text, encoding) = read_text_with_fallback(&args.input)?;
    info!(%encoding, input = %args.input.display(), "read catalog export");

    let table =
        read_records(&text).with_context(|| format!("Failed to parse {}", args.input.display()))?;
    let ranked = process_batch(table.records);

    if ctx.dry_run {
        if !ctx.quiet {
            let message = format!(
                "DRY RUN: would write {} ranked rows to {} (rank column '{rank_field}')",
                ranked.len(),
                output.display()
            );
            if ctx.no_color {
                println!("{message}");
            } else {
                println!("{}", message.yellow());
            }
        }
        return Ok(());
    }

    write_ranked(&output, &table.headers, &ranked, &rank_field, args.sorted)?;

    if args.json {
        let summary = serde_json::json!({
            "rows": ranked.len(),
            "encoding": encoding.to_string(),
            "rank_field": rank_field,
            "sorted": args.sorted,
            "output": output.display().to_string(),
        });
        println!("{summary}");
    } else if !ctx.quiet {
        let message = format!(
            "Read using '{encoding}'. Ranked {} rows to {}. Sort by '{rank_field}' for shelf order.",
            ranked.len(),
            output.display()
        );
        if ctx.no_color {
            println!("{message}");
        } else {
            println!("{} {message}", "✓".green());
        }
    }
    Ok(())
}
