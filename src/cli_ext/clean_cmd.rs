//! `clean` command: normalize an export without ranking it.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;

use crate::cli::{AppContext, CleanArgs};
use crate::core::normalize::clean_batch;
use crate::infra::config::load_config;
use crate::infra::io::read_text_with_fallback;
use crate::infra::table::{read_records, write_clean};

pub fn run(args: CleanArgs, ctx: &AppContext) -> Result<()> {
    let config = load_config().context("load configuration")?;
    let output = args
        .output
        .unwrap_or_else(|| config.clean.output_file.clone().into());

    let (text, encoding) = read_text_with_fallback(&args.input)?;
    info!(%encoding, input = %args.input.display(), "read catalog export");

    let table =
        read_records(&text).with_context(|| format!("Failed to parse {}", args.input.display()))?;
    let records = clean_batch(table.records);

    if ctx.dry_run {
        if !ctx.quiet {
            let message = format!(
                "DRY RUN: would write {} cleaned rows to {}",
                records.len(),
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

    write_clean(&output, &table.headers, &records)?;

    if !ctx.quiet {
        let message = format!(
            "Read using '{encoding}'. Cleaned {} rows to {}",
            records.len(),
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
