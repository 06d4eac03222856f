#![doc = include_str!("../README.md")]

mod cli;
mod dispatch;
mod estimate;
mod fleet;
mod input;
mod offer;
mod package;
mod prelude;
mod pricing;
mod quantity;
mod tables;
mod validation;

use std::io::stderr;

use clap::{Parser, crate_version};

use crate::{
    cli::Args,
    estimate::estimate,
    input::{EXPECTED_FORMAT, Manifest},
    prelude::*,
    tables::{build_estimates_table, format_plain_line},
    validation::validate_manifest,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let manifest = args
        .read_input()?
        .parse::<Manifest>()
        .with_context(|| format!("failed to parse the input, expected:\n{EXPECTED_FORMAT}"))?;
    validate_manifest(&manifest).context("invalid input")?;

    let offers = args.offer_table();
    let estimates = estimate(manifest, &offers, args.queue)?;

    if args.plain {
        for estimate in &estimates {
            println!("{}", format_plain_line(estimate));
        }
    } else {
        println!("{}", build_estimates_table(&estimates));
    }

    info!("done!");
    Ok(())
}
