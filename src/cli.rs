use std::{
    fs,
    io::{IsTerminal, Read, stdin},
    path::PathBuf,
};

use clap::Parser;

use crate::{dispatch::QueueStrategy, offer::OfferTable, prelude::*};

#[derive(Parser)]
#[command(author, version, about)]
#[must_use]
pub struct Args {
    /// Input file, read from the standard input when omitted.
    pub input: Option<PathBuf>,

    /// Offer table in TOML or JSON, the built-in offers are used when omitted.
    #[clap(long = "offers", env = "COURIER_OFFERS_PATH")]
    pub offers_path: Option<PathBuf>,

    /// Vehicle queue implementation.
    #[clap(long, env = "COURIER_QUEUE", value_enum, default_value = "heap")]
    pub queue: QueueStrategy,

    /// Print plain `id discount total eta` lines instead of the table.
    #[clap(long, env = "COURIER_PLAIN")]
    pub plain: bool,
}

impl Args {
    #[instrument(skip_all, name = "Reading the input…")]
    pub fn read_input(&self) -> Result<String> {
        if let Some(path) = &self.input {
            return fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()));
        }
        let mut stdin = stdin().lock();
        ensure!(!stdin.is_terminal(), "no input file given and nothing is piped into stdin");
        let mut text = String::new();
        stdin.read_to_string(&mut text).context("failed to read the standard input")?;
        Ok(text)
    }

    /// Offer table to price the batch with, never fails.
    pub fn offer_table(&self) -> OfferTable {
        self.offers_path.as_deref().map_or_else(OfferTable::builtin, OfferTable::read_or_empty)
    }
}
