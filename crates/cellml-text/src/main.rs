//! Thin CLI around [`cellml_text::process`]: read a CellML Text source
//! (a file path argument, or stdin when none is given), translate it, and
//! write the result to stdout. A successful translation and a failed one
//! both print to the same stream — the caller tells them apart by content,
//! exactly as `tomathml`'s `process`/`printMessages` pairing does.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser as _;

use cellml_text::error::InputError;

/// Translate a CellML Text equation block into Content-MathML.
#[derive(clap::Parser)]
#[command(name = "cellml-text", version)]
struct Cli {
    /// Source file to translate. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Disable domain-aware mode: reject unit blocks instead of requiring
    /// them, and omit `cellml:units` attributes from the output.
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = match &cli.input {
        Some(path) => fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.clone(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| InputError::Stdin { source })?;
            buffer
        }
    };

    print!("{}", cellml_text::process(&source, !cli.plain));

    Ok(())
}
