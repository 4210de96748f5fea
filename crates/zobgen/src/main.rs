mod render;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use rand::{Rng, SeedableRng};
use tracing::{info, Level};
use zobgen_bootstrap::{SplitMix64, ZobristMap};

use render::render;

/// Seed of the shipped tables. Every hash the consumer has ever stored was
/// computed against the keys this seed produces, so treat it as frozen.
const SEED: u64 = 0xB2D07A5419C683E1;

#[derive(Debug, thiserror::Error)]
enum StageError {
    #[error("could not initialize diagnostics: {0}")]
    Initialization(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("could not write the rendered tables to standard output: {0}")]
    Output(#[from] io::Error),
}

fn initialize_tracing() -> Result<(), StageError> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .without_time()
        .with_max_level(Level::INFO)
        .finish();

    Ok(tracing::subscriber::set_global_default(subscriber)?)
}

fn run() -> Result<(), StageError> {
    initialize_tracing()?;

    info!(seed = SEED, "drawing zobrist tables");

    let map: ZobristMap = SplitMix64::seed_from_u64(SEED).gen();
    let rendered = render(&map);

    // One bulk write. If it fails, whatever reached the stream is unusable,
    // and the non-zero exit tells the build to discard it.
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    info!("emitted all three tables");

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("zobgen: {error}");

            ExitCode::FAILURE
        }
    }
}
