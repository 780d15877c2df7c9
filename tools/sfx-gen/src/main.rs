//! sfx-gen CLI
//!
//! ```bash
//! # Write the generated module next to the game sources
//! sfx-gen -i sounds.json -o src/sfx.js
//!
//! # Or inspect it on stdout
//! sfx-gen -i sounds.json
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Generate a compact ZzFX sound-effect module from a JSON catalog
#[derive(Parser)]
#[command(name = "sfx-gen")]
#[command(about = "Generate a compact ZzFX sound-effect module from a JSON catalog")]
#[command(version)]
struct Cli {
    /// Input JSON catalog (sound name -> parameter array)
    #[arg(short, long)]
    input: PathBuf,

    /// Output path for the generated module (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    sfx_gen::generate_to(&cli.input, cli.output.as_deref())
}
