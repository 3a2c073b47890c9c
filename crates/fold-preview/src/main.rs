// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! FOLD Preview - command-line front end
//!
//! Loads a FOLD file and reports what the renderer would receive for it.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use fold_model::RenderOptions;
use std::io::{self, Write};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "fold-preview")]
#[command(about = "Preview FOLD origami files", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Stroke width of crease lines as a fraction of the model size (1/N)
    #[arg(long, global = true, default_value_t = 500.0)]
    stroke_divisor: f32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print counts, classification and buffer sizes
    Info {
        /// Path to the .fold file
        file: PathBuf,
    },
    /// Write the render buffers as JSON to stdout
    Buffers {
        /// Path to the .fold file
        file: PathBuf,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Export the triangulated mesh as Wavefront OBJ
    Obj {
        /// Path to the .fold file
        file: PathBuf,
        /// Output .obj file
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.stroke_divisor <= 0.0 {
        anyhow::bail!("--stroke-divisor must be positive, got {}", cli.stroke_divisor);
    }
    let options = RenderOptions::new().with_stroke_divisor(cli.stroke_divisor);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Info { file } => {
            let doc = commands::load(&file)?;
            commands::info(&doc, &options, &mut out)?;
        }
        Commands::Buffers { file, pretty } => {
            let doc = commands::load(&file)?;
            commands::buffers(&doc, &options, pretty, &mut out)?;
        }
        Commands::Obj { file, output } => {
            let doc = commands::load(&file)?;
            commands::obj(&doc, &output)?;
            writeln!(out, "Exported OBJ to {}", output.display())?;
        }
    }

    out.flush()?;
    Ok(())
}
