use jp4view::{display, loader, logger, prelude::*};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(version, about = "Visual debugger for JP4 macroblock-coded raw frames")]
struct Cli {
    /// JP4 frame to inspect
    #[arg(value_name = "image.jp4")]
    image: PathBuf,

    /// Reference JPEG of the same scene to compare against
    #[arg(value_name = "reference.jpg")]
    reference: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<()> {
    let raw = loader::open_raw(&cli.image)
        .with_context(|| format!("Unable to load raw frame {}", cli.image.display()))?;

    let reference = match &cli.reference {
        Some(path) => Some(
            loader::open_reference(path)
                .with_context(|| format!("Unable to load reference {}", path.display()))?,
        ),
        None => None,
    };

    let mut session = DebugSession::new(Calibration::default());
    let views = session.run(&raw, reference.as_ref())?;

    display::show(&views).context("Display failed")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                return ExitCode::from(1);
            }
        },
    };

    logger::init();
    info!("Inspecting {}", cli.image.display());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{:#}", why);
            ExitCode::from(1)
        }
    }
}
