use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use training_templates::{RaceData, generate_training_plans_html};

const PREVIEW_CHARS: usize = 500;

struct Args {
    race_data: Option<PathBuf>,
    full: bool,
}

impl Args {
    fn parse() -> Self {
        let mut race_data = None;
        let mut full = false;
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--full" => full = true,
                _ => race_data = Some(PathBuf::from(arg)),
            }
        }

        Args {
            race_data: race_data.or_else(|| std::env::var_os("RACE_DATA").map(PathBuf::from)),
            full,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let data = match &args.race_data {
        Some(path) => {
            info!("Loading race data from {}", path.display());
            RaceData::from_path(path)
                .with_context(|| format!("Failed to load race data from {}", path.display()))?
        }
        None => {
            info!("No race data given, rendering the SBT GRVL sample");
            RaceData::sample()
        }
    };

    let html = generate_training_plans_html(&data).context("Failed to render section")?;

    if args.full {
        println!("{}", html);
        return Ok(());
    }

    println!("Generated HTML length: {}", html.len());
    println!("\nFirst {} chars:", PREVIEW_CHARS);
    println!("{}", html.chars().take(PREVIEW_CHARS).collect::<String>());
    println!("\n✓ Module working correctly");

    Ok(())
}
