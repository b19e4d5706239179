use std::path::Path;

use anyhow::{Context, Result};

use crate::OutputFormat;
use quiztex_lib::sample;

pub fn run(output: &Path, force: bool, format: &OutputFormat) -> Result<()> {
    sample::write_sample(output, force)
        .with_context(|| format!("Failed to write sample deck to {}", output.display()))?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": output.to_string_lossy(),
                "bytes": sample::SAMPLE_CSV.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Wrote sample deck to {}", output.display());
            println!("Study it with: quiztex study {}", output.display());
        }
    }

    Ok(())
}
