//! JSON output for generated records.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use locale_seo::log;
use serde::Serialize;

/// Serialize `value` to stdout, or to `output` when given.
pub fn write_json<T: Serialize>(value: &T, pretty: bool, output: Option<&Path>) -> Result<()> {
    let formatted = format_json(value, pretty)?;

    if let Some(output_path) = output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("output"; "wrote {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn format_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(formatted)
}
