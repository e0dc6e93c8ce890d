use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{NormalizeArgs, OutputFormat};
use crate::text::normalize;
use crate::util::{input_label, read_input};

#[derive(Debug, Serialize)]
struct NormalizeResponse {
    input_chars: usize,
    output_chars: usize,
    text: String,
}

pub fn run(args: NormalizeArgs) -> Result<()> {
    let raw = match args.text {
        Some(text) => text,
        None => {
            let bytes = read_input(args.input.as_deref())?;
            String::from_utf8(bytes).with_context(|| {
                format!("input is not valid UTF-8: {}", input_label(args.input.as_deref()))
            })?
        }
    };

    let text = normalize(&raw);
    let response = NormalizeResponse {
        input_chars: raw.chars().count(),
        output_chars: text.chars().count(),
        text,
    };

    if response.output_chars == 0 && response.input_chars > 0 {
        warn!(
            input_chars = response.input_chars,
            "no sentence survived normalization"
        );
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut output, &response)
                .context("failed to serialize normalize json output")?;
            writeln!(output)?;
        }
        OutputFormat::Text => writeln!(output, "{}", response.text)?,
    }
    output.flush()?;

    info!(
        input_chars = response.input_chars,
        output_chars = response.output_chars,
        format = args.format.as_str(),
        "normalize completed"
    );
    Ok(())
}
