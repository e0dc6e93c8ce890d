use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ContextArgs;
use crate::grouping::snippet;
use crate::model::Citation;
use crate::util::{input_label, write_text};

use super::load_citations;

pub fn run(args: ContextArgs) -> Result<()> {
    let source = input_label(args.input.as_deref());
    let (_, citations) = load_citations(args.input.as_deref())
        .with_context(|| format!("failed to load citations from {source}"))?;

    let block = render_prompt_context(&citations);

    match args.output_path.as_deref() {
        Some(path) => {
            write_text(path, &format!("{block}\n"))?;
            info!(path = %path.display(), "wrote context block");
        }
        None => {
            let mut output = io::BufWriter::new(io::stdout().lock());
            writeln!(output, "{block}")?;
            output.flush()?;
        }
    }

    info!(source = %source, citation_count = citations.len(), "context completed");
    Ok(())
}

pub fn render_prompt_context(citations: &[Citation]) -> String {
    citations
        .iter()
        .enumerate()
        .map(|(index, citation)| {
            let number = index + 1;
            let title = citation
                .title
                .as_deref()
                .filter(|title| !title.is_empty())
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| format!("Document {number}"));
            format!("{number}. {title}: {}", snippet(&citation.content))
        })
        .collect::<Vec<String>>()
        .join("\n")
}
