pub mod context;
pub mod normalize;
pub mod panel;

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::model::{Citation, CitationPayload};
use crate::util::read_input;

fn load_citations(path: Option<&Path>) -> Result<(Vec<u8>, Vec<Citation>)> {
    let raw = read_input(path)?;
    let payload: CitationPayload = serde_json::from_slice(&raw)
        .context("failed to parse citations json (expected an array or an object with `citations`)")?;
    Ok((raw, payload.into_citations()))
}

fn ensure_sentence_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        bail!("--snippet-sentences must be at least 1");
    }
    Ok(())
}
