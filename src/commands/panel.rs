use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{OutputFormat, PanelArgs};
use crate::grouping::{group_citations, snippet_preview};
use crate::model::{Citation, CitationPanel, PanelEntry, PanelGroup, PanelManifest};
use crate::util::{input_label, now_utc_string, sha256_hex, write_json_pretty};

use super::{ensure_sentence_limit, load_citations};

pub const PANEL_HEADER: &str = "Sources";
pub const PANEL_DISCLAIMER: &str =
    "Tables, images, and other special formatting not shown in this preview.";
const MANIFEST_VERSION: u32 = 1;

pub fn run(args: PanelArgs) -> Result<()> {
    ensure_sentence_limit(args.snippet_sentences)?;

    let source = input_label(args.input.as_deref());
    let (raw, citations) = load_citations(args.input.as_deref())
        .with_context(|| format!("failed to load citations from {source}"))?;
    info!(source = %source, citation_count = citations.len(), "loaded citations");

    let panel = build_panel(&citations, args.snippet_sentences);

    let mut output = io::BufWriter::new(io::stdout().lock());
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut output, &panel)
                .context("failed to serialize panel json output")?;
            writeln!(output)?;
        }
        OutputFormat::Text => write_panel_text(&mut output, &panel)?,
    }
    output.flush()?;

    if let Some(manifest_path) = args.manifest_path.as_deref() {
        let manifest = build_manifest(&panel, &source, &raw);
        write_json_pretty(manifest_path, &manifest)?;
        info!(path = %manifest_path.display(), "wrote panel manifest");
    }

    info!(
        citation_count = panel.citation_count,
        group_count = panel.groups.len(),
        format = args.format.as_str(),
        "panel completed"
    );
    Ok(())
}

pub fn build_panel(citations: &[Citation], snippet_sentences: usize) -> CitationPanel {
    let groups = group_citations(citations)
        .into_iter()
        .map(|group| PanelGroup {
            heading: group.heading,
            entries: group
                .citations
                .into_iter()
                .map(|citation| {
                    let preview = snippet_preview(&citation.content, snippet_sentences);
                    PanelEntry {
                        reindex_id: citation.reindex_id,
                        snippet: preview.text,
                        truncated: preview.truncated,
                        url: citation.url,
                        chunk_id: citation.chunk_id,
                    }
                })
                .collect(),
        })
        .collect();

    CitationPanel {
        header: PANEL_HEADER.to_string(),
        disclaimer: PANEL_DISCLAIMER.to_string(),
        snippet_sentences,
        citation_count: citations.len(),
        groups,
    }
}

pub fn write_panel_text<W: Write>(output: &mut W, panel: &CitationPanel) -> Result<()> {
    writeln!(output, "{}", panel.header)?;
    writeln!(output, "{}", panel.disclaimer)?;

    for group in &panel.groups {
        writeln!(output)?;
        writeln!(output, "{}", group.heading)?;
        for entry in &group.entries {
            writeln!(output, "  {}. {}", entry.reindex_id, entry.snippet)?;
        }
    }

    Ok(())
}

pub fn build_manifest(panel: &CitationPanel, source: &str, raw: &[u8]) -> PanelManifest {
    let entries = panel.groups.iter().flat_map(|group| group.entries.iter());

    PanelManifest {
        manifest_version: MANIFEST_VERSION,
        generated_at: now_utc_string(),
        source: source.to_string(),
        input_sha256: sha256_hex(raw),
        citation_count: panel.citation_count,
        group_count: panel.groups.len(),
        truncated_snippet_count: entries.clone().filter(|entry| entry.truncated).count(),
        empty_snippet_count: entries.filter(|entry| entry.snippet.is_empty()).count(),
    }
}
