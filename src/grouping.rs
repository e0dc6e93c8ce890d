use std::collections::HashMap;

use crate::model::{Citation, CitationGroup};
use crate::text::{SENTENCE_DELIMITER, normalize, split_sentences};

pub const UNTITLED_SOURCE: &str = "Untitled Source";
pub const SNIPPET_SENTENCE_LIMIT: usize = 2;
pub const SNIPPET_ELLIPSIS: &str = "...";

pub fn heading_for(citation: &Citation) -> &str {
    non_empty(citation.title.as_deref())
        .or_else(|| non_empty(citation.filepath.as_deref()))
        .unwrap_or(UNTITLED_SOURCE)
}

pub fn group_citations(citations: &[Citation]) -> Vec<CitationGroup> {
    let mut groups: Vec<CitationGroup> = Vec::new();
    let mut index_by_heading: HashMap<String, usize> = HashMap::new();

    for citation in citations {
        let heading = heading_for(citation);
        let index = match index_by_heading.get(heading).copied() {
            Some(index) => index,
            None => {
                groups.push(CitationGroup {
                    heading: heading.to_string(),
                    citations: Vec::new(),
                });
                index_by_heading.insert(heading.to_string(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[index].citations.push(citation.clone());
    }

    groups
}

pub fn snippet(content: &str) -> String {
    snippet_with_limit(content, SNIPPET_SENTENCE_LIMIT)
}

pub fn snippet_with_limit(content: &str, limit: usize) -> String {
    snippet_preview(content, limit).text
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetPreview {
    pub text: String,
    pub truncated: bool,
}

pub fn snippet_preview(content: &str, limit: usize) -> SnippetPreview {
    let full_text = normalize(content);
    let sentences = split_sentences(&full_text);
    if sentences.len() <= limit {
        return SnippetPreview {
            text: full_text,
            truncated: false,
        };
    }

    let mut text = sentences[..limit].join(SENTENCE_DELIMITER);
    text.push_str(SNIPPET_ELLIPSIS);
    SnippetPreview {
        text,
        truncated: true,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citation(id: &str, title: Option<&str>, filepath: Option<&str>) -> Citation {
        Citation {
            reindex_id: id.to_string(),
            content: String::new(),
            title: title.map(ToOwned::to_owned),
            filepath: filepath.map(ToOwned::to_owned),
            ..Citation::default()
        }
    }

    #[test]
    fn group_citations_keeps_first_occurrence_order() {
        let citations = vec![
            citation("1", Some("B"), None),
            citation("2", Some("A"), None),
            citation("3", Some("B"), None),
        ];

        let groups = group_citations(&citations);
        let headings = groups
            .iter()
            .map(|group| group.heading.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(headings, vec!["B", "A"]);

        let ids = groups[0]
            .citations
            .iter()
            .map(|citation| citation.reindex_id.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(groups[1].citations[0].reindex_id, "2");
    }

    #[test]
    fn heading_falls_back_to_filepath_then_sentinel() {
        assert_eq!(heading_for(&citation("1", Some("Title"), Some("/a.pdf"))), "Title");
        assert_eq!(heading_for(&citation("1", Some(""), Some("docs/a.pdf"))), "docs/a.pdf");
        assert_eq!(heading_for(&citation("1", None, Some("docs/a.pdf"))), "docs/a.pdf");
        assert_eq!(heading_for(&citation("1", Some(""), Some(""))), UNTITLED_SOURCE);
        assert_eq!(heading_for(&citation("1", None, None)), UNTITLED_SOURCE);
    }

    #[test]
    fn group_citations_does_not_deduplicate() {
        let repeated = citation("7", None, None);
        let groups = group_citations(&[repeated.clone(), repeated]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].heading, UNTITLED_SOURCE);
        assert_eq!(groups[0].citations.len(), 2);
    }

    #[test]
    fn group_citations_of_empty_input_is_empty() {
        assert!(group_citations(&[]).is_empty());
    }

    #[test]
    fn snippet_of_empty_content_is_empty() {
        assert_eq!(snippet(""), "");
    }

    #[test]
    fn snippet_returns_normalized_text_when_short() {
        let content = "Retail stores  open at 9am.\nHours vary by region.";
        assert_eq!(snippet(content), normalize(content));
        assert_eq!(snippet(content), "Retail stores open at 9am. Hours vary by region.");
    }

    #[test]
    fn snippet_truncates_to_two_sentences_with_ellipsis() {
        let content = "First rule applies. Second rule applies. Third rule applies. Fourth.";
        let preview = snippet(content);
        assert_eq!(preview, "First rule applies. Second rule applies...");
        assert!(preview.ends_with(SNIPPET_ELLIPSIS));
    }

    #[test]
    fn snippet_counts_sentences_after_filtering() {
        let content = "Keep this. drop this. Keep that. drop that.";
        assert_eq!(normalize(content), "Keep this. Keep that");
        assert_eq!(snippet(content), "Keep this. Keep that");
    }

    #[test]
    fn snippet_with_limit_honors_custom_limit() {
        let content = "One here. Two here. Three here.";
        assert_eq!(snippet_with_limit(content, 1), "One here...");
        assert_eq!(snippet_with_limit(content, 3), "One here. Two here. Three here.");
    }

    #[test]
    fn snippet_preview_flags_truncation_not_trailing_dots() {
        let short = snippet_preview("Hold on. Wait...", SNIPPET_SENTENCE_LIMIT);
        assert_eq!(short.text, "Hold on. Wait...");
        assert!(!short.truncated);

        let long = snippet_preview("A one. B two. C three.", SNIPPET_SENTENCE_LIMIT);
        assert_eq!(long.text, "A one. B two...");
        assert!(long.truncated);
    }
}
