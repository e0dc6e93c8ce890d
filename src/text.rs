use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\(.*?\)").expect("valid markdown link regex"));
static FILE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/[A-Za-z0-9_\-./]+(?:\.pdf|\.docx|\.txt)?").expect("valid file path regex")
});
static PAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Page [0-9]+ of [0-9]+|Page [0-9]+").expect("valid page marker regex")
});
static RULE_ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}|_{2,}").expect("valid rule artifact regex"));

pub const SENTENCE_DELIMITER: &str = ". ";

pub fn normalize(text: &str) -> String {
    let mut current = normalize_pass(text);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_pass(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let without_links = MARKDOWN_LINK.replace_all(&collapsed, "");
    let without_paths = FILE_PATH.replace_all(&without_links, "");
    let without_pages = PAGE_MARKER.replace_all(&without_paths, "");
    let without_rules = RULE_ARTIFACT.replace_all(&without_pages, "");
    let single_line = without_rules.replace('\n', " ");
    let cleaned = condense_whitespace(single_line.trim());

    cleaned
        .split(SENTENCE_DELIMITER)
        .filter(|sentence| starts_with_ascii_uppercase(sentence.trim()))
        .collect::<Vec<&str>>()
        .join(SENTENCE_DELIMITER)
}

pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_DELIMITER)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

fn condense_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}

fn starts_with_ascii_uppercase(sentence: &str) -> bool {
    sentence
        .chars()
        .next()
        .is_some_and(|character| character.is_ascii_uppercase())
}
