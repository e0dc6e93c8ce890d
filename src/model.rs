use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Citation {
    #[serde(
        default,
        alias = "reindexId",
        deserialize_with = "deserialize_lenient_id"
    )]
    pub reindex_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(
        default,
        alias = "chunkId",
        deserialize_with = "deserialize_optional_lenient_id"
    )]
    pub chunk_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CitationPayload {
    List(Vec<Citation>),
    Message { citations: Vec<Citation> },
}

impl CitationPayload {
    pub fn into_citations(self) -> Vec<Citation> {
        match self {
            Self::List(citations) => citations,
            Self::Message { citations } => citations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationGroup {
    pub heading: String,
    pub citations: Vec<Citation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelEntry {
    pub reindex_id: String,
    pub snippet: String,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelGroup {
    pub heading: String,
    pub entries: Vec<PanelEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CitationPanel {
    pub header: String,
    pub disclaimer: String,
    pub snippet_sentences: usize,
    pub citation_count: usize,
    pub groups: Vec<PanelGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source: String,
    pub input_sha256: String,
    pub citation_count: usize,
    pub group_count: usize,
    pub truncated_snippet_count: usize,
    pub empty_snippet_count: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientId {
    Text(String),
    Number(serde_json::Number),
}

impl LenientId {
    fn into_string(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LenientId>::deserialize(deserializer)?
        .map(LenientId::into_string)
        .unwrap_or_default())
}

fn deserialize_optional_lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LenientId>::deserialize(deserializer)?.map(LenientId::into_string))
}
