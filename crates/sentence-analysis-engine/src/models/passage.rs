use serde::Deserialize;

use super::sentence::Sentence;

/// Authored passage as stored upstream: raw annotated sentences with
/// translations and tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PassageSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sentences: Vec<SentenceSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SentenceSource {
    pub raw: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PassageSource {
    /// One sentence per non-empty line, without translations or tags.
    pub fn from_lines(text: &str) -> Self {
        let sentences = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(|line| SentenceSource {
                raw: line.to_string(),
                ..SentenceSource::default()
            })
            .collect();
        Self {
            title: None,
            sentences,
        }
    }
}

/// An analysed passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub title: Option<String>,
    pub sentences: Vec<Sentence>,
}

impl Passage {
    pub fn analyze(source: &PassageSource) -> Self {
        let sentences = source
            .sentences
            .iter()
            .enumerate()
            .map(|(index, s)| Sentence::analyze(index, &s.raw, s.translation.as_str(), s.tags.clone()))
            .collect();
        Self {
            title: source.title.clone(),
            sentences,
        }
    }

    /// Sentences whose clause delimiters do not balance.
    pub fn unbalanced(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter().filter(|s| !s.scope.is_balanced())
    }
}
