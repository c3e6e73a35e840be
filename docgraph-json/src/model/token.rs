use std::collections::BTreeMap;

use super::timex::Timex;

/// Per-label NER confidence table, ordered by label.
pub type NerConfidences = BTreeMap<String, f64>;

/// The "no entity" NER label. Never rendered in confidence tables.
pub const NO_ENTITY: &str = "O";

/// One word occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Token {
    /// 1-based position in the sentence.
    pub index: Option<usize>,
    pub word: Option<String>,
    pub original_text: Option<String>,
    pub lemma: Option<String>,
    pub char_begin: Option<usize>,
    pub char_end: Option<usize>,
    pub codepoint_begin: Option<usize>,
    pub codepoint_end: Option<usize>,
    pub pos: Option<String>,
    pub ner: Option<String>,
    pub normalized_ner: Option<String>,
    pub ner_confidences: Option<NerConfidences>,
    pub speaker: Option<String>,
    pub speaker_type: Option<String>,
    pub truecase: Option<String>,
    pub truecase_text: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub entity_link: Option<String>,
    /// `None` when never set, `Some(None)` when explicitly set to null.
    pub timex: Option<Option<Timex>>,
}

impl Token {
    pub fn new(index: usize, word: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            word: Some(word.into()),
            ..Default::default()
        }
    }
}
