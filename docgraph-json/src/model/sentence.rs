use super::mention::{EntityMention, RelationTriple};
use super::token::Token;
use super::tree::{DependencyGraph, ParseTree};

/// Sentiment assigned to a sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sentiment {
    /// Class label, e.g. "Very positive".
    pub class: Option<String>,
    /// Predicted class index.
    pub value: Option<i32>,
    /// Probability per class, in class order.
    pub distribution: Option<Vec<f64>>,
    pub tree: Option<ParseTree>,
}

/// One sentence and everything attached to it.
///
/// The dependency graph fields distinguish "never set" (`None`) from
/// "explicitly null" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sentence {
    pub id: Option<String>,
    /// 0-based position in the document.
    pub index: Option<usize>,
    /// Document token offset of the first token.
    pub token_offset: Option<usize>,
    pub line: Option<usize>,
    pub paragraph: Option<usize>,
    pub speaker: Option<String>,
    pub speaker_type: Option<String>,
    pub parse: Option<ParseTree>,
    pub binary_parse: Option<ParseTree>,
    pub basic_dependencies: Option<Option<DependencyGraph>>,
    pub enhanced_dependencies: Option<Option<DependencyGraph>>,
    pub enhanced_plus_plus_dependencies: Option<Option<DependencyGraph>>,
    pub sentiment: Option<Sentiment>,
    pub openie: Option<Vec<RelationTriple>>,
    pub kbp: Option<Vec<RelationTriple>>,
    pub entity_mentions: Option<Vec<EntityMention>>,
    pub tokens: Option<Vec<Token>>,
}

impl Sentence {
    pub fn new(index: usize, tokens: Vec<Token>) -> Self {
        Self {
            index: Some(index),
            tokens: Some(tokens),
            ..Default::default()
        }
    }

    /// Word of the token with 1-based `index`.
    pub fn word_at(&self, index: usize) -> Option<&str> {
        let tokens = self.tokens.as_deref()?;
        let token = match tokens.get(index.checked_sub(1)?) {
            Some(t) if t.index.map_or(true, |i| i == index) => t,
            _ => tokens.iter().find(|t| t.index == Some(index))?,
        };
        token.word.as_deref()
    }
}
