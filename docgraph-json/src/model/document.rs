use super::coref::CorefChain;
use super::quote::Quotation;
use super::sentence::Sentence;
use super::token::Token;

/// A structural span of the document, such as a post in a forum thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub char_begin: Option<usize>,
    pub char_end: Option<usize>,
    pub author: Option<String>,
    pub date_time: Option<String>,
    /// Indexes of the sentences inside this section, in order.
    pub sentence_indexes: Vec<usize>,
}

/// One processed text and all of its annotations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub id: Option<String>,
    pub date: Option<String>,
    pub source_type: Option<String>,
    pub doc_type: Option<String>,
    pub author: Option<String>,
    pub location: Option<String>,
    pub text: Option<String>,
    pub sentences: Option<Vec<Sentence>>,
    pub sections: Option<Vec<Section>>,
    /// Document-level tokens, used when there are no sentences.
    pub tokens: Option<Vec<Token>>,
    pub quotes: Option<Vec<Quotation>>,
    pub coref_chains: Option<Vec<CorefChain>>,
}

impl Document {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Default::default() }
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.as_ref().map_or(0, Vec::len)
    }
}
