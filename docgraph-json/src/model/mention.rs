use super::span::Span;
use super::timex::Timex;
use super::token::NerConfidences;

/// A recognized named entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityMention {
    pub text: Option<String>,
    /// Token offsets within the whole document.
    pub token_span: Option<Span>,
    pub char_span: Option<Span>,
    pub ner: Option<String>,
    pub normalized_ner: Option<String>,
    pub entity_link: Option<String>,
    pub ner_confidences: Option<NerConfidences>,
    pub timex: Option<Timex>,
}

/// An extracted (subject, relation, object) fact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationTriple {
    pub subject: Option<String>,
    pub relation: Option<String>,
    pub object: Option<String>,
    /// Sentence token spans of subject, relation, and object.
    pub spans: Option<TripleSpans>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripleSpans {
    pub subject: Span,
    pub relation: Span,
    pub object: Span,
}

impl RelationTriple {
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: Some(subject.into()),
            relation: Some(relation.into()),
            object: Some(object.into()),
            spans: None,
        }
    }

    pub fn with_spans(mut self, subject: Span, relation: Span, object: Span) -> Self {
        self.spans = Some(TripleSpans { subject, relation, object });
        self
    }
}
