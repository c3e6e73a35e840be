use super::span::Span;

/// Speaker text used when attribution found nobody.
pub const UNKNOWN_SPEAKER: &str = "Unknown";

/// A direct quote and its attribution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quotation {
    pub index: Option<usize>,
    pub text: Option<String>,
    pub char_span: Option<Span>,
    pub token_span: Option<Span>,
    pub sentence_span: Option<Span>,
    pub speaker: Option<String>,
    pub canonical_speaker: Option<String>,
    /// Mention the quote was attributed to.
    pub mention: Option<String>,
    pub mention_span: Option<Span>,
    pub mention_type: Option<String>,
    /// Attribution sieve that picked the mention.
    pub mention_sieve: Option<String>,
    /// Attribution sieve that picked the speaker.
    pub speaker_sieve: Option<String>,
    pub canonical_mention: Option<String>,
    pub canonical_mention_span: Option<Span>,
}
