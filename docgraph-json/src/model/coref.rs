//! Coreference chains.

use super::span::Span;
use crate::value::{symbol_value, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionType {
    Pronominal,
    Nominal,
    Proper,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Neutral,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animacy {
    Animate,
    Inanimate,
    Unknown,
}

impl Symbol for MentionType {
    fn symbol(&self) -> &'static str {
        match self {
            MentionType::Pronominal => "PRONOMINAL",
            MentionType::Nominal => "NOMINAL",
            MentionType::Proper => "PROPER",
            MentionType::List => "LIST",
        }
    }
}

impl Symbol for Number {
    fn symbol(&self) -> &'static str {
        match self {
            Number::Singular => "SINGULAR",
            Number::Plural => "PLURAL",
            Number::Unknown => "UNKNOWN",
        }
    }
}

impl Symbol for Gender {
    fn symbol(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Neutral => "NEUTRAL",
            Gender::Unknown => "UNKNOWN",
        }
    }
}

impl Symbol for Animacy {
    fn symbol(&self) -> &'static str {
        match self {
            Animacy::Animate => "ANIMATE",
            Animacy::Inanimate => "INANIMATE",
            Animacy::Unknown => "UNKNOWN",
        }
    }
}

symbol_value!(MentionType, Number, Gender, Animacy);

/// One mention in a chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorefMention {
    pub id: Option<u32>,
    pub text: Option<String>,
    pub mention_type: Option<MentionType>,
    pub number: Option<Number>,
    pub gender: Option<Gender>,
    pub animacy: Option<Animacy>,
    /// 1-based sentence number.
    pub sentence_index: Option<usize>,
    /// Sentence token span, 1-based and end-exclusive.
    pub token_span: Option<Span>,
    pub head_index: Option<usize>,
    pub char_span: Option<Span>,
    /// (sentence number, mention number within the sentence).
    pub position: Option<(usize, usize)>,
}

/// All mentions of one entity across the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorefChain {
    pub id: Option<i32>,
    /// Mentions in textual order.
    pub mentions: Vec<CorefMention>,
    /// Index into `mentions` of the representative mention.
    pub representative: Option<usize>,
}

impl CorefChain {
    pub fn new(id: i32, mentions: Vec<CorefMention>) -> Self {
        Self { id: Some(id), mentions, representative: None }
    }

    pub fn with_representative(mut self, index: usize) -> Self {
        self.representative = Some(index);
        self
    }

    /// The designated representative, if it is set and points at a mention.
    pub fn representative_mention(&self) -> Option<&CorefMention> {
        self.representative.and_then(|i| self.mentions.get(i))
    }

    /// Whether `mention` is the representative itself. Compared by identity:
    /// an equal mention elsewhere in the chain does not count.
    pub fn is_representative(&self, mention: &CorefMention) -> bool {
        self.representative_mention()
            .is_some_and(|rep| std::ptr::eq(rep, mention))
    }
}
