//! The annotation graph, as handed over by the upstream pipeline.
//!
//! Every field is optional. These types are read, never modified, while a
//! document is rendered.

mod coref;
mod document;
mod mention;
mod quote;
mod sentence;
mod span;
mod timex;
mod token;
mod tree;

pub use coref::{Animacy, CorefChain, CorefMention, Gender, MentionType, Number};
pub use document::{Document, Section};
pub use mention::{EntityMention, RelationTriple, TripleSpans};
pub use quote::{Quotation, UNKNOWN_SPEAKER};
pub use sentence::{Sentence, Sentiment};
pub use span::Span;
pub use timex::{Timex, TimexRange};
pub use token::{NerConfidences, Token, NO_ENTITY};
pub use tree::{DependencyEdge, DependencyGraph, ParseTree, UNPARSABLE_SENTINEL};
