//! docgraph-json
//!
//! Canonical JSON rendering for annotated document graphs. Walks a populated
//! [`Document`] (sentences, tokens, parses, dependencies, coreference,
//! quotes, sections) and streams it out as one JSON object with a fixed key
//! order. Output only; nothing is parsed back.
//!
//! # Architecture
//!
//! - **writer.rs** - Streaming writer: brackets, keys, scalars, indentation
//! - **format.rs** - String escaping and locale-independent number formatting
//! - **value.rs** - Closed `Value` sum type for everything renderable
//! - **dispatch.rs** - Classifies a `Value` and writes it, recursing as needed
//! - **render/** - One renderer per annotation type, plus the document walker
//! - **model/** - Read-only annotation graph types
//! - **options.rs** - `RenderOptions` and pluggable tree printers
//!
//! # Example
//!
//! ```
//! use docgraph_json::{render_to_string, Document, RenderOptions};
//!
//! let doc = Document {
//!     text: Some("Hello world.".to_string()),
//!     ..Document::new("0001")
//! };
//! let options = RenderOptions::new().with_include_text(true);
//! let json = render_to_string(&doc, &options).unwrap();
//! assert_eq!(json, r#"{"docId": "0001", "text": "Hello world."}"#);
//! ```

pub mod dispatch;
pub mod error;
pub mod format;
pub mod model;
pub mod options;
pub mod render;
pub mod value;
pub mod writer;

pub use dispatch::write_value;
pub use error::{Error, Result};
pub use format::Numeric;
pub use model::{
    Animacy, CorefChain, CorefMention, DependencyEdge, DependencyGraph, Document, EntityMention,
    Gender, MentionType, NerConfidences, Number, ParseTree, Quotation, RelationTriple, Section,
    Sentence, Sentiment, Span, Timex, TimexRange, Token, TripleSpans,
};
pub use options::{OneLinePrinter, PennPrinter, RenderOptions, TreePrinter};
pub use render::{build_object, coref_chain_value, render_to_sink, render_to_string};
pub use value::{LazySeq, ObjectFn, Primitives, Symbol, Value};
pub use writer::{JsonWriter, ObjectWriter, Scalar};
