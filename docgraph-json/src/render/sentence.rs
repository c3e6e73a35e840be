use tracing::trace;

use crate::model::{ParseTree, Sentence, Sentiment, UNPARSABLE_SENTINEL};
use crate::options::RenderOptions;
use crate::value::Value;
use crate::writer::ObjectWriter;
use crate::Result;

use super::{dependencies, mention, set_tri_state, token};

pub(crate) fn sentences_value<'d>(
    sentences: &'d [Sentence],
    options: &'d RenderOptions,
) -> Value<'d> {
    Value::seq(sentences.iter().map(move |s| Value::object(move |o| write_sentence(o, s, options))))
}

fn write_sentence(o: &mut ObjectWriter<'_, '_>, s: &Sentence, options: &RenderOptions) -> Result<()> {
    o.set("id", s.id.as_deref())?;
    o.set("index", s.index)?;
    o.set("line", s.line)?;
    o.set("paragraph", s.paragraph)?;
    o.set("speaker", s.speaker.as_deref())?;
    o.set("speakerType", s.speaker_type.as_deref())?;
    o.set("parse", printed_tree(s.parse.as_ref(), options))?;
    o.set("binaryParse", printed_tree(s.binary_parse.as_ref(), options))?;

    set_tri_state(o, "basicDependencies", &s.basic_dependencies, |g| {
        dependencies::graph_value(g, s)
    })?;
    set_tri_state(o, "enhancedDependencies", &s.enhanced_dependencies, |g| {
        dependencies::graph_value(g, s)
    })?;
    set_tri_state(
        o,
        "enhancedPlusPlusDependencies",
        &s.enhanced_plus_plus_dependencies,
        |g| dependencies::graph_value(g, s),
    )?;

    if let Some(sentiment) = &s.sentiment {
        write_sentiment(o, sentiment, options)?;
    }

    o.set("openie", s.openie.as_deref().map(mention::triples_value))?;
    o.set("kbp", s.kbp.as_deref().map(mention::triples_value))?;
    o.set(
        "entitymentions",
        s.entity_mentions.as_deref().map(|ms| mention::entity_mentions_value(ms, s)),
    )?;
    o.set("tokens", s.tokens.as_deref().map(token::tokens_value))
}

fn write_sentiment(
    o: &mut ObjectWriter<'_, '_>,
    sentiment: &Sentiment,
    options: &RenderOptions,
) -> Result<()> {
    o.set("sentimentValue", sentiment.value.map(|v| v.to_string()))?;
    o.set("sentiment", sentiment.class.as_deref().map(|c| c.replace(' ', "")))?;
    o.set("sentimentDistribution", sentiment.distribution.as_deref())?;
    o.set("sentimentTree", printed_tree(sentiment.tree.as_ref(), options))
}

/// Printed tree text, or `None` when the tree is missing or unparsable.
fn printed_tree(tree: Option<&ParseTree>, options: &RenderOptions) -> Option<String> {
    let printed = options.print_tree(tree?);
    let printed = printed.trim();
    if printed == UNPARSABLE_SENTINEL {
        trace!("suppressing unparsable parse tree");
        return None;
    }
    Some(printed.to_string())
}
