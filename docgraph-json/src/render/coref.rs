use std::collections::HashSet;

use tracing::warn;

use crate::model::{CorefChain, CorefMention};
use crate::value::Value;

/// The `corefs` table: one entry per chain, keyed by the decimal chain id.
///
/// Keys are unique. When two chains share an id only the first is written.
pub(crate) fn corefs_value(chains: &[CorefChain]) -> Value<'_> {
    Value::object(move |o| {
        let mut seen = HashSet::with_capacity(chains.len());
        for chain in chains {
            let Some(id) = chain.id else {
                continue;
            };
            if !seen.insert(id) {
                warn!(chain_id = id, "duplicate coreference chain id, keeping the first");
                continue;
            }
            o.set(id.to_string().as_str(), coref_chain_value(chain))?;
        }
        Ok(())
    })
}

/// One coreference chain as `{id, mentions}`.
///
/// A chain without a usable representative still renders; every mention
/// then reports `isRepresentativeMention: false`.
pub fn coref_chain_value(chain: &CorefChain) -> Value<'_> {
    Value::object(move |o| {
        if let Some(index) = chain.representative {
            if index >= chain.mentions.len() {
                warn!(
                    chain_id = ?chain.id,
                    representative = index,
                    mentions = chain.mentions.len(),
                    "representative mention out of range"
                );
            }
        }
        o.set("id", chain.id)?;
        o.set(
            "mentions",
            Value::seq(
                chain
                    .mentions
                    .iter()
                    .map(move |m| mention_value(m, chain.is_representative(m))),
            ),
        )
    })
}

fn mention_value(mention: &CorefMention, representative: bool) -> Value<'_> {
    Value::object(move |o| {
        let tokens = mention.token_span;
        o.set("id", mention.id)?;
        o.set("text", mention.text.as_deref())?;
        o.set("type", mention.mention_type)?;
        o.set("number", mention.number)?;
        o.set("gender", mention.gender)?;
        o.set("animacy", mention.animacy)?;
        o.set("startIndex", tokens.and_then(|s| s.begin))?;
        o.set("endIndex", tokens.and_then(|s| s.end))?;
        o.set("headIndex", mention.head_index)?;
        o.set("sentNum", mention.sentence_index)?;
        o.set("characterSpan", mention.char_span)?;
        o.set("position", mention.position)?;
        o.set("isRepresentativeMention", representative)
    })
}
