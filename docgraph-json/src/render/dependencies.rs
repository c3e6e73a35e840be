use crate::model::{DependencyEdge, DependencyGraph, Sentence};
use crate::value::Value;

const ROOT: &str = "ROOT";

/// A dependency graph as an edge list: one `ROOT` entry per root, then the
/// edges in source order. Glosses are the words at the 1-based token indexes.
pub(crate) fn graph_value<'d>(graph: &'d DependencyGraph, sentence: &'d Sentence) -> Value<'d> {
    let roots = graph.roots.iter().map(move |&root| {
        Value::object(move |o| {
            o.set("dep", ROOT)?;
            o.set("governor", 0usize)?;
            o.set("governorGloss", ROOT)?;
            o.set("dependent", root)?;
            o.set("dependentGloss", sentence.word_at(root))
        })
    });
    let edges = graph.edges.iter().map(move |edge| edge_value(edge, sentence));
    Value::seq(roots.chain(edges))
}

fn edge_value<'d>(edge: &'d DependencyEdge, sentence: &'d Sentence) -> Value<'d> {
    Value::object(move |o| {
        let relation = if edge.relation == "root" { ROOT } else { edge.relation.as_str() };
        o.set("dep", relation)?;
        o.set("governor", edge.governor)?;
        o.set("governorGloss", sentence.word_at(edge.governor))?;
        o.set("dependent", edge.dependent)?;
        o.set("dependentGloss", sentence.word_at(edge.dependent))
    })
}
