//! Test infrastructure for docgraph-json
//!
//! Provides fixture loading, sample documents, seeded document generation,
//! and JSON assertion helpers.

#![allow(dead_code)]

mod generators;
mod loader;
mod samples;

pub use generators::Gen;
pub use loader::{load_fixtures_by_name, ScalarCase, ScalarInput};
pub use samples::sample_document;

use docgraph_json::{render_to_string, Document, RenderOptions};
use serde_json::Value as Json;

/// Render compact output, panicking on error.
pub fn compact(doc: &Document) -> String {
    render_to_string(doc, &RenderOptions::default())
        .unwrap_or_else(|e| panic!("render failed: {}", e))
}

/// Render pretty output, panicking on error.
pub fn pretty(doc: &Document) -> String {
    render_to_string(doc, &RenderOptions::new().with_pretty(true))
        .unwrap_or_else(|e| panic!("render failed: {}", e))
}

/// Parse rendered output back, panicking with the text on failure.
pub fn parse(json: &str) -> Json {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("invalid JSON ({}):\n{}", e, json))
}

/// Keys of a JSON object in output order.
///
/// `serde_json` is built without `preserve_order`, so the order is recovered
/// from the text by re-serializing each key and finding it in sequence.
pub fn keys_in_order(json: &str) -> Vec<String> {
    let value = parse(json);
    let Json::Object(map) = value else {
        panic!("not an object: {}", json);
    };
    let mut keys: Vec<(usize, String)> = map
        .keys()
        .map(|k| {
            let needle = format!("{}: ", serde_json::to_string(k).unwrap());
            let at = top_level_position(json, &needle)
                .unwrap_or_else(|| panic!("key {} not found at top level", k));
            (at, k.clone())
        })
        .collect();
    keys.sort();
    keys.into_iter().map(|(_, k)| k).collect()
}

/// Byte offset of `needle` at nesting depth 1, outside of strings.
fn top_level_position(json: &str, needle: &str) -> Option<usize> {
    let bytes = json.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'{' | b'[' => depth += 1,
            b'}' | b']' => depth = depth.saturating_sub(1),
            b'"' => {
                if depth == 1 && json[i..].starts_with(needle) {
                    return Some(i);
                }
                in_string = true;
            }
            _ => {}
        }
    }
    None
}

/// Remove insignificant whitespace from rendered JSON.
pub fn strip_whitespace(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;
    for c in json.chars() {
        if in_string {
            out.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if !c.is_whitespace() {
            out.push(c);
        }
    }
    out
}
