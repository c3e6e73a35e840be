//! Fixture loading from YAML files

use serde::Deserialize;
use std::path::Path;

/// A scalar rendering case: one input value and its expected JSON text.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalarCase {
    pub id: String,
    pub desc: String,
    pub input: ScalarInput,
    pub json: String,
}

/// Typed input of a scalar case.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ScalarInput {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// A float that YAML cannot spell portably: `nan`, `inf`, `-inf`.
    Special(String),
}

/// Load all cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<ScalarCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<ScalarCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}
