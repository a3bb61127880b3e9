use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use strum::{EnumMessage, IntoEnumIterator};

/// A serde-tagged enum the wizard can build one variant at a time.
///
/// Variants serialize as `{ "type": <kind>, "params": {..} }`; the wizard
/// picks a [`UIChoice::Kind`], fills `params` from the schema, and rebuilds.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    fn schema() -> Schema;

    fn prompt_label() -> &'static str {
        "Choose a type:"
    }

    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to navigate, ↵ to select")
    }

    fn default_params(kind: Self::Kind) -> Value;

    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let tag: &'static str = kind.into();
        let mut tagged = Map::new();
        tagged.insert("type".into(), Value::from(tag));
        tagged.insert("params".into(), params);
        serde_json::from_value(Value::Object(tagged))
            .with_context(|| format!("invalid parameters for '{tag}'"))
    }

    /// The variant for `kind` with every parameter at its default.
    fn with_defaults(kind: Self::Kind) -> Result<Self> {
        Self::from_parts(kind, Self::default_params(kind))
    }
}
