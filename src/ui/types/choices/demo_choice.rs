use crate::ui::types::choices::UIChoice;
use nbtrace::classifiers::{DEFAULT_ALPHA, DEFAULT_STD_FLOOR};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_true() -> bool {
    true
}
fn default_std_floor() -> f64 {
    DEFAULT_STD_FLOOR
}
fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SpamPresenceParams {
    #[serde(default = "default_true")]
    #[schemars(
        title = "Balanced priors",
        description = "Assume P(spam) = P(ham) = 0.5 instead of training frequencies?",
        default = "default_true"
    )]
    pub balanced_priors: bool,
}
impl Default for SpamPresenceParams {
    fn default() -> Self {
        Self {
            balanced_priors: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FruitMeasurementsParams {
    #[serde(default = "default_std_floor")]
    #[schemars(
        title = "Standard deviation floor",
        description = "Used when a feature has no spread within a class.",
        default = "default_std_floor",
        range(min = 0.0)
    )]
    pub std_floor: f64,
}
impl Default for FruitMeasurementsParams {
    fn default() -> Self {
        Self {
            std_floor: default_std_floor(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SpamWordCountsParams {
    #[serde(default = "default_alpha")]
    #[schemars(
        title = "Smoothing (alpha)",
        description = "Laplace smoothing added to every word count.",
        default = "default_alpha",
        range(min = 0.0)
    )]
    pub alpha: f64,
}
impl Default for SpamWordCountsParams {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(DemoKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum DemoChoice {
    #[strum_discriminants(strum(
        message = "Bernoulli: spam filter",
        detailed_message = "Presence of 'free' and 'win' in emails."
    ))]
    SpamPresence(SpamPresenceParams),
    #[strum_discriminants(strum(
        message = "Gaussian: fruit classifier",
        detailed_message = "Weight and sugar content of apples and bananas."
    ))]
    FruitMeasurements(FruitMeasurementsParams),
    #[strum_discriminants(strum(
        message = "Multinomial: text classifier",
        detailed_message = "Word counts of spam and ham documents."
    ))]
    SpamWordCounts(SpamWordCountsParams),
}

impl UIChoice for DemoChoice {
    type Kind = DemoKind;

    fn schema() -> Schema {
        schema_for!(DemoChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a demonstration:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        let params = match kind {
            DemoKind::SpamPresence => serde_json::to_value(SpamPresenceParams::default()),
            DemoKind::FruitMeasurements => serde_json::to_value(FruitMeasurementsParams::default()),
            DemoKind::SpamWordCounts => serde_json::to_value(SpamWordCountsParams::default()),
        };
        params.unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kebab_case_tags() {
        let v = serde_json::to_value(DemoChoice::SpamWordCounts(SpamWordCountsParams::default()))
            .unwrap();
        assert_eq!(v, json!({ "type": "spam-word-counts", "params": { "alpha": 1.0 } }));
    }

    #[test]
    fn from_parts_fills_missing_params_with_defaults() {
        let c = DemoChoice::from_parts(DemoKind::FruitMeasurements, json!({})).unwrap();
        assert_eq!(
            c,
            DemoChoice::FruitMeasurements(FruitMeasurementsParams::default())
        );
    }

    #[test]
    fn with_defaults_builds_every_kind() {
        assert_eq!(
            DemoChoice::with_defaults(DemoKind::SpamWordCounts).unwrap(),
            DemoChoice::SpamWordCounts(SpamWordCountsParams::default())
        );
        assert_eq!(
            DemoChoice::with_defaults(DemoKind::SpamPresence).unwrap(),
            DemoChoice::SpamPresence(SpamPresenceParams::default())
        );
    }

    #[test]
    fn ill_typed_params_name_the_kind() {
        let err = DemoChoice::from_parts(DemoKind::SpamWordCounts, json!({ "alpha": "one" }))
            .unwrap_err();
        assert!(err.to_string().contains("spam-word-counts"));
    }

    #[test]
    fn default_params_are_objects() {
        use strum::IntoEnumIterator;
        for kind in DemoKind::iter() {
            assert!(DemoChoice::default_params(kind).is_object());
        }
    }
}
