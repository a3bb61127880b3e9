use crate::classifiers::LikelihoodModel;
use crate::classifiers::bayes::{BernoulliModel, GaussianModel, MultinomialModel};
use crate::core::Vocabulary;
use crate::error::NaiveBayesError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Value, json};
use std::str::FromStr;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

pub const DEFAULT_STD_FLOOR: f64 = 1e-4;
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Empty parameter object so every variant still carries "params"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct NoModelParams {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GaussianParams {
    #[serde(default = "default_std_floor")]
    #[schemars(
        title = "Standard Deviation Floor",
        description = "Substituted when a class feature has zero spread",
        range(min = 0.0)
    )]
    pub std_floor: f64,
}

impl Default for GaussianParams {
    fn default() -> Self {
        Self {
            std_floor: DEFAULT_STD_FLOOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MultinomialParams {
    #[serde(default = "default_alpha")]
    #[schemars(
        title = "Smoothing (alpha)",
        description = "Added to every word count before normalizing",
        range(min = 0.0)
    )]
    pub alpha: f64,

    #[serde(default)]
    #[schemars(skip)]
    pub vocabulary: Option<Vocabulary>,
}

impl Default for MultinomialParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            vocabulary: None,
        }
    }
}

fn default_std_floor() -> f64 {
    DEFAULT_STD_FLOOR
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

/// Likelihood model variant and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ModelKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ModelSpec {
    #[strum_discriminants(strum(
        message = "Bernoulli",
        detailed_message = "Binary presence features with add-one smoothing."
    ))]
    Bernoulli(NoModelParams),
    #[strum_discriminants(strum(
        message = "Gaussian",
        detailed_message = "Continuous features with a normal density per class."
    ))]
    Gaussian(GaussianParams),
    #[strum_discriminants(strum(
        message = "Multinomial",
        detailed_message = "Word counts over a fixed vocabulary with Laplace smoothing."
    ))]
    Multinomial(MultinomialParams),
}

impl Serialize for ModelKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name: &'static str = (*self).into();
        serializer.serialize_str(name)
    }
}

impl ModelSpec {
    pub fn bernoulli() -> Self {
        ModelSpec::Bernoulli(NoModelParams::default())
    }

    pub fn gaussian() -> Self {
        ModelSpec::Gaussian(GaussianParams::default())
    }

    pub fn multinomial(vocabulary: Vocabulary) -> Self {
        ModelSpec::Multinomial(MultinomialParams {
            vocabulary: Some(vocabulary),
            ..MultinomialParams::default()
        })
    }

    pub fn kind(&self) -> ModelKind {
        ModelKind::from(self)
    }

    /// Builds a spec from a variant name such as `"multinomial"` and its params.
    pub fn from_parts(kind_name: &str, params: Value) -> Result<ModelSpec, NaiveBayesError> {
        let kind = ModelKind::from_str(kind_name).map_err(|_| {
            NaiveBayesError::Configuration(format!("unknown model variant '{kind_name}'"))
        })?;
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        serde_json::from_value(v).map_err(|e| NaiveBayesError::Configuration(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<ModelSpec, NaiveBayesError> {
        serde_json::from_str(text).map_err(|e| NaiveBayesError::Configuration(e.to_string()))
    }

    /// Validates the parameters and instantiates the model.
    pub fn build(&self) -> Result<Box<dyn LikelihoodModel>, NaiveBayesError> {
        match self {
            ModelSpec::Bernoulli(_) => Ok(Box::new(BernoulliModel::new())),
            ModelSpec::Gaussian(p) => Ok(Box::new(GaussianModel::new(p.std_floor)?)),
            ModelSpec::Multinomial(p) => {
                let vocabulary = p.vocabulary.clone().ok_or_else(|| {
                    NaiveBayesError::Configuration(
                        "multinomial model requires a vocabulary".into(),
                    )
                })?;
                vocabulary.validate()?;
                Ok(Box::new(MultinomialModel::new(p.alpha, vocabulary)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_kebab_case() {
        assert_eq!(ModelSpec::gaussian().kind().to_string(), "gaussian");
        assert_eq!(
            serde_json::to_string(&ModelKind::Multinomial).unwrap(),
            r#""multinomial""#
        );
    }

    #[test]
    fn unknown_variant_is_a_configuration_error() {
        let err = ModelSpec::from_parts("poisson", json!({})).unwrap_err();
        assert!(matches!(err, NaiveBayesError::Configuration(_)));

        let err = ModelSpec::from_json(r#"{"type":"poisson","params":{}}"#).unwrap_err();
        assert!(matches!(err, NaiveBayesError::Configuration(_)));
    }

    #[test]
    fn defaults_are_filled_from_empty_params() {
        let g = ModelSpec::from_parts("gaussian", json!({})).unwrap();
        assert_eq!(g, ModelSpec::gaussian());

        let m = ModelSpec::from_json(r#"{"type":"multinomial","params":{"vocabulary":["a","b"]}}"#)
            .unwrap();
        match m {
            ModelSpec::Multinomial(p) => {
                assert_eq!(p.alpha, DEFAULT_ALPHA);
                assert_eq!(p.vocabulary.unwrap().size(), 2);
            }
            other => panic!("unexpected spec {other:?}"),
        }
    }

    #[test]
    fn multinomial_without_vocabulary_fails_at_build() {
        let spec = ModelSpec::from_parts("multinomial", json!({ "alpha": 1.0 })).unwrap();
        assert!(matches!(
            spec.build().map(|_| ()),
            Err(NaiveBayesError::Configuration(_))
        ));
    }

    #[test]
    fn invalid_parameters_fail_at_build() {
        let spec = ModelSpec::Gaussian(GaussianParams { std_floor: 0.0 });
        assert!(spec.build().is_err());

        let vocabulary = Vocabulary::from_words(&["a"]).unwrap();
        let spec = ModelSpec::Multinomial(MultinomialParams {
            alpha: -1.0,
            vocabulary: Some(vocabulary),
        });
        assert!(spec.build().is_err());
    }

    #[test]
    fn built_model_reports_its_kind() {
        let model = ModelSpec::bernoulli().build().unwrap();
        assert_eq!(model.kind(), ModelKind::Bernoulli);
    }
}
