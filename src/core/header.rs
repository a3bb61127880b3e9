use crate::error::NaiveBayesError;
use serde::Serialize;
use std::collections::HashMap;

/// Names the features and classes of a [`Dataset`](crate::core::Dataset).
///
/// The order of `class_labels` is the fixed class ordering used by class
/// statistics, priors and posteriors, and it decides exact ties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetHeader {
    pub relation_name: String,
    pub feature_names: Vec<String>,
    pub class_labels: Vec<String>,
    #[serde(skip)]
    label_to_index: HashMap<String, usize>,
}

impl DatasetHeader {
    pub fn new(
        relation_name: String,
        feature_names: Vec<String>,
        class_labels: Vec<String>,
    ) -> Result<DatasetHeader, NaiveBayesError> {
        if feature_names.is_empty() {
            return Err(NaiveBayesError::InvalidInput(
                "a dataset needs at least one feature".into(),
            ));
        }
        if class_labels.is_empty() {
            return Err(NaiveBayesError::InvalidInput(
                "a dataset needs at least one class".into(),
            ));
        }

        let mut label_to_index = HashMap::with_capacity(class_labels.len());
        for (i, label) in class_labels.iter().enumerate() {
            if label_to_index.insert(label.clone(), i).is_some() {
                return Err(NaiveBayesError::InvalidInput(format!(
                    "duplicate class label '{label}'"
                )));
            }
        }

        Ok(DatasetHeader {
            relation_name,
            feature_names,
            class_labels,
            label_to_index,
        })
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_features(&self) -> usize {
        self.feature_names.len()
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_labels.len()
    }

    pub fn feature_name(&self, index: usize) -> Option<&str> {
        self.feature_names.get(index).map(String::as_str)
    }

    pub fn class_label(&self, index: usize) -> Option<&str> {
        self.class_labels.get(index).map(String::as_str)
    }

    pub fn index_of_class(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }
}
