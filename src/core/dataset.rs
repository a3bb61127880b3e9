use crate::core::header::DatasetHeader;
use crate::error::NaiveBayesError;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledVector {
    pub class_index: usize,
    pub values: Vec<f64>,
}

/// Ordered labeled training vectors sharing one feature count.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<DatasetHeader>,
    rows: Vec<LabeledVector>,
}

impl Dataset {
    pub fn new(header: Arc<DatasetHeader>) -> Dataset {
        Dataset {
            header,
            rows: Vec::new(),
        }
    }

    /// Builds a dataset from one group of rows per class, in header class order.
    pub fn from_class_groups(
        header: Arc<DatasetHeader>,
        groups: Vec<Vec<Vec<f64>>>,
    ) -> Result<Dataset, NaiveBayesError> {
        NaiveBayesError::check_len("class groups", header.number_of_classes(), groups.len())?;
        let mut dataset = Dataset::new(header);
        for (class_index, group) in groups.into_iter().enumerate() {
            for values in group {
                dataset.push(class_index, values)?;
            }
        }
        Ok(dataset)
    }

    pub fn push(&mut self, class_index: usize, values: Vec<f64>) -> Result<(), NaiveBayesError> {
        if class_index >= self.header.number_of_classes() {
            return Err(NaiveBayesError::InvalidInput(format!(
                "class index {class_index} out of range for {} classes",
                self.header.number_of_classes()
            )));
        }
        NaiveBayesError::check_len(
            "training vector",
            self.header.number_of_features(),
            values.len(),
        )?;
        self.rows.push(LabeledVector {
            class_index,
            values,
        });
        Ok(())
    }

    pub fn push_labeled(&mut self, label: &str, values: Vec<f64>) -> Result<(), NaiveBayesError> {
        let class_index = self.header.index_of_class(label).ok_or_else(|| {
            NaiveBayesError::InvalidInput(format!("unknown class label '{label}'"))
        })?;
        self.push(class_index, values)
    }

    pub fn header(&self) -> &DatasetHeader {
        &self.header
    }

    pub fn shared_header(&self) -> Arc<DatasetHeader> {
        Arc::clone(&self.header)
    }

    pub fn rows(&self) -> &[LabeledVector] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn number_of_features(&self) -> usize {
        self.header.number_of_features()
    }

    pub fn number_of_classes(&self) -> usize {
        self.header.number_of_classes()
    }

    /// Training vectors of one class, in insertion order.
    pub fn class_rows(&self, class_index: usize) -> Vec<&[f64]> {
        self.rows
            .iter()
            .filter(|r| r.class_index == class_index)
            .map(|r| r.values.as_slice())
            .collect()
    }

    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.number_of_classes()];
        for row in &self.rows {
            counts[row.class_index] += 1;
        }
        counts
    }

    pub fn check_query(&self, query: &[f64]) -> Result<(), NaiveBayesError> {
        NaiveBayesError::check_len("query", self.number_of_features(), query.len())
    }
}
