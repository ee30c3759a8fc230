use crate::classifier::interface::Classifier;
use crate::classifier::kernel::Kernel;
use crate::error::LoadError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SvmError {
    #[error("an SVM needs at least two classes, got {0}")]
    TooFewClasses(usize),
    #[error("n_support has {got} entries for {classes} classes")]
    SupportGroups { classes: usize, got: usize },
    #[error("n_support sums to {expected} but {got} support vectors are present")]
    SupportCount { expected: usize, got: usize },
    #[error("support vector {index} has {got} features, expected {expected}")]
    SupportVectorDimension {
        index: usize,
        expected: usize,
        got: usize,
    },
    #[error("dual_coef is {rows}x{columns}, expected {expected_rows}x{expected_columns}")]
    DualCoefShape {
        rows: usize,
        columns: usize,
        expected_rows: usize,
        expected_columns: usize,
    },
    #[error("intercept has {got} entries, expected one per class pair ({expected})")]
    InterceptLength { expected: usize, got: usize },
    #[error("X has {got} features, but the SVM is expecting {expected} features as input")]
    FeatureCount { expected: usize, got: usize },
}

#[derive(Debug, Clone, Deserialize)]
struct SvmParams {
    kernel: Kernel,
    classes: Vec<i64>,
    n_support: Vec<usize>,
    support_vectors: Vec<Vec<f64>>,
    dual_coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

/// One-vs-one C-SVC over precomputed support vectors.
///
/// Coefficients use the libsvm sign convention: a positive decision value
/// for the pair `(i, j)` is a vote for class `i`.
#[derive(Debug, Clone)]
pub struct ClassifierSvm {
    kernel: Kernel,
    classes: Vec<i64>,
    support_vectors: Vec<Vec<f64>>,
    dual_coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    /// Offset of each class's first support vector.
    starts: Vec<usize>,
    n_support: Vec<usize>,
    n_features: usize,
}

impl ClassifierSvm {
    fn new(params: SvmParams) -> Result<Self, SvmError> {
        let SvmParams {
            kernel,
            classes,
            n_support,
            support_vectors,
            dual_coef,
            intercept,
        } = params;

        let n_classes = classes.len();
        if n_classes < 2 {
            return Err(SvmError::TooFewClasses(n_classes));
        }

        if n_support.len() != n_classes {
            return Err(SvmError::SupportGroups {
                classes: n_classes,
                got: n_support.len(),
            });
        }

        let n_sv: usize = n_support.iter().sum();
        if n_sv != support_vectors.len() {
            return Err(SvmError::SupportCount {
                expected: n_sv,
                got: support_vectors.len(),
            });
        }

        let n_features = support_vectors.first().map(Vec::len).unwrap_or(0);
        if let Some((index, sv)) = support_vectors
            .iter()
            .enumerate()
            .find(|(_, sv)| sv.len() != n_features)
        {
            return Err(SvmError::SupportVectorDimension {
                index,
                expected: n_features,
                got: sv.len(),
            });
        }

        let columns_ok = dual_coef.iter().all(|row| row.len() == n_sv);
        if dual_coef.len() != n_classes - 1 || !columns_ok {
            return Err(SvmError::DualCoefShape {
                rows: dual_coef.len(),
                columns: dual_coef
                    .iter()
                    .map(Vec::len)
                    .find(|len| *len != n_sv)
                    .unwrap_or(n_sv),
                expected_rows: n_classes - 1,
                expected_columns: n_sv,
            });
        }

        let n_pairs = n_classes * (n_classes - 1) / 2;
        if intercept.len() != n_pairs {
            return Err(SvmError::InterceptLength {
                expected: n_pairs,
                got: intercept.len(),
            });
        }

        let starts = n_support
            .iter()
            .scan(0, |offset, count| {
                let start = *offset;
                *offset += count;
                Some(start)
            })
            .collect();

        Ok(Self {
            kernel,
            classes,
            support_vectors,
            dual_coef,
            intercept,
            starts,
            n_support,
            n_features,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let params: SvmParams = serde_json::from_str(json)?;
        Ok(Self::new(params)?)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let read = || -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
            let json = std::fs::read_to_string(path)?;
            Self::from_json(&json)
        };

        read().map_err(|e| LoadError::new("classifier", path, e))
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Decision value of every class pair `(i, j)`, `i < j`, in order.
    pub fn decision_function(&self, features: &[f32]) -> Result<Vec<f64>, SvmError> {
        if features.len() != self.n_features {
            return Err(SvmError::FeatureCount {
                expected: self.n_features,
                got: features.len(),
            });
        }

        let features: Vec<f64> = features.iter().map(|v| *v as f64).collect();
        let kernel_values: Vec<f64> = self
            .support_vectors
            .iter()
            .map(|sv| self.kernel.compute(sv, &features))
            .collect();

        let n_classes = self.classes.len();
        let mut decisions = Vec::with_capacity(self.intercept.len());
        let mut pair = 0;

        for i in 0..n_classes {
            for j in (i + 1)..n_classes {
                let sum_i = self.weighted_sum(&kernel_values, i, j - 1);
                let sum_j = self.weighted_sum(&kernel_values, j, i);
                decisions.push(sum_i + sum_j + self.intercept[pair]);
                pair += 1;
            }
        }

        Ok(decisions)
    }

    /// Support vectors of `class` weighted by row `row` of the dual coefficients.
    fn weighted_sum(&self, kernel_values: &[f64], class: usize, row: usize) -> f64 {
        let start = self.starts[class];
        let end = start + self.n_support[class];

        self.dual_coef[row][start..end]
            .iter()
            .zip(&kernel_values[start..end])
            .map(|(coef, k)| coef * k)
            .sum()
    }

    fn vote(&self, decisions: &[f64]) -> usize {
        let n_classes = self.classes.len();
        let mut votes = vec![0usize; n_classes];
        let mut pair = 0;

        for i in 0..n_classes {
            for j in (i + 1)..n_classes {
                if decisions[pair] > 0.0 {
                    votes[i] += 1;
                } else {
                    votes[j] += 1;
                }
                pair += 1;
            }
        }

        // First class wins ties.
        let mut winner = 0;
        for (class, count) in votes.iter().enumerate() {
            if *count > votes[winner] {
                winner = class;
            }
        }
        winner
    }
}

impl Classifier for ClassifierSvm {
    fn predict(&self, features: &[f32]) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let decisions = self.decision_function(features)?;
        Ok(self.classes[self.vote(&decisions)])
    }
}
