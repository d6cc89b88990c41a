// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-dimension feature vector carried by every viewing zone.

use serde::{Deserialize, Serialize};

/// Number of components in every viewing zone embedding.
pub const EMBEDDING_DIMENSION: usize = 128;

/// A feature vector of exactly [`EMBEDDING_DIMENSION`] components.
///
/// Shorter input is zero-padded, longer input truncated and non-finite
/// components zeroed, both at construction and when read back from a
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f32>", into = "Vec<f32>")]
pub struct VectorEmbedding {
    values: Vec<f32>,
}

impl VectorEmbedding {
    /// Creates the all-zero embedding.
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            values: vec![0.0; EMBEDDING_DIMENSION],
        }
    }

    /// Creates an embedding from a feature list of any length.
    #[must_use]
    pub fn from_features(features: &[f32]) -> Self {
        Self::from(features.to_vec())
    }

    /// Returns the components.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Returns the number of components, always [`EMBEDDING_DIMENSION`].
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Returns whether every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|value| *value == 0.0)
    }
}

impl Default for VectorEmbedding {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<Vec<f32>> for VectorEmbedding {
    fn from(mut values: Vec<f32>) -> Self {
        values.resize(EMBEDDING_DIMENSION, 0.0);
        for value in &mut values {
            if !value.is_finite() {
                *value = 0.0;
            }
        }
        Self { values }
    }
}

impl From<VectorEmbedding> for Vec<f32> {
    fn from(embedding: VectorEmbedding) -> Self {
        embedding.values
    }
}
