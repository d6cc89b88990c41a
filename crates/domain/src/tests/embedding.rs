// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EMBEDDING_DIMENSION, VectorEmbedding};

#[test]
fn test_zero_embedding_has_fixed_dimension() {
    let embedding: VectorEmbedding = VectorEmbedding::zeros();

    assert_eq!(embedding.dimension(), EMBEDDING_DIMENSION);
    assert!(embedding.is_zero());
}

#[test]
fn test_short_features_are_zero_padded() {
    let embedding: VectorEmbedding = VectorEmbedding::from_features(&[0.5, 0.25]);

    assert_eq!(embedding.dimension(), 128);
    assert!((embedding.as_slice()[0] - 0.5).abs() < f32::EPSILON);
    assert!((embedding.as_slice()[1] - 0.25).abs() < f32::EPSILON);
    assert!(embedding.as_slice()[2..].iter().all(|v| *v == 0.0));
}

#[test]
fn test_long_features_are_truncated() {
    let features: Vec<f32> = vec![1.0; 200];
    let embedding: VectorEmbedding = VectorEmbedding::from_features(&features);

    assert_eq!(embedding.dimension(), 128);
    assert!(embedding.as_slice().iter().all(|v| (*v - 1.0).abs() < f32::EPSILON));
}

#[test]
fn test_deserialized_embedding_is_normalized() {
    let embedding: VectorEmbedding = serde_json::from_str("[1.0, 2.0, 3.0]").unwrap();

    assert_eq!(embedding.dimension(), 128);
    assert!((embedding.as_slice()[2] - 3.0).abs() < f32::EPSILON);

    let json: String = serde_json::to_string(&embedding).unwrap();
    let values: Vec<f32> = serde_json::from_str(&json).unwrap();
    assert_eq!(values.len(), 128);
}

#[test]
fn test_non_finite_features_are_zeroed() {
    let embedding: VectorEmbedding =
        VectorEmbedding::from_features(&[f32::NAN, 0.5, f32::INFINITY]);

    assert!(embedding.as_slice()[0].abs() < f32::EPSILON);
    assert!((embedding.as_slice()[1] - 0.5).abs() < f32::EPSILON);
    assert!(embedding.as_slice()[2].abs() < f32::EPSILON);
    assert!(embedding.as_slice().iter().all(|v| v.is_finite()));
}
