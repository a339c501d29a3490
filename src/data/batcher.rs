// ============================================================
// Layer 4 — Bag-of-Words Batcher
// ============================================================
// Implements burn's Batcher trait so vectorised samples can be
// fed to a model as tensors.
//
//   Input:  N BowSamples, each with V features
//   Output: BowBatch { features: [N, V] floats, labels: [N] ints }
//
// Features are flattened row by row and reshaped:
//   [s1_f1, ..., s1_fV, s2_f1, ..., sN_fV] → [N, V]
//
// All samples in a batch must come from the same vocabulary,
// so they share one length.

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::BowSample;

/// A batch of bag-of-words samples ready for a forward pass.
#[derive(Debug, Clone)]
pub struct BowBatch<B: Backend> {
    /// Shape: [batch_size, vocab_size]
    pub features: Tensor<B, 2>,

    /// Shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,
}

/// Holds the device tensors are created on.
#[derive(Clone, Debug)]
pub struct BowBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> BowBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<BowSample, BowBatch<B>> for BowBatcher<B> {
    fn batch(&self, items: Vec<BowSample>) -> BowBatch<B> {
        let batch_size = items.len();
        let vocab_size = items.first().map_or(0, |s| s.features.len());

        let flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.features.iter().copied())
            .collect();

        let labels: Vec<i32> = items.iter().map(|s| s.label).collect();

        let features = Tensor::<B, 1>::from_floats(flat.as_slice(), &self.device)
            .reshape([batch_size, vocab_size]);

        let labels = Tensor::<B, 1, Int>::from_ints(labels.as_slice(), &self.device);

        BowBatch { features, labels }
    }
}
