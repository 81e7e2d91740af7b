//! Fine-tuning glue over the candle stack.
//!
//! The heavy machinery — tokenization, the encoder forward pass, the
//! optimizer — all belongs to the framework; this module only wires the
//! prepared dataset into it. A pretrained BERT encoder is loaded from the
//! hub and a classification head is trained on mask-aware mean-pooled
//! encoder outputs.

use anyhow::Context;
use candle_core::{DType, Device, Tensor};
use candle_nn::{AdamW, Module, Optimizer, ParamsAdamW, VarBuilder, VarMap, loss};
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use std::path::PathBuf;
use tokenizers::Tokenizer;
use tracing::info;

use lawbert_config::TrainingConfig;

use crate::dataset::TrainingExample;

/// Local paths of the pretrained assets fetched from the hub.
struct PretrainedAssets {
    config: PathBuf,
    tokenizer: PathBuf,
    weights: PathBuf,
}

fn fetch_assets(model_id: &str) -> anyhow::Result<PretrainedAssets> {
    info!("Fetching pretrained assets for {model_id}");
    let api = Api::new()?;
    let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

    Ok(PretrainedAssets {
        config: repo.get("config.json").context("config.json")?,
        tokenizer: repo.get("tokenizer.json").context("tokenizer.json")?,
        weights: repo.get("model.safetensors").context("model.safetensors")?,
    })
}

/// Fine-tune a classification head on the prepared examples.
///
/// The encoder weights stay frozen; only the head parameters live in the
/// `VarMap` handed to the optimizer. Head weights are saved to
/// `<output_dir>/classifier.safetensors`.
///
/// # Errors
/// Returns an error on asset-fetch, tokenizer, or tensor failures, or when
/// the dataset is empty.
pub fn run_finetune(cfg: &TrainingConfig, examples: &[TrainingExample]) -> anyhow::Result<()> {
    anyhow::ensure!(!examples.is_empty(), "no training examples to fine-tune on");
    anyhow::ensure!(cfg.batch_size > 0, "batch_size must be positive");

    let device = Device::cuda_if_available(0).unwrap_or(Device::Cpu);
    info!(device = ?device, "Starting fine-tuning run");

    let assets = fetch_assets(&cfg.model_id)?;

    let config_contents =
        std::fs::read_to_string(&assets.config).context("read pretrained config")?;
    let bert_config: BertConfig =
        serde_json::from_str(&config_contents).context("parse pretrained config")?;

    let mut tokenizer = Tokenizer::from_file(&assets.tokenizer)
        .map_err(|e| anyhow::anyhow!("tokenizer: {e}"))?;
    tokenizer
        .with_truncation(Some(tokenizers::TruncationParams {
            max_length: cfg.max_length.min(bert_config.max_position_embeddings),
            ..Default::default()
        }))
        .map_err(|e| anyhow::anyhow!("truncation config: {e}"))?;

    // SAFETY: safetensors files are memory-mapped read-only
    #[expect(unsafe_code, reason = "Framework API for memory-mapped weights")]
    let vb = unsafe {
        VarBuilder::from_mmaped_safetensors(&[assets.weights], DType::F32, &device)?
    };
    let model = BertModel::load(vb, &bert_config).context("load pretrained encoder")?;
    info!("Pretrained encoder loaded");

    let varmap = VarMap::new();
    let head_vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);
    let classifier = candle_nn::linear(
        bert_config.hidden_size,
        cfg.num_labels,
        head_vb.pp("classifier"),
    )?;

    let params = ParamsAdamW {
        lr: cfg.learning_rate,
        weight_decay: cfg.weight_decay,
        ..Default::default()
    };
    let mut optimizer = AdamW::new(varmap.all_vars(), params)?;

    for epoch in 1..=cfg.epochs {
        let mut total_loss = 0.0_f64;
        let mut batches = 0_usize;

        for chunk in examples.chunks(cfg.batch_size) {
            let batch = encode_batch(&tokenizer, chunk, &device)?;

            let hidden = model.forward(
                &batch.input_ids,
                &batch.token_type_ids,
                Some(&batch.attention_mask),
            )?;
            let pooled = mean_pool(&hidden, &batch.attention_mask)?;
            let logits = classifier.forward(&pooled)?;
            let batch_loss = loss::cross_entropy(&logits, &batch.labels)?;

            optimizer.backward_step(&batch_loss)?;
            total_loss += f64::from(batch_loss.to_scalar::<f32>()?);
            batches += 1;
        }

        info!(
            "Epoch {epoch}/{}: mean loss {:.4}",
            cfg.epochs,
            total_loss / batches as f64
        );
    }

    std::fs::create_dir_all(&cfg.output_dir)?;
    let out_path = cfg.output_dir.join("classifier.safetensors");
    varmap.save(&out_path)?;
    info!("Saved classifier head to {}", out_path.display());

    Ok(())
}

struct EncodedBatch {
    input_ids: Tensor,
    token_type_ids: Tensor,
    attention_mask: Tensor,
    labels: Tensor,
}

/// Tokenize one chunk of examples and pad it to the chunk's longest sequence.
fn encode_batch(
    tokenizer: &Tokenizer,
    chunk: &[TrainingExample],
    device: &Device,
) -> anyhow::Result<EncodedBatch> {
    let texts: Vec<&str> = chunk.iter().map(|e| e.text.as_str()).collect();
    let encodings = tokenizer
        .encode_batch(texts, true)
        .map_err(|e| anyhow::anyhow!("tokenization: {e}"))?;

    let max_len = encodings
        .iter()
        .map(|e| e.get_ids().len())
        .max()
        .unwrap_or(0);

    let mut all_input_ids = Vec::with_capacity(chunk.len() * max_len);
    let mut all_type_ids = Vec::with_capacity(chunk.len() * max_len);
    let mut all_attention_mask = Vec::with_capacity(chunk.len() * max_len);

    for encoding in &encodings {
        let ids = encoding.get_ids();
        let type_ids = encoding.get_type_ids();
        let attention = encoding.get_attention_mask();
        let pad_len = max_len - ids.len();

        all_input_ids.extend_from_slice(ids);
        all_input_ids.extend(std::iter::repeat_n(0_u32, pad_len));

        all_type_ids.extend_from_slice(type_ids);
        all_type_ids.extend(std::iter::repeat_n(0_u32, pad_len));

        all_attention_mask.extend_from_slice(attention);
        all_attention_mask.extend(std::iter::repeat_n(0_u32, pad_len));
    }

    let batch_size = chunk.len();
    let labels: Vec<u32> = chunk.iter().map(|e| e.label).collect();

    Ok(EncodedBatch {
        input_ids: Tensor::from_vec(all_input_ids, (batch_size, max_len), device)?,
        token_type_ids: Tensor::from_vec(all_type_ids, (batch_size, max_len), device)?,
        attention_mask: Tensor::from_vec(all_attention_mask, (batch_size, max_len), device)?,
        labels: Tensor::from_vec(labels, batch_size, device)?,
    })
}

/// Mean pooling of encoder outputs under the attention mask.
fn mean_pool(hidden: &Tensor, attention_mask: &Tensor) -> candle_core::Result<Tensor> {
    let mask = attention_mask.to_dtype(DType::F32)?;
    let expanded = mask.unsqueeze(2)?;
    let masked = hidden.broadcast_mul(&expanded)?;
    let summed = masked.sum(1)?;
    let token_counts = mask.sum(1)?.unsqueeze(1)?;
    summed.broadcast_div(&token_counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_mean_pool_respects_mask() {
        let device = Device::Cpu;
        // One sequence of two tokens with hidden size 2
        let hidden = Tensor::from_vec(vec![1.0_f32, 2.0, 3.0, 4.0], (1, 2, 2), &device)
            .expect("tensor should build");

        let full_mask =
            Tensor::from_vec(vec![1_u32, 1], (1, 2), &device).expect("tensor should build");
        let pooled = mean_pool(&hidden, &full_mask).expect("pooling should succeed");
        let values: Vec<f32> = pooled
            .squeeze(0)
            .and_then(|t| t.to_vec1())
            .expect("pooled values should read back");
        assert_eq!(values, vec![2.0, 3.0]);

        let half_mask =
            Tensor::from_vec(vec![1_u32, 0], (1, 2), &device).expect("tensor should build");
        let pooled = mean_pool(&hidden, &half_mask).expect("pooling should succeed");
        let values: Vec<f32> = pooled
            .squeeze(0)
            .and_then(|t| t.to_vec1())
            .expect("pooled values should read back");
        assert_eq!(values, vec![1.0, 2.0]);
    }
}
