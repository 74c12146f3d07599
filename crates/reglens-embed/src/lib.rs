//! Embedder implementations behind the `reglens_core::traits::Embedder`
//! capability boundary: a local BGE-M3 encoder and a deterministic fake for
//! tests and offline runs.

mod device;
mod pool;
mod tokenize;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::xlm_roberta::{Config as XLMRobertaConfig, XLMRobertaModel};
use tokenizers::Tokenizer;

use reglens_core::traits::Embedder;

pub use device::select_device;

/// Output dimension of the BGE-M3 encoder, and the default dimension for
/// the fake embedder so the two stay interchangeable.
pub const EMBEDDING_DIM: usize = 1024;

const MAX_TOKENS: usize = 256;

/// Local BGE-M3 encoder (XLM-RoBERTa backbone) with masked mean pooling and
/// L2-normalized output vectors.
pub struct LocalEncoder {
    model: XLMRobertaModel,
    tokenizer: Tokenizer,
    device: Device,
}

impl LocalEncoder {
    /// Loads tokenizer, config, and weights from the resolved model
    /// directory. Model files are expected in the BGE-M3 layout
    /// (`tokenizer.json`, `config.json`, `pytorch_model.bin`).
    pub fn load() -> Result<Self> {
        let device = device::select_device();
        let model_dir = resolve_model_dir()?;

        let tokenizer_path = model_dir.join("tokenizer.json");
        let tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(|e| {
            anyhow!(
                "Failed to load tokenizer from {}: {}",
                tokenizer_path.display(),
                e
            )
        })?;

        let config_path = model_dir.join("config.json");
        let config: XLMRobertaConfig =
            serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;

        let weights_path = model_dir.join("pytorch_model.bin");
        let weights = candle_core::pickle::read_all(&weights_path)?;
        let weights_map: HashMap<String, Tensor> = weights.into_iter().collect();
        let vb = VarBuilder::from_tensors(weights_map, DType::F32, &device);
        let model = XLMRobertaModel::new(&config, vb)?;

        tracing::info!(dir = %model_dir.display(), "loaded local embedding model");
        Ok(Self {
            model,
            tokenizer,
            device,
        })
    }

    fn encode_one(&self, text: &str) -> Result<Vec<f32>> {
        let (input_ids, attention_mask) =
            tokenize::tokenize_on_device(&self.tokenizer, text, MAX_TOKENS, &self.device)?;
        let token_type_ids = Tensor::zeros((1, MAX_TOKENS), DType::I64, &self.device)?;
        let hidden = self
            .model
            .forward(&input_ids, &attention_mask, &token_type_ids, None, None, None)?;
        let pooled = pool::masked_mean_l2(&hidden, &attention_mask)?;
        let vector: Vec<f32> = pooled.to_device(&Device::Cpu)?.squeeze(0)?.to_vec1()?;
        if vector.len() != EMBEDDING_DIM {
            return Err(anyhow!(
                "unexpected embedding dim {} (want {})",
                vector.len(),
                EMBEDDING_DIM
            ));
        }
        Ok(vector)
    }
}

impl Embedder for LocalEncoder {
    fn dim(&self) -> usize {
        EMBEDDING_DIM
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.encode_one(t)).collect()
    }
}

/// Deterministic token-hash embedder for tests and offline runs.
///
/// Each whitespace token hashes to one dimension; the resulting vector is
/// L2-normalized. Same text, same vector, with no model files needed.
pub struct FakeEmbedder {
    dim: usize,
}

impl FakeEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn encode(&self, text: &str) -> Vec<f32> {
        use std::hash::{Hash, Hasher};
        use twox_hash::XxHash64;

        let mut v = vec![0f32; self.dim];
        for (i, token) in text.split_whitespace().enumerate() {
            let mut hasher = XxHash64::with_seed(0);
            token.hash(&mut hasher);
            let h = hasher.finish();
            let idx = (h as usize) % self.dim;
            let val = (((h >> 32) as u32) as f32) / (u32::MAX as f32);
            v[idx] += val + (i as f32 % 3.0) * 0.01;
        }
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt().max(1e-6);
        for x in &mut v {
            *x /= norm;
        }
        v
    }
}

impl Embedder for FakeEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.encode(t)).collect())
    }
}

/// Selects the fake embedder when `APP_USE_FAKE_EMBEDDINGS` is set, loading
/// the local model otherwise.
pub fn default_embedder() -> Result<Box<dyn Embedder>> {
    let use_fake = std::env::var("APP_USE_FAKE_EMBEDDINGS")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if use_fake {
        tracing::info!("using fake embeddings");
        return Ok(Box::new(FakeEmbedder::new(EMBEDDING_DIM)));
    }
    Ok(Box::new(LocalEncoder::load()?))
}

fn resolve_model_dir() -> Result<PathBuf> {
    for var in ["APP_MODEL_DIR", "MODEL_DIR"] {
        if let Ok(dir) = std::env::var(var) {
            let p = PathBuf::from(&dir);
            if p.exists() {
                return Ok(p);
            }
        }
    }
    for candidate in ["models/bge-m3", "../models/bge-m3"] {
        let p = Path::new(candidate);
        if p.exists() {
            return Ok(p.to_path_buf());
        }
    }
    Err(anyhow!(
        "Could not locate BGE-M3 model directory; set APP_MODEL_DIR or use APP_USE_FAKE_EMBEDDINGS=1"
    ))
}
