use anyhow::{anyhow, Result};
use candle_core::{DType, Tensor};

/// Attention-masked mean pooling over the token axis, L2-normalized.
///
/// `hidden` is `[B, T, H]`; `attention_mask` is `[B, T]` with 1 for real
/// tokens. Padding positions contribute nothing to the mean.
pub fn masked_mean_l2(hidden: &Tensor, attention_mask: &Tensor) -> Result<Tensor> {
    let dims = hidden.dims();
    if dims.len() != 3 {
        return Err(anyhow!("hidden shape must be [B,T,H], got {:?}", dims));
    }
    let hidden_dim = dims[2];

    let mask = attention_mask
        .to_device(hidden.device())?
        .to_dtype(hidden.dtype())?;
    let mask_3d = mask.unsqueeze(2)?;
    let mask_broadcast = mask_3d
        .broadcast_as(hidden.shape())
        .unwrap_or(mask_3d.repeat((1, 1, hidden_dim))?);
    let masked = (hidden * &mask_broadcast)?;
    let summed = masked.sum(1)?;
    let lengths = mask.sum(1)?.unsqueeze(1)?.to_dtype(summed.dtype())?;
    let mut pooled = summed.broadcast_div(&lengths)?;

    let eps_val = match hidden.dtype() {
        DType::F16 => 1e-6f32,
        _ => 1e-12f32,
    };
    let eps = Tensor::new(&[eps_val], hidden.device())?
        .to_dtype(hidden.dtype())?
        .unsqueeze(0)?;
    let norm = pooled.sqr()?.sum_keepdim(1)?.sqrt()?.broadcast_add(&eps)?;
    pooled = pooled.broadcast_div(&norm)?;
    Ok(pooled)
}
