use candle_core::Device;

/// Picks Metal when the feature is enabled and the device initializes,
/// falling back to CPU.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    {
        if let Ok(dev) = Device::new_metal(0) {
            tracing::info!("embedding device: Metal");
            return dev;
        }
    }
    tracing::info!("embedding device: CPU");
    Device::Cpu
}
