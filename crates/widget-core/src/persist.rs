//! Saving and restoring the widget configuration through a `StoragePort`.

use widget_types::{Result, config::WidgetConfig};
use crate::ports::StoragePort;

pub const CONFIG_STORAGE_KEY: &str = "widget:config";

/// Load the saved configuration, if any. A stored value that no longer
/// parses is reported as a serialization error.
pub async fn load_config(storage: &dyn StoragePort) -> Result<Option<WidgetConfig>> {
    let Some(data) = storage.get(CONFIG_STORAGE_KEY).await? else {
        return Ok(None);
    };
    let config: WidgetConfig = serde_json::from_slice(&data)?;
    log::info!("Config restored from {} storage", storage.backend_name());
    Ok(Some(config))
}

/// Validate, then persist. An invalid configuration is never written.
pub async fn save_config(storage: &dyn StoragePort, config: &WidgetConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_vec(config)?;
    storage.set(CONFIG_STORAGE_KEY, &json).await?;
    log::info!("Config saved to {} storage", storage.backend_name());
    Ok(())
}
