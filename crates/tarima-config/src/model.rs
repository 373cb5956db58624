use crate::CONFIG_BACKEND;
use crate::backend::ConfigBackend;
use crate::paths::ConfigError;
use serde::{Deserialize, Serialize};
use tarima_core::services::catalog::InsertionOrder;

/// Sección `[catalog]` del archivo de configuración.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CatalogConfig {
  /// Dónde insertar los eventos recién creados. Decisión explícita:
  /// las variantes históricas del sistema no se ponían de acuerdo.
  #[serde(default)]
  pub insertion_order: InsertionOrder,
}

impl CatalogConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("catalog")?;
    CONFIG_BACKEND.save_section("catalog", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("catalog", self)
  }
}
