use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Rutas de trabajo de la aplicación.
///
/// `TARIMA_BASE_DIR` fuerza un árbol portable (útil en tests y en
/// despliegues de carpeta única); si no, se usan los directorios
/// estándar de la plataforma.
#[derive(Debug, Clone)]
pub struct TarimaPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub uploads_dir: PathBuf,
}

impl TarimaPaths {
  pub fn new() -> Result<Self, ConfigError> {
    let (config_dir, data_dir, uploads_dir, base_dir);

    if let Ok(env_base) = std::env::var("TARIMA_BASE_DIR") {
      let base = PathBuf::from(env_base);
      base_dir = base.clone();
      config_dir = base.join("config");
      data_dir = base.join("data");
      uploads_dir = base.join("uploads");
    } else {
      let proj_dirs = ProjectDirs::from("com", "tarima", "tarima").ok_or(ConfigError::Directories)?;
      base_dir = proj_dirs.config_dir().to_path_buf();
      config_dir = proj_dirs.config_dir().to_path_buf();
      data_dir = proj_dirs.data_dir().to_path_buf();
      uploads_dir = proj_dirs.data_dir().join("uploads");
    }

    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    std::fs::create_dir_all(&uploads_dir)?;

    Ok(Self { base_dir, config_dir, data_dir, uploads_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("tarima.toml")
  }

  /// El documento completo del sitio vive en un único JSON.
  pub fn data_file(&self) -> PathBuf {
    self.data_dir.join("data.json")
  }
}
