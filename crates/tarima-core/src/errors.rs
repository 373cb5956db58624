use crate::ports::image_store::ImageStoreError;
use crate::ports::repository::RepositoryError;
use thiserror::Error;

/// Error genérico del núcleo de Tarima.
///
/// Las capas superiores (web admin, CLI, etc.) deberían mapear este
/// error a mensajes de usuario o logs. Las operaciones dirigidas a un
/// id fallan rápido; las entradas vacías (nombres en blanco, subidas
/// ausentes) son no-ops válidos y nunca llegan aquí.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("not found")]
  NotFound,

  #[error("index out of range")]
  IndexOutOfRange,

  #[error("unsupported image format: {0}")]
  UnsupportedFormat(String),

  #[error("image storage error: {0}")]
  Storage(String),

  #[error("persistence error: {0}")]
  Persistence(String),
}

impl From<ImageStoreError> for CoreError {
  fn from(err: ImageStoreError) -> Self {
    match err {
      ImageStoreError::UnsupportedFormat(ext) => CoreError::UnsupportedFormat(ext),
      ImageStoreError::Storage(msg) => CoreError::Storage(msg),
    }
  }
}

impl From<RepositoryError> for CoreError {
  fn from(err: RepositoryError) -> Self {
    CoreError::Persistence(err.to_string())
  }
}
