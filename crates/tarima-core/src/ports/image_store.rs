use crate::domain::ImageRef;
use std::path::Path;

/// Extensiones de imagen que aceptamos en las subidas.
pub const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Devuelve la extensión (en minúsculas) si el nombre de archivo tiene
/// una extensión de imagen admitida.
pub fn allowed_extension(filename: &str) -> Option<String> {
  let ext = Path::new(filename).extension().and_then(|e| e.to_str())?.to_lowercase();
  IMAGE_EXTS.contains(&ext.as_str()).then_some(ext)
}

/// Un archivo subido tal como lo entrega la capa web.
///
/// "Sin archivo" se modela como `Option<Upload>` en los llamadores y es
/// un no-op válido: nunca llega al port.
#[derive(Debug, Clone)]
pub struct Upload {
  pub bytes: Vec<u8>,
  pub filename: String,
}

impl Upload {
  pub fn new(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
    Upload { bytes, filename: filename.into() }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ImageStoreError {
  #[error("unsupported image format: {0}")]
  UnsupportedFormat(String),

  #[error("storage error: {0}")]
  Storage(String),
}

/// Port de almacenamiento de imágenes.
///
/// Recibe el contenido crudo de la subida y devuelve una referencia
/// estable (ruta relativa o URL). Opaco para el núcleo: puede ser un
/// directorio local, un bucket, un CDN...
pub trait ImageStore {
  fn save(&self, bytes: &[u8], original_filename: &str) -> Result<ImageRef, ImageStoreError>;
}
