use std::path::PathBuf;

use tarima_core::domain::ImageRef;
use tarima_core::ports::image_store::{ImageStore, ImageStoreError, allowed_extension};
use tracing::debug;
use uuid::Uuid;

use crate::io::atomic_write;

/// Implementación de `ImageStore` sobre un directorio local.
///
/// Cada subida se guarda con un nombre fresco (`<uuid>.<ext>`) para que
/// las referencias sean estables: nunca se sobreescribe una imagen ya
/// servida. El nombre original solo aporta la extensión.
pub struct LocalImageStore {
  uploads_dir: PathBuf,
}

impl LocalImageStore {
  /// `uploads_dir` es el directorio físico; las referencias devueltas
  /// son rutas relativas `uploads/<archivo>` listas para servir.
  pub fn new(uploads_dir: impl Into<PathBuf>) -> Self {
    Self { uploads_dir: uploads_dir.into() }
  }
}

impl ImageStore for LocalImageStore {
  fn save(&self, bytes: &[u8], original_filename: &str) -> Result<ImageRef, ImageStoreError> {
    let ext = allowed_extension(original_filename)
      .ok_or_else(|| ImageStoreError::UnsupportedFormat(original_filename.to_string()))?;

    let filename = format!("{}.{}", Uuid::new_v4().simple(), ext);
    let path = self.uploads_dir.join(&filename);

    atomic_write(&path, bytes).map_err(|e| ImageStoreError::Storage(e.to_string()))?;

    debug!(%filename, size = bytes.len(), "image stored");
    Ok(ImageRef::new(format!("uploads/{filename}")))
  }
}
