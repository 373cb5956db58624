use crate::domain::Document;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
  #[error("io error: {0}")]
  Io(String),

  #[error("encode error: {0}")]
  Encode(String),
}

/// Port de persistencia del documento completo.
///
/// No expone detalles de implementación (fichero JSON, base de datos...).
/// El contrato importante está en los bordes:
/// - `load` nunca "falla a vacío" hacia el llamador: si no hay nada
///   persistido o lo persistido no se puede interpretar, el adapter
///   devuelve `Document::default()` en vez de romper el arranque.
/// - `save` sobreescribe el documento entero; nunca hace merge.
pub trait DocumentRepository {
  fn load(&self) -> Result<Document, RepositoryError>;
  fn save(&self, doc: &Document) -> Result<(), RepositoryError>;
}
