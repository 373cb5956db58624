use crate::domain::Document;
use crate::errors::CoreError;
use crate::ports::repository::DocumentRepository;
use std::sync::Mutex;
use tracing::debug;

/// Transacción explícita de ámbito sobre el documento completo.
///
/// Sustituye la dependencia implícita en "un solo hilo": cada mutación
/// es `load → mutator → save` bajo un único candado de exclusión mutua.
/// No hay versionado por registro ni control optimista: el candado
/// sobre el documento entero ES el modelo de concurrencia.
///
/// Si `save` falla, el error se reporta al llamador pero el resultado
/// del mutator no se revierte (limitación asumida del modelo).
pub struct DocumentSession<R: DocumentRepository> {
  repo: R,
  lock: Mutex<()>,
}

impl<R: DocumentRepository> DocumentSession<R> {
  pub fn new(repo: R) -> Self {
    Self { repo, lock: Mutex::new(()) }
  }

  /// Ejecuta `mutator` sobre el documento cargado y persiste el
  /// resultado. Si el mutator falla, no se guarda nada.
  pub fn with_document<T>(
    &self,
    mutator: impl FnOnce(&mut Document) -> Result<T, CoreError>,
  ) -> Result<T, CoreError> {
    let _guard =
      self.lock.lock().map_err(|_| CoreError::Persistence("document lock poisoned".to_string()))?;

    let mut doc = self.repo.load()?;
    let out = mutator(&mut doc)?;
    self.repo.save(&doc)?;

    debug!("document saved");
    Ok(out)
  }

  /// Lectura bajo el mismo candado, sin escritura posterior.
  pub fn read<T>(&self, f: impl FnOnce(&Document) -> T) -> Result<T, CoreError> {
    let _guard =
      self.lock.lock().map_err(|_| CoreError::Persistence("document lock poisoned".to_string()))?;

    let doc = self.repo.load()?;
    Ok(f(&doc))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ports::repository::RepositoryError;
  use std::cell::RefCell;

  /// Repositorio en memoria para probar la semántica de la sesión.
  struct MemoryRepository {
    doc: RefCell<Document>,
    saves: RefCell<usize>,
    fail_save: bool,
  }

  impl MemoryRepository {
    fn new() -> Self {
      Self { doc: RefCell::new(Document::new()), saves: RefCell::new(0), fail_save: false }
    }
  }

  impl DocumentRepository for MemoryRepository {
    fn load(&self) -> Result<Document, RepositoryError> {
      Ok(self.doc.borrow().clone())
    }

    fn save(&self, doc: &Document) -> Result<(), RepositoryError> {
      if self.fail_save {
        return Err(RepositoryError::Io("disk full".to_string()));
      }
      *self.doc.borrow_mut() = doc.clone();
      *self.saves.borrow_mut() += 1;
      Ok(())
    }
  }

  #[test]
  fn mutation_is_persisted() {
    let session = DocumentSession::new(MemoryRepository::new());

    session
      .with_document(|doc| {
        doc.settings.title = "Tarima".to_string();
        Ok(())
      })
      .unwrap();

    let title = session.read(|doc| doc.settings.title.clone()).unwrap();
    assert_eq!(title, "Tarima");
    assert_eq!(*session.repo.saves.borrow(), 1);
  }

  #[test]
  fn failed_mutator_saves_nothing() {
    let session = DocumentSession::new(MemoryRepository::new());

    let err = session
      .with_document(|doc| -> Result<(), CoreError> {
        doc.settings.title = "perdido".to_string();
        Err(CoreError::NotFound)
      })
      .unwrap_err();

    assert!(matches!(err, CoreError::NotFound));
    assert_eq!(*session.repo.saves.borrow(), 0);
    let title = session.read(|doc| doc.settings.title.clone()).unwrap();
    assert_ne!(title, "perdido");
  }

  #[test]
  fn failed_save_surfaces_as_persistence() {
    let mut repo = MemoryRepository::new();
    repo.fail_save = true;
    let session = DocumentSession::new(repo);

    let err = session.with_document(|_| Ok(())).unwrap_err();
    assert!(matches!(err, CoreError::Persistence(_)));
  }
}
