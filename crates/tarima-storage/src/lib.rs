use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tarima_core::domain::Document;
use tarima_core::ports::repository::{DocumentRepository, RepositoryError};
use tracing::{debug, warn};

/// Repositorio del documento sobre un único archivo JSON.
///
/// `load` nunca tumba el arranque: sin archivo, o con un archivo que no
/// se puede leer o interpretar, devuelve `Document::default()` (el
/// comportamiento histórico del sistema). `save` reescribe el documento
/// completo con una escritura atómica.
pub struct JsonDocumentStore {
  path: PathBuf,
}

impl JsonDocumentStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Construye el repositorio sobre el `data.json` de los paths de la
  /// aplicación.
  pub fn new_from_config() -> Self {
    Self::new(tarima_config::PATHS.data_file())
  }

  pub fn path(&self) -> &std::path::Path {
    &self.path
  }
}

impl DocumentRepository for JsonDocumentStore {
  fn load(&self) -> Result<Document, RepositoryError> {
    let content = match fs::read_to_string(&self.path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!(path = %self.path.display(), "no persisted document, starting empty");
        return Ok(Document::default());
      }
      Err(e) => {
        warn!(path = %self.path.display(), error = %e, "unreadable document, starting empty");
        return Ok(Document::default());
      }
    };

    match serde_json::from_str(&content) {
      Ok(doc) => Ok(doc),
      Err(e) => {
        warn!(path = %self.path.display(), error = %e, "corrupt document, starting empty");
        Ok(Document::default())
      }
    }
  }

  fn save(&self, doc: &Document) -> Result<(), RepositoryError> {
    let json =
      serde_json::to_string_pretty(doc).map_err(|e| RepositoryError::Encode(e.to_string()))?;

    tarima_fs::atomic_write_str(&self.path, &json)
      .map_err(|e| RepositoryError::Io(e.to_string()))?;

    debug!(path = %self.path.display(), "document saved");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tarima_core::domain::{Artist, EventId, ImageRef};
  use tarima_core::ports::image_store::{ImageStore, ImageStoreError};
  use tarima_core::services::{ArtistDirectory, EventCatalog, EventFields, GuestInput};
  use tempfile::tempdir;

  struct NullImageStore;

  impl ImageStore for NullImageStore {
    fn save(&self, _bytes: &[u8], name: &str) -> Result<ImageRef, ImageStoreError> {
      Ok(ImageRef::new(format!("uploads/{name}")))
    }
  }

  fn populated_document() -> Document {
    let mut doc = Document::new();
    let dana = ArtistDirectory::new(&mut doc).resolve_or_create("Dana");
    ArtistDirectory::new(&mut doc).set_main_photo(dana, ImageRef::new("uploads/dana.png")).unwrap();
    EventCatalog::new(&mut doc, &NullImageStore)
      .create_event(
        EventFields { date_str: "dimanche 12".into(), ..Default::default() },
        Some(ImageRef::new("uploads/flyer.png")),
        vec![ImageRef::new("uploads/p0.png")],
        vec![GuestInput::new("dana", "DJ"), GuestInput::new("Bruno", "Live")],
      )
      .unwrap();
    doc
  }

  #[test]
  fn missing_file_loads_default() {
    let tmp = tempdir().unwrap();
    let store = JsonDocumentStore::new(tmp.path().join("data.json"));

    assert_eq!(store.load().unwrap(), Document::default());
  }

  #[test]
  fn corrupt_file_loads_default() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("data.json");
    std::fs::write(&path, "{ no es json").unwrap();

    let store = JsonDocumentStore::new(path);
    assert_eq!(store.load().unwrap(), Document::default());
  }

  #[test]
  fn save_then_load_round_trips() {
    let tmp = tempdir().unwrap();
    let store = JsonDocumentStore::new(tmp.path().join("data.json"));
    let doc = populated_document();

    store.save(&doc).unwrap();
    assert_eq!(store.load().unwrap(), doc);
  }

  #[test]
  fn save_of_loaded_document_is_byte_stable() {
    let tmp = tempdir().unwrap();
    let store = JsonDocumentStore::new(tmp.path().join("data.json"));

    store.save(&populated_document()).unwrap();
    let first = std::fs::read_to_string(store.path()).unwrap();

    let reloaded = store.load().unwrap();
    store.save(&reloaded).unwrap();
    let second = std::fs::read_to_string(store.path()).unwrap();

    assert_eq!(first, second);
  }

  #[test]
  fn historical_photo_encodings_normalize_on_load() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("data.json");
    let artist = Artist::new("Dana");
    let raw = format!(
      r#"{{
        "events": [
          {{
            "id": "{event}",
            "flyer": "None",
            "guests": [
              {{ "artist_id": "{id}", "name": "Dana", "photo": "" }}
            ]
          }}
        ],
        "artists": {{ "{id}": {{ "id": "{id}", "name": "Dana", "main_photo": null }} }}
      }}"#,
      event = EventId::new(),
      id = artist.id,
    );
    std::fs::write(&path, raw).unwrap();

    let doc = JsonDocumentStore::new(path).load().unwrap();

    assert_eq!(doc.events[0].flyer, None);
    assert_eq!(doc.events[0].guests[0].photo, None);
    assert_eq!(doc.artists.iter().next().unwrap().main_photo, None);
    // Las secciones ausentes caen a sus defaults.
    assert_eq!(doc.settings.title, "Le Rendez-vous du Dimanche");
  }
}
