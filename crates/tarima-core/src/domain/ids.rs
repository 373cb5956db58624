use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador único de un artista dentro del sistema.
///
/// Es completamente abstracto: no depende del nombre ni de ninguna
/// fuente externa. Se genera con UUID v4 para garantizar unicidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtistId(Uuid);

impl ArtistId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    ArtistId(Uuid::new_v4())
  }

  /// Construye un `ArtistId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    ArtistId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for ArtistId {
  fn from(u: Uuid) -> Self {
    ArtistId(u)
  }
}

impl From<ArtistId> for Uuid {
  fn from(id: ArtistId) -> Self {
    id.0
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador único de una soirée (evento) del catálogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
  pub fn new() -> Self {
    EventId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    EventId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for EventId {
  fn from(u: Uuid) -> Self {
    EventId(u)
  }
}

impl From<EventId> for Uuid {
  fn from(id: EventId) -> Self {
    id.0
  }
}

impl fmt::Display for EventId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
