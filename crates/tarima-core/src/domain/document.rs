use crate::domain::event::Event;
use crate::domain::roster::ArtistRoster;
use crate::domain::settings::SiteSettings;
use serde::{Deserialize, Serialize};

/// El documento completo que se persiste como una unidad.
///
/// Todo el dataset vive en memoria y se reescribe entero en cada
/// mutación (reemplazo atómico, nunca merge). Cada campo tiene
/// `default` para tolerar documentos históricos con secciones ausentes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  #[serde(default)]
  pub settings: SiteSettings,

  /// Eventos en el orden de publicación elegido por la política de
  /// inserción del catálogo.
  #[serde(default)]
  pub events: Vec<Event>,

  #[serde(default)]
  pub artists: ArtistRoster,
}

impl Document {
  pub fn new() -> Self {
    Self::default()
  }
}
