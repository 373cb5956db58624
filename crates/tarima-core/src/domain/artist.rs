use crate::domain::ids::ArtistId;
use crate::domain::image_ref::{self, ImageRef};
use serde::{Deserialize, Serialize};

/// Representa a un artista del cartel.
///
/// Es el registro canónico, independiente de cualquier evento concreto.
/// Su `main_photo` es la fuente de verdad que se propaga a las copias
/// desnormalizadas (`GuestSnapshot`) incrustadas en los eventos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  /// Identificador único del artista. Inmutable una vez creado.
  pub id: ArtistId,

  /// Nombre tal como se escribió la primera vez. La deduplicación
  /// compara nombres recortados y sin distinguir mayúsculas.
  pub name: String,

  /// Biografía en texto libre.
  #[serde(default)]
  pub bio: String,

  /// Foto canónica del artista, si tiene.
  #[serde(default, deserialize_with = "image_ref::opt_normalized")]
  pub main_photo: Option<ImageRef>,

  /// Galería de imágenes adicionales, en orden de subida.
  /// No se desnormaliza en ningún otro sitio.
  #[serde(default)]
  pub gallery: Vec<ImageRef>,
}

impl Artist {
  /// Crea un artista nuevo con biografía, foto y galería vacías.
  pub fn new(name: impl Into<String>) -> Self {
    Artist {
      id: ArtistId::new(),
      name: name.into(),
      bio: String::new(),
      main_photo: None,
      gallery: Vec::new(),
    }
  }
}
