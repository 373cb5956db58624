use crate::domain::ids::{ArtistId, EventId};
use crate::domain::image_ref::{self, ImageRef};
use serde::{Deserialize, Serialize};

/// Copia desnormalizada de un artista dentro de un evento.
///
/// Se congela en el momento de la última sincronización: `name` puede
/// divergir del nombre canónico si el registro se borra después, y
/// `photo` es la `main_photo` canónica tal como estaba en la última
/// escritura que la afectó.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSnapshot {
  /// Referencia al artista canónico. Puede quedar colgando tras un
  /// borrado explícito del artista; los lectores lo tratan como
  /// "artista no disponible", nunca como error.
  pub artist_id: ArtistId,

  /// Copia del nombre en el momento de guardar el evento.
  pub name: String,

  /// Descripción propia de este evento (p. ej. "DJ set").
  #[serde(default)]
  pub desc: String,

  /// Copia de la foto canónica en la última sincronización.
  #[serde(default, deserialize_with = "image_ref::opt_normalized")]
  pub photo: Option<ImageRef>,
}

/// Una soirée del catálogo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub id: EventId,

  /// Fecha y hora en texto libre, tal como las escribe el admin.
  #[serde(default)]
  pub date_str: String,
  #[serde(default)]
  pub time_str: String,

  /// Enlace externo (entradas, redes...).
  #[serde(default)]
  pub link: String,

  #[serde(default)]
  pub description: String,

  /// Cartel del evento.
  #[serde(default, deserialize_with = "image_ref::opt_normalized")]
  pub flyer: Option<ImageRef>,

  /// Fotos del evento, en orden de subida.
  #[serde(default)]
  pub photos: Vec<ImageRef>,

  /// Cartel de invitados, en el orden enviado por el admin.
  /// Se reemplaza completo en cada guardado del evento.
  #[serde(default)]
  pub guests: Vec<GuestSnapshot>,
}
