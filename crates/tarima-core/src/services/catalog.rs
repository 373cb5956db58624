use crate::domain::{Document, Event, EventId, GuestSnapshot, ImageRef};
use crate::errors::CoreError;
use crate::ports::image_store::{ImageStore, Upload};
use crate::services::directory::ArtistDirectory;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Dónde se inserta un evento recién creado en la lista.
///
/// Versiones históricas del sistema discrepaban entre añadir al final y
/// al principio; aquí es una política explícita de configuración.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionOrder {
  #[default]
  Append,
  Prepend,
}

/// Campos de texto libre de un evento.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
  pub date_str: String,
  pub time_str: String,
  pub link: String,
  pub description: String,
}

/// Entrada de invitado tal como llega del formulario de admin.
#[derive(Debug, Clone)]
pub struct GuestInput {
  pub name: String,
  pub desc: String,
  /// Foto subida junto al invitado. Si está presente, reemplaza la
  /// foto canónica del artista, no solo el snapshot de este evento.
  pub photo: Option<Upload>,
}

impl GuestInput {
  pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
    GuestInput { name: name.into(), desc: desc.into(), photo: None }
  }

  pub fn with_photo(name: impl Into<String>, desc: impl Into<String>, photo: Upload) -> Self {
    GuestInput { name: name.into(), desc: desc.into(), photo: Some(photo) }
  }
}

/// Vista de servicio sobre el catálogo de eventos de un documento.
///
/// Depende del directorio para resolver identidades de invitados y del
/// `ImageStore` para las fotos subidas junto a un invitado.
pub struct EventCatalog<'a, S: ImageStore> {
  doc: &'a mut Document,
  images: &'a S,
  order: InsertionOrder,
}

impl<'a, S: ImageStore> EventCatalog<'a, S> {
  pub fn new(doc: &'a mut Document, images: &'a S) -> Self {
    Self::with_order(doc, images, InsertionOrder::default())
  }

  pub fn with_order(doc: &'a mut Document, images: &'a S, order: InsertionOrder) -> Self {
    Self { doc, images, order }
  }

  /// Crea un evento con id fresco y lo inserta según la política
  /// configurada.
  pub fn create_event(
    &mut self,
    fields: EventFields,
    flyer: Option<ImageRef>,
    photos: Vec<ImageRef>,
    guests: Vec<GuestInput>,
  ) -> Result<EventId, CoreError> {
    let guests = self.resolve_guests(guests)?;

    let event = Event {
      id: EventId::new(),
      date_str: fields.date_str,
      time_str: fields.time_str,
      link: fields.link,
      description: fields.description,
      flyer,
      photos,
      guests,
    };
    let id = event.id;

    match self.order {
      InsertionOrder::Append => self.doc.events.push(event),
      InsertionOrder::Prepend => self.doc.events.insert(0, event),
    }

    info!(%id, "event created");
    Ok(id)
  }

  /// Actualiza un evento existente.
  ///
  /// El cartel de invitados se reemplaza completo (omitir un invitado
  /// lo quita de este evento sin borrar al artista). El flyer solo
  /// cambia si llega uno nuevo; `append_photos` se añade al final, el
  /// borrado de fotos es una operación aparte.
  pub fn update_event(
    &mut self,
    id: EventId,
    fields: EventFields,
    flyer: Option<ImageRef>,
    append_photos: Vec<ImageRef>,
    guests: Vec<GuestInput>,
  ) -> Result<(), CoreError> {
    // Comprobar antes de resolver: un id desconocido no debe dejar
    // artistas creados ni fotos subidas como efecto colateral.
    if !self.doc.events.iter().any(|e| e.id == id) {
      return Err(CoreError::NotFound);
    }

    let guests = self.resolve_guests(guests)?;

    let event =
      self.doc.events.iter_mut().find(|e| e.id == id).ok_or(CoreError::NotFound)?;

    event.date_str = fields.date_str;
    event.time_str = fields.time_str;
    event.link = fields.link;
    event.description = fields.description;
    if let Some(flyer) = flyer {
      event.flyer = Some(flyer);
    }
    event.photos.extend(append_photos);
    event.guests = guests;

    Ok(())
  }

  /// Resolución de invitados, compartida por alta y edición.
  ///
  /// Por cada entrada: recorta el nombre (vacío ⇒ se omite), resuelve o
  /// crea el artista, guarda la foto subida (si la hay) como nueva foto
  /// canónica, y sella el snapshot releyendo la foto canónica actual —
  /// así un invitado sin subida propia hereda la foto existente.
  fn resolve_guests(&mut self, inputs: Vec<GuestInput>) -> Result<Vec<GuestSnapshot>, CoreError> {
    let mut snapshots = Vec::with_capacity(inputs.len());

    for input in inputs {
      let name = input.name.trim();
      if name.is_empty() {
        continue;
      }

      let artist_id = ArtistDirectory::new(self.doc).resolve_or_create(name);

      if let Some(upload) = input.photo {
        let stored = self.images.save(&upload.bytes, &upload.filename)?;
        ArtistDirectory::new(self.doc).set_main_photo(artist_id, stored)?;
      }

      let photo = self.doc.artists.get(artist_id).and_then(|a| a.main_photo.clone());

      snapshots.push(GuestSnapshot {
        artist_id,
        name: name.to_string(),
        desc: input.desc,
        photo,
      });
    }

    Ok(snapshots)
  }

  /// Elimina la foto `index` del evento, desplazando las siguientes.
  pub fn remove_photo(&mut self, id: EventId, index: usize) -> Result<(), CoreError> {
    let event = self.find_mut(id)?;
    if index >= event.photos.len() {
      return Err(CoreError::IndexOutOfRange);
    }
    event.photos.remove(index);
    Ok(())
  }

  pub fn clear_flyer(&mut self, id: EventId) -> Result<(), CoreError> {
    let event = self.find_mut(id)?;
    event.flyer = None;
    Ok(())
  }

  pub fn delete_event(&mut self, id: EventId) -> Result<(), CoreError> {
    let pos = self.doc.events.iter().position(|e| e.id == id).ok_or(CoreError::NotFound)?;
    self.doc.events.remove(pos);
    info!(%id, "event deleted");
    Ok(())
  }

  fn find_mut(&mut self, id: EventId) -> Result<&mut Event, CoreError> {
    self.doc.events.iter_mut().find(|e| e.id == id).ok_or(CoreError::NotFound)
  }
}
