use crate::domain::{Artist, ArtistId, Document, ImageRef};
use crate::errors::CoreError;
use crate::services::sync;
use tracing::info;

/// Vista de servicio sobre el directorio de artistas de un documento.
///
/// Posee la identidad canónica y el estado de fotos. Toda escritura de
/// `main_photo` propaga sincrónicamente a los snapshots de los eventos
/// vía [`sync::propagate_photo`].
pub struct ArtistDirectory<'a> {
  doc: &'a mut Document,
}

impl<'a> ArtistDirectory<'a> {
  pub fn new(doc: &'a mut Document) -> Self {
    Self { doc }
  }

  /// Resuelve un nombre libre a un id estable, creando el artista si
  /// no existe.
  ///
  /// El nombre se recorta; la búsqueda no distingue mayúsculas. Un
  /// fallo de búsqueda crea un artista con biografía, foto y galería
  /// vacías. Determinista para un estado dado del directorio.
  pub fn resolve_or_create(&mut self, name: &str) -> ArtistId {
    let name = name.trim();

    if let Some(id) = self.doc.artists.resolve(name) {
      return id;
    }

    let artist = Artist::new(name);
    let id = artist.id;
    self.doc.artists.insert(artist);
    info!(%id, name, "artist created");
    id
  }

  pub fn get(&self, id: ArtistId) -> Option<&Artist> {
    self.doc.artists.get(id)
  }

  /// Fija la foto canónica y la propaga a todos los snapshots.
  pub fn set_main_photo(&mut self, id: ArtistId, photo: ImageRef) -> Result<(), CoreError> {
    self.write_photo(id, Some(photo))
  }

  /// Borra la foto canónica y propaga la ausencia.
  pub fn clear_main_photo(&mut self, id: ArtistId) -> Result<(), CoreError> {
    self.write_photo(id, None)
  }

  fn write_photo(&mut self, id: ArtistId, photo: Option<ImageRef>) -> Result<(), CoreError> {
    let Document { artists, events, .. } = &mut *self.doc;

    let artist = artists.get_mut(id).ok_or(CoreError::NotFound)?;
    artist.main_photo = photo;

    sync::propagate_photo(id, artist.main_photo.as_ref(), events);
    Ok(())
  }

  pub fn set_bio(&mut self, id: ArtistId, bio: String) -> Result<(), CoreError> {
    let artist = self.doc.artists.get_mut(id).ok_or(CoreError::NotFound)?;
    artist.bio = bio;
    Ok(())
  }

  /// Añade una imagen a la galería. La galería no se desnormaliza en
  /// ningún evento, así que no hay propagación.
  pub fn append_gallery_image(&mut self, id: ArtistId, image: ImageRef) -> Result<(), CoreError> {
    let artist = self.doc.artists.get_mut(id).ok_or(CoreError::NotFound)?;
    artist.gallery.push(image);
    Ok(())
  }

  /// Elimina la imagen `index` de la galería, desplazando las
  /// siguientes. Contrato por índice: no es estable frente a ediciones
  /// concurrentes del mismo artista.
  pub fn remove_gallery_image(&mut self, id: ArtistId, index: usize) -> Result<(), CoreError> {
    let artist = self.doc.artists.get_mut(id).ok_or(CoreError::NotFound)?;
    if index >= artist.gallery.len() {
      return Err(CoreError::IndexOutOfRange);
    }
    artist.gallery.remove(index);
    Ok(())
  }

  /// Borra el registro del artista. No toca ningún evento: los
  /// `GuestSnapshot` que lo referencien quedan colgando, con el nombre
  /// y la foto congelados en su último valor.
  pub fn delete(&mut self, id: ArtistId) -> Result<(), CoreError> {
    self.doc.artists.remove(id).ok_or(CoreError::NotFound)?;
    info!(%id, "artist deleted");
    Ok(())
  }
}
