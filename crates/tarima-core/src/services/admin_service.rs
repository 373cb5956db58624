use crate::domain::{Artist, ArtistId, Document, EventId, ImageRef, SiteSettings};
use crate::errors::CoreError;
use crate::ports::image_store::{ImageStore, Upload};
use crate::ports::repository::DocumentRepository;
use crate::services::catalog::{EventCatalog, EventFields, GuestInput, InsertionOrder};
use crate::services::directory::ArtistDirectory;
use crate::services::session::DocumentSession;

/// Fachada de administración: una operación por flujo del panel.
///
/// Cada método es una única transacción `with_document`. La capa web
/// (externa) solo traduce formularios a estas llamadas; se asume que el
/// llamador ya pasó la barrera de autorización.
///
/// Las subidas se almacenan antes de abrir la transacción, igual que el
/// sistema original escribía los archivos antes de mutar los datos: un
/// fallo de formato o de disco aborta la operación completa.
pub struct AdminService<R: DocumentRepository, S: ImageStore> {
  session: DocumentSession<R>,
  images: S,
  order: InsertionOrder,
}

impl<R: DocumentRepository, S: ImageStore> AdminService<R, S> {
  pub fn new(repo: R, images: S) -> Self {
    Self::with_order(repo, images, InsertionOrder::default())
  }

  pub fn with_order(repo: R, images: S, order: InsertionOrder) -> Self {
    Self { session: DocumentSession::new(repo), images, order }
  }

  fn store_upload(&self, upload: Option<Upload>) -> Result<Option<ImageRef>, CoreError> {
    match upload {
      None => Ok(None),
      Some(u) => Ok(Some(self.images.save(&u.bytes, &u.filename)?)),
    }
  }

  fn store_uploads(&self, uploads: Vec<Upload>) -> Result<Vec<ImageRef>, CoreError> {
    uploads.into_iter().map(|u| Ok(self.images.save(&u.bytes, &u.filename)?)).collect()
  }

  // -------- Eventos --------

  pub fn create_event(
    &self,
    fields: EventFields,
    flyer: Option<Upload>,
    photos: Vec<Upload>,
    guests: Vec<GuestInput>,
  ) -> Result<EventId, CoreError> {
    let flyer = self.store_upload(flyer)?;
    let photos = self.store_uploads(photos)?;

    self.session.with_document(|doc| {
      EventCatalog::with_order(doc, &self.images, self.order)
        .create_event(fields, flyer, photos, guests)
    })
  }

  pub fn update_event(
    &self,
    id: EventId,
    fields: EventFields,
    flyer: Option<Upload>,
    append_photos: Vec<Upload>,
    guests: Vec<GuestInput>,
  ) -> Result<(), CoreError> {
    let flyer = self.store_upload(flyer)?;
    let photos = self.store_uploads(append_photos)?;

    self.session.with_document(|doc| {
      EventCatalog::with_order(doc, &self.images, self.order)
        .update_event(id, fields, flyer, photos, guests)
    })
  }

  pub fn delete_event(&self, id: EventId) -> Result<(), CoreError> {
    self.session.with_document(|doc| EventCatalog::new(doc, &self.images).delete_event(id))
  }

  pub fn clear_event_flyer(&self, id: EventId) -> Result<(), CoreError> {
    self.session.with_document(|doc| EventCatalog::new(doc, &self.images).clear_flyer(id))
  }

  pub fn remove_event_photo(&self, id: EventId, index: usize) -> Result<(), CoreError> {
    self.session.with_document(|doc| EventCatalog::new(doc, &self.images).remove_photo(id, index))
  }

  // -------- Artistas --------

  /// El flujo completo del formulario de perfil: biografía siempre,
  /// foto canónica solo si llega subida (con propagación), galería
  /// añadida en orden.
  pub fn update_artist_profile(
    &self,
    id: ArtistId,
    bio: String,
    main_photo: Option<Upload>,
    gallery: Vec<Upload>,
  ) -> Result<(), CoreError> {
    let main_photo = self.store_upload(main_photo)?;
    let gallery = self.store_uploads(gallery)?;

    self.session.with_document(|doc| {
      let mut directory = ArtistDirectory::new(doc);
      directory.set_bio(id, bio)?;
      if let Some(photo) = main_photo {
        directory.set_main_photo(id, photo)?;
      }
      for image in gallery {
        directory.append_gallery_image(id, image)?;
      }
      Ok(())
    })
  }

  pub fn set_artist_photo(&self, id: ArtistId, upload: Upload) -> Result<(), CoreError> {
    let photo = self.images.save(&upload.bytes, &upload.filename)?;
    self.session.with_document(|doc| ArtistDirectory::new(doc).set_main_photo(id, photo))
  }

  pub fn clear_artist_photo(&self, id: ArtistId) -> Result<(), CoreError> {
    self.session.with_document(|doc| ArtistDirectory::new(doc).clear_main_photo(id))
  }

  pub fn remove_gallery_image(&self, id: ArtistId, index: usize) -> Result<(), CoreError> {
    self.session.with_document(|doc| ArtistDirectory::new(doc).remove_gallery_image(id, index))
  }

  pub fn delete_artist(&self, id: ArtistId) -> Result<(), CoreError> {
    self.session.with_document(|doc| ArtistDirectory::new(doc).delete(id))
  }

  // -------- Ajustes --------

  pub fn update_settings(
    &self,
    mut settings: SiteSettings,
    bg_image: Option<Upload>,
  ) -> Result<(), CoreError> {
    let bg_image = self.store_upload(bg_image)?;

    self.session.with_document(|doc| {
      if let Some(bg) = bg_image {
        settings.bg_image = bg.into_inner();
      }
      doc.settings = settings;
      Ok(())
    })
  }

  // -------- Lecturas --------

  /// Copia completa del documento para las páginas públicas.
  pub fn document(&self) -> Result<Document, CoreError> {
    self.session.read(|doc| doc.clone())
  }

  /// Perfil de un artista. `NotFound` cubre tanto ids desconocidos
  /// como referencias colgantes: el llamador muestra "artista no
  /// disponible".
  pub fn artist(&self, id: ArtistId) -> Result<Artist, CoreError> {
    self.session.read(|doc| doc.artists.get(id).cloned())?.ok_or(CoreError::NotFound)
  }
}
