use tarima_core::domain::ImageRef;
use tarima_core::ports::repository::DocumentRepository;
use tarima_core::services::ArtistDirectory;
use tarima_storage::JsonDocumentStore;

fn main() {
  // ajusta la ruta si quieres probar contra otro data.json
  let store = JsonDocumentStore::new("data.json");

  let mut doc = store.load().expect("failed to load document");
  println!("Loaded: {} events, {} artists", doc.events.len(), doc.artists.len());

  let mut directory = ArtistDirectory::new(&mut doc);
  let id = directory.resolve_or_create("Test Artist");
  directory.set_main_photo(id, ImageRef::new("uploads/test.png")).expect("failed to set photo");

  println!("Saving artist with id = {id}");
  store.save(&doc).expect("failed to save document");

  let reloaded = store.load().expect("failed to reload document");
  println!("Reloaded from disk: {:?}", reloaded.artists.get(id));
}
