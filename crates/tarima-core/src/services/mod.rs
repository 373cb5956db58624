pub mod admin_service;
pub mod catalog;
pub mod directory;
pub mod session;
pub mod sync;

pub use admin_service::AdminService;
pub use catalog::{EventCatalog, EventFields, GuestInput, InsertionOrder};
pub use directory::ArtistDirectory;
pub use session::DocumentSession;
