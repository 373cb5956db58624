pub mod artist;
pub mod document;
pub mod event;
pub mod ids;
pub mod image_ref;
pub mod roster;
pub mod settings;

pub use artist::Artist;
pub use document::Document;
pub use event::{Event, GuestSnapshot};
pub use ids::{ArtistId, EventId};
pub use image_ref::ImageRef;
pub use roster::ArtistRoster;
pub use settings::SiteSettings;
