use crate::domain::{ArtistId, Event, ImageRef};
use tracing::debug;

/// Propaga la foto canónica de un artista a todas sus copias
/// desnormalizadas.
///
/// Recorre cada evento y sella con `new_photo` cada `GuestSnapshot`
/// cuyo `artist_id` coincida. Es una función pura y total sobre la
/// colección en memoria: no hay fallo parcial posible.
///
/// El directorio la invoca en cada escritura de foto (sincronización
/// "push"): el listado público sirve el snapshot directamente desde el
/// evento, sin join contra el directorio.
pub fn propagate_photo(artist_id: ArtistId, new_photo: Option<&ImageRef>, events: &mut [Event]) {
  let mut touched = 0usize;

  for event in events.iter_mut() {
    for guest in event.guests.iter_mut() {
      if guest.artist_id == artist_id {
        guest.photo = new_photo.cloned();
        touched += 1;
      }
    }
  }

  debug!(%artist_id, touched, "canonical photo propagated");
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{EventId, GuestSnapshot};

  fn guest(artist_id: ArtistId, name: &str) -> GuestSnapshot {
    GuestSnapshot { artist_id, name: name.to_string(), desc: String::new(), photo: None }
  }

  fn event(guests: Vec<GuestSnapshot>) -> Event {
    Event {
      id: EventId::new(),
      date_str: String::new(),
      time_str: String::new(),
      link: String::new(),
      description: String::new(),
      flyer: None,
      photos: Vec::new(),
      guests,
    }
  }

  #[test]
  fn stamps_every_matching_snapshot_and_no_other() {
    let dana = ArtistId::new();
    let rival = ArtistId::new();
    let mut events = vec![
      event(vec![guest(dana, "Dana"), guest(rival, "Rival")]),
      event(vec![guest(dana, "Dana")]),
    ];

    let photo = ImageRef::new("uploads/dana.png");
    propagate_photo(dana, Some(&photo), &mut events);

    assert_eq!(events[0].guests[0].photo.as_ref(), Some(&photo));
    assert_eq!(events[0].guests[1].photo, None);
    assert_eq!(events[1].guests[0].photo.as_ref(), Some(&photo));
  }

  #[test]
  fn clearing_stamps_none() {
    let dana = ArtistId::new();
    let mut events = vec![event(vec![guest(dana, "Dana")])];
    events[0].guests[0].photo = Some(ImageRef::new("uploads/old.png"));

    propagate_photo(dana, None, &mut events);

    assert_eq!(events[0].guests[0].photo, None);
  }

  #[test]
  fn unknown_artist_is_a_no_op() {
    let dana = ArtistId::new();
    let mut events = vec![event(vec![guest(dana, "Dana")])];

    propagate_photo(ArtistId::new(), Some(&ImageRef::new("uploads/x.png")), &mut events);

    assert_eq!(events[0].guests[0].photo, None);
  }
}
