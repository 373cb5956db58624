use crate::domain::artist::Artist;
use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Forma canónica de un nombre para la deduplicación:
/// recortado y en minúsculas.
pub fn normalized_name(name: &str) -> String {
  name.trim().to_lowercase()
}

/// El directorio de artistas: mapa id → artista más un índice de
/// nombres normalizados.
///
/// El índice sustituye al escaneo lineal por nombre: la resolución es
/// una consulta directa y la unicidad queda garantizada por
/// construcción. Se persiste solo el mapa; el índice se reconstruye al
/// deserializar. Si el histórico trae nombres duplicados, el índice
/// apunta al primer id en orden del mapa y los demás siguen siendo
/// accesibles por id (no se fusionan retroactivamente).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<ArtistId, Artist>", into = "BTreeMap<ArtistId, Artist>")]
pub struct ArtistRoster {
  by_id: BTreeMap<ArtistId, Artist>,
  by_name: HashMap<String, ArtistId>,
}

impl ArtistRoster {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserta un artista y lo indexa por nombre normalizado.
  /// Si el nombre ya estaba indexado, el índice conserva al titular.
  pub fn insert(&mut self, artist: Artist) {
    self.by_name.entry(normalized_name(&artist.name)).or_insert(artist.id);
    self.by_id.insert(artist.id, artist);
  }

  /// Resuelve un nombre (recortado, sin distinguir mayúsculas) al id
  /// del artista existente, si lo hay.
  pub fn resolve(&self, name: &str) -> Option<ArtistId> {
    self.by_name.get(&normalized_name(name)).copied()
  }

  pub fn get(&self, id: ArtistId) -> Option<&Artist> {
    self.by_id.get(&id)
  }

  pub fn get_mut(&mut self, id: ArtistId) -> Option<&mut Artist> {
    self.by_id.get_mut(&id)
  }

  pub fn contains(&self, id: ArtistId) -> bool {
    self.by_id.contains_key(&id)
  }

  /// Elimina un artista. Si era el titular del índice para su nombre,
  /// el índice pasa a apuntar a otro artista superviviente con el
  /// mismo nombre normalizado, si existe (lo que encontraría un
  /// escaneo lineal del mapa).
  pub fn remove(&mut self, id: ArtistId) -> Option<Artist> {
    let artist = self.by_id.remove(&id)?;
    let key = normalized_name(&artist.name);

    if self.by_name.get(&key) == Some(&id) {
      self.by_name.remove(&key);
      let survivor =
        self.by_id.iter().find(|(_, a)| normalized_name(&a.name) == key).map(|(aid, _)| *aid);
      if let Some(aid) = survivor {
        self.by_name.insert(key, aid);
      }
    }

    Some(artist)
  }

  pub fn len(&self) -> usize {
    self.by_id.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_id.is_empty()
  }

  /// Artistas en orden estable de id.
  pub fn iter(&self) -> impl Iterator<Item = &Artist> {
    self.by_id.values()
  }
}

impl PartialEq for ArtistRoster {
  fn eq(&self, other: &Self) -> bool {
    // El índice es estado derivado; la identidad del roster es el mapa.
    self.by_id == other.by_id
  }
}

impl Eq for ArtistRoster {}

impl From<BTreeMap<ArtistId, Artist>> for ArtistRoster {
  fn from(by_id: BTreeMap<ArtistId, Artist>) -> Self {
    let mut by_name = HashMap::new();
    for (id, artist) in &by_id {
      by_name.entry(normalized_name(&artist.name)).or_insert(*id);
    }
    ArtistRoster { by_id, by_name }
  }
}

impl From<ArtistRoster> for BTreeMap<ArtistId, Artist> {
  fn from(roster: ArtistRoster) -> Self {
    roster.by_id
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn named(name: &str) -> Artist {
    Artist::new(name)
  }

  #[test]
  fn resolve_ignores_case_and_whitespace() {
    let mut roster = ArtistRoster::new();
    let dana = named("Dana");
    let id = dana.id;
    roster.insert(dana);

    assert_eq!(roster.resolve("dana"), Some(id));
    assert_eq!(roster.resolve("  DANA  "), Some(id));
    assert_eq!(roster.resolve("Dana B"), None);
  }

  #[test]
  fn duplicate_names_keep_first_holder() {
    let mut roster = ArtistRoster::new();
    let first = named("Echo");
    let first_id = first.id;
    roster.insert(first);
    let second = named("echo");
    let second_id = second.id;
    roster.insert(second);

    assert_eq!(roster.resolve("ECHO"), Some(first_id));
    // El duplicado no se fusiona: sigue vivo y accesible por id.
    assert!(roster.contains(second_id));
    assert_eq!(roster.len(), 2);
  }

  #[test]
  fn remove_repoints_index_to_survivor() {
    let mut roster = ArtistRoster::new();
    let first = named("Echo");
    let first_id = first.id;
    roster.insert(first);
    let second = named("Echo");
    let second_id = second.id;
    roster.insert(second);

    roster.remove(first_id).unwrap();
    assert_eq!(roster.resolve("echo"), Some(second_id));

    roster.remove(second_id).unwrap();
    assert_eq!(roster.resolve("echo"), None);
  }

  #[test]
  fn index_survives_serde_round_trip() {
    let mut roster = ArtistRoster::new();
    let dana = named("Dana");
    let id = dana.id;
    roster.insert(dana);

    let map: BTreeMap<ArtistId, Artist> = roster.clone().into();
    let rebuilt = ArtistRoster::from(map);

    assert_eq!(rebuilt, roster);
    assert_eq!(rebuilt.resolve("dana "), Some(id));
  }
}
