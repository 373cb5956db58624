use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Referencia estable a una imagen ya almacenada.
///
/// Es la ruta relativa (o URL) que devuelve el `ImageStore`. El núcleo
/// nunca interpreta su contenido: solo la copia y la compara.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
  pub fn new(raw: impl Into<String>) -> Self {
    ImageRef(raw.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }

  /// Normaliza una representación histórica de "foto opcional".
  ///
  /// Los datos persistidos por versiones anteriores mezclan tres formas
  /// de "sin foto": `null`, cadena vacía y la cadena literal `"None"`.
  /// Todas colapsan aquí a `None`; cualquier otra cadena (recortada) es
  /// una referencia válida.
  pub fn normalize(raw: String) -> Option<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "None" {
      return None;
    }
    Some(ImageRef(trimmed.to_string()))
  }
}

impl fmt::Display for ImageRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Deserializador para campos `Option<ImageRef>` que aplica
/// [`ImageRef::normalize`] en la frontera, una sola vez.
pub fn opt_normalized<'de, D>(de: D) -> Result<Option<ImageRef>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<String>::deserialize(de)?;
  Ok(raw.and_then(ImageRef::normalize))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_collapses_historical_empties() {
    assert_eq!(ImageRef::normalize(String::new()), None);
    assert_eq!(ImageRef::normalize("   ".to_string()), None);
    assert_eq!(ImageRef::normalize("None".to_string()), None);
  }

  #[test]
  fn normalize_trims_real_refs() {
    let r = ImageRef::normalize(" uploads/a.png ".to_string()).unwrap();
    assert_eq!(r.as_str(), "uploads/a.png");
  }
}
