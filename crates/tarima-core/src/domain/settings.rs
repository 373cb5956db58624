use serde::{Deserialize, Serialize};

/// Ajustes públicos del sitio.
///
/// Viajan dentro del documento persistido, no en la config de la app:
/// el admin los edita desde el panel igual que los eventos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
  #[serde(default = "default_title")]
  pub title: String,

  #[serde(default)]
  pub subtitle: String,

  #[serde(default)]
  pub description: String,

  #[serde(default)]
  pub address: String,

  #[serde(default)]
  pub waze_link: String,

  #[serde(default)]
  pub maps_link: String,

  #[serde(default)]
  pub instagram: String,

  /// Imagen de fondo de la portada.
  #[serde(default = "default_bg_image")]
  pub bg_image: String,
}

fn default_title() -> String {
  "Le Rendez-vous du Dimanche".to_string()
}

fn default_bg_image() -> String {
  "bg_stage.jpg".to_string()
}

impl Default for SiteSettings {
  fn default() -> Self {
    SiteSettings {
      title: default_title(),
      subtitle: String::new(),
      description: String::new(),
      address: String::new(),
      waze_link: String::new(),
      maps_link: String::new(),
      instagram: String::new(),
      bg_image: default_bg_image(),
    }
  }
}
