mod backend;
mod model;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use model::CatalogConfig;
pub use paths::{ConfigError, TarimaPaths};

use once_cell::sync::Lazy;

// Singleton de paths (portable / system)
pub static PATHS: Lazy<TarimaPaths> =
  Lazy::new(|| TarimaPaths::detect().expect("failed to init TarimaPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));

#[cfg(test)]
mod tests {
  use super::*;
  use serde::{Deserialize, Serialize};
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Probe {
    knob: u32,
  }

  fn paths_in(base: &std::path::Path) -> TarimaPaths {
    let paths = TarimaPaths {
      base_dir: base.to_path_buf(),
      config_dir: base.join("config"),
      data_dir: base.join("data"),
      uploads_dir: base.join("uploads"),
    };
    std::fs::create_dir_all(&paths.config_dir).unwrap();
    paths
  }

  #[test]
  fn section_round_trip_preserves_other_sections() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(paths_in(tmp.path()));

    backend.save_section("probe", &Probe { knob: 7 }).unwrap();
    backend.save_section("other", &Probe { knob: 1 }).unwrap();

    let probe: Probe = backend.load_section("probe").unwrap();
    assert_eq!(probe, Probe { knob: 7 });
    let other: Probe = backend.load_section("other").unwrap();
    assert_eq!(other, Probe { knob: 1 });
  }

  #[test]
  fn missing_file_or_section_yields_default() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(paths_in(tmp.path()));

    let probe: Probe = backend.load_section_with_default("probe").unwrap();
    assert_eq!(probe, Probe::default());

    backend.save_section("other", &Probe { knob: 1 }).unwrap();
    let probe: Probe = backend.load_section_with_default("probe").unwrap();
    assert_eq!(probe, Probe::default());
  }
}
