use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escritura atómica: archivo temporal + `sync_all` + rename.
///
/// El rename es atómico dentro del mismo filesystem, así que un lector
/// concurrente ve siempre o el contenido viejo o el nuevo, nunca un
/// archivo a medias. Crea los directorios padre si faltan.
pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }

  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents)?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  atomic_write(path, contents.as_bytes())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn writes_and_replaces_content() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("data.json");

    atomic_write_str(&path, "primero").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "primero");

    atomic_write_str(&path, "segundo").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "segundo");

    // El temporal no sobrevive.
    assert!(!path.with_extension("tmp").exists());
  }

  #[test]
  fn creates_missing_parent_dirs() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("a/b/data.json");

    atomic_write(&path, b"x").unwrap();
    assert!(path.exists());
  }
}
