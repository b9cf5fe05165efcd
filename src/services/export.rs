//! Serum protocol export
//!
//! Writes the rendered protocol text to disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write the protocol to `path`, creating parent directories as needed
pub fn write_protocol(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
    }

    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Serum protocol written to {}", path.display());

    Ok(())
}

/// Project code stamped on an exported protocol
pub fn project_code() -> u16 {
    use rand::Rng;
    rand::thread_rng().gen_range(1000..=9999)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_protocol_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serums").join("serum_protocol.txt");

        write_protocol(&path, "--- GENETIC SERUM PROTOCOL ---").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "--- GENETIC SERUM PROTOCOL ---"
        );
    }

    #[test]
    fn test_write_protocol_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serum_protocol.txt");

        write_protocol(&path, "first").unwrap();
        write_protocol(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_protocol_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert!(write_protocol(&blocker.join("serum.txt"), "x").is_err());
    }

    #[test]
    fn test_project_code_range() {
        for _ in 0..100 {
            let code = project_code();
            assert!((1000..=9999).contains(&code));
        }
    }
}
