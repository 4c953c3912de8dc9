//
//  catchtrend
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Config file I/O.
//!
//! Thin wrappers over `std::fs` that attach the path to every error and
//! create parent directories before writing.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the whole file as UTF-8 text.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Writes `content`, creating parent directories as needed.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_config_file(&path, "[api]\n").unwrap();
        assert_eq!(read_config_file(&path).unwrap(), "[api]\n");
    }

    #[test]
    fn test_read_missing_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = read_config_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.toml"));
    }
}
