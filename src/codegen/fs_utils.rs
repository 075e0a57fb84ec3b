//! Output helpers for generated scripts

use crate::error::{FillerError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write content to a file, creating parent directories if needed
pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| FillerError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    fs::write(path, contents).map_err(io_err)
}

/// Write a script to `output`, or to stdout when no path is given
pub fn write_script(script: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => write_file(path, script),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(script.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| FillerError::Io {
                    path: "<stdout>".into(),
                    source,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/filler.sql");

        write_script("BEGIN;\n", Some(&path)).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "BEGIN;\n");
    }
}
