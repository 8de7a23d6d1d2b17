use std::fs;
use std::io;
use std::path::Path;

/// Write the suggestions file (creates parent directories as needed).
pub fn write_suggestions(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/resume_suggestions.txt");

        write_suggestions(&path, "Summary: ...").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Summary: ...");
    }

    #[test]
    fn test_write_into_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(write_suggestions(dir.path(), "text").is_err());
    }
}
