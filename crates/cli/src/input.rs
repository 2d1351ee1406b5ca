use std::path::{Path, PathBuf};

use anyhow::Context;

/// Transcriptions for one label: the file itself, or every `*.txt` in a
/// directory (one OCR pass per file, merged in file-name order).
pub fn read_transcriptions(path: &Path) -> anyhow::Result<Vec<String>> {
    if !path.is_dir() {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return Ok(vec![text]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)
        .with_context(|| format!("listing {}", path.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("no .txt transcriptions in {}", path.display());
    }

    files
        .iter()
        .map(|f| std::fs::read_to_string(f).with_context(|| format!("reading {}", f.display())))
        .collect()
}

/// Report name for an input path.
pub fn label_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_file_is_one_transcription() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.txt");
        std::fs::write(&path, "HIGH RIDGE").unwrap();
        assert_eq!(read_transcriptions(&path).unwrap(), vec!["HIGH RIDGE".to_string()]);
    }

    #[test]
    fn directory_passes_are_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("2-auto.txt"), "second").unwrap();
        std::fs::write(dir.path().join("1-block.txt"), "first").unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        assert_eq!(read_transcriptions(dir.path()).unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn empty_directory_and_missing_file_fail() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_transcriptions(dir.path()).is_err());
        assert!(read_transcriptions(&dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn label_name_is_file_name() {
        assert_eq!(label_name(Path::new("/tmp/labels/front.txt")), "front.txt");
    }
}
