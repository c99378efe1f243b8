//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths.
///
/// An argument naming an existing file is taken literally, even if it
/// contains glob characters. Argument order is preserved and duplicates are
/// kept, since both matter to combine and compare. Matches of one pattern
/// come in glob order.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let literal = Path::new(pattern);
        if literal.is_file() {
            files.push(literal.to_path_buf());
            continue;
        }

        let paths =
            glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.to_string()))?;

        let before = files.len();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            return Err(CliError::FileNotFound(pattern.to_string()).into());
        }
        log::debug!("{} matched {} files", pattern, files.len() - before);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, "").unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_literal_paths_keep_argument_order() {
        let temp_dir = TempDir::new().unwrap();
        let b = touch(&temp_dir, "b.txt");
        let a = touch(&temp_dir, "a.txt");

        let files = resolve_patterns(&[b.clone(), a.clone()]).unwrap();
        assert_eq!(files, vec![PathBuf::from(b), PathBuf::from(a)]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let a = touch(&temp_dir, "a.txt");

        let files = resolve_patterns(&[a.clone(), a]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_wildcard_expands_sorted() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir, "opp.txt");
        touch(&temp_dir, "aopp.txt");
        touch(&temp_dir, "copp.txt");
        touch(&temp_dir, "notes.md");

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let files = resolve_patterns(&[pattern]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["aopp.txt", "copp.txt", "opp.txt"]);
    }

    #[test]
    fn test_existing_file_with_glob_characters_is_literal() {
        let temp_dir = TempDir::new().unwrap();
        let bracketed = touch(&temp_dir, "bench[1].txt");
        touch(&temp_dir, "bench1.txt");

        let files = resolve_patterns(&[bracketed.clone(), bracketed.clone()]).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from(&bracketed), PathBuf::from(&bracketed)]
        );
    }

    #[test]
    fn test_unmatched_pattern_is_error() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found matching"));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid file pattern"));
    }
}
