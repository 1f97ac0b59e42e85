use crate::domain::model::Bookworm;
use crate::utils::error::{BookwormsError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BookwormsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BookwormsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(BookwormsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(BookwormsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

/// 找出重複出現的書蟲名字，依第一次重複的順序回傳
pub fn duplicate_names(bookworms: &[Bookworm]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for bookworm in bookworms {
        let name = bookworm.name.as_str();
        if !seen.insert(name) && reported.insert(name) {
            duplicates.push(name.to_string());
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("path", "testdata/bookworms.json").is_ok());
        assert!(validate_path("path", "").is_err());
        assert!(validate_path("path", "   ").is_err());
        assert!(validate_path("path", "bad\0path.json").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("path", "bookworms.json", &["json"]).is_ok());
        assert!(validate_file_extension("path", "bookworms.txt", &["json"]).is_err());
        assert!(validate_file_extension("path", "bookworms", &["json"]).is_err());
    }

    #[test]
    fn test_duplicate_names() {
        let bookworms = vec![
            Bookworm::new("Fadi", vec![]),
            Bookworm::new("Peggy", vec![]),
            Bookworm::new("Fadi", vec![]),
            Bookworm::new("Fadi", vec![]),
        ];
        assert_eq!(duplicate_names(&bookworms), vec!["Fadi".to_string()]);
        assert!(duplicate_names(&bookworms[..2]).is_empty());
    }
}
