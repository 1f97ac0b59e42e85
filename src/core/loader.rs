use crate::domain::model::Bookworm;
use crate::domain::ports::Storage;
use crate::utils::error::{BookwormsError, Result};
use std::io::ErrorKind;

/// 讀取並解析書蟲 JSON 檔案
pub async fn load_bookworms<S: Storage>(storage: &S, path: &str) -> Result<Vec<Bookworm>> {
    let data = match storage.read_file(path).await {
        Ok(data) => data,
        Err(BookwormsError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
            return Err(BookwormsError::NotFound {
                path: path.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    tracing::debug!("Read {} bytes from {}", data.len(), path);

    decode_bookworms(path, &data)
}

/// 解析 JSON 陣列；`path` 只用於錯誤訊息
pub fn decode_bookworms(path: &str, data: &[u8]) -> Result<Vec<Bookworm>> {
    serde_json::from_slice(data).map_err(|source| BookwormsError::InvalidDocument {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Book;

    fn parse_bookworms(content: &str) -> Result<Vec<Bookworm>> {
        decode_bookworms("inline.json", content.as_bytes())
    }

    #[test]
    fn test_parse_bookworms() {
        let content = r#"[
            {"name": "Fadi", "books": [{"author": "Sylvia Plath", "title": "The Bell Jar"}]},
            {"name": "Peggy", "books": []}
        ]"#;

        let bookworms = parse_bookworms(content).unwrap();
        assert_eq!(
            bookworms,
            vec![
                Bookworm::new("Fadi", vec![Book::new("Sylvia Plath", "The Bell Jar")]),
                Bookworm::new("Peggy", vec![]),
            ]
        );
    }

    #[test]
    fn test_parse_bookworms_rejects_missing_fields() {
        let err = parse_bookworms(r#"[{"name": "Fadi"}]"#).unwrap_err();
        assert!(matches!(err, BookwormsError::InvalidDocument { .. }));
    }

    #[test]
    fn test_parse_bookworms_rejects_non_array() {
        assert!(parse_bookworms(r#"{"name": "Fadi", "books": []}"#).is_err());
        assert!(parse_bookworms("[").is_err());
    }
}
