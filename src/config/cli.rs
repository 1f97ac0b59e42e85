use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 本機檔案系統存取，相對路徑以 `base_path` 為根
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(Path::new(path))
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read_under_base_path() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("nested/report.txt", b"hello").await.unwrap();

        assert!(temp_dir.path().join("nested/report.txt").exists());
        assert_eq!(storage.read_file("nested/report.txt").await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        match storage.read_file("missing.json").await {
            Err(crate::utils::error::BookwormsError::IoError(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected NotFound io error, got {:?}", other),
        }
    }
}
