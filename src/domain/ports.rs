use crate::core::render::OutputFormat;
use crate::domain::model::{Analysis, Bookworm, LoadOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn sort_recommendations(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Bookworm>>;
    async fn transform(&self, bookworms: Vec<Bookworm>) -> Result<Analysis>;
    async fn load(&self, analysis: Analysis) -> Result<LoadOutcome>;
}
