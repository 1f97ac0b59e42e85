use crate::core::{LoadOutcome, Pipeline};
use crate::utils::error::Result;

pub struct BookwormsEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BookwormsEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LoadOutcome> {
        tracing::info!("Starting bookworms analysis...");

        // Extract
        let bookworms = self.pipeline.extract().await?;
        tracing::info!("Loaded {} bookworms", bookworms.len());

        // Transform
        let analysis = self.pipeline.transform(bookworms).await?;
        tracing::info!(
            "Found {} common books across {} book occurrences",
            analysis.common_books.len(),
            analysis.book_occurrences
        );

        // Load
        let outcome = self.pipeline.load(analysis).await?;
        if let LoadOutcome::Written(path) = &outcome {
            tracing::info!("Report saved to: {}", path);
        }

        Ok(outcome)
    }
}
