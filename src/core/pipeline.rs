use crate::core::books::{self, RecommendOptions};
use crate::core::loader::load_bookworms;
use crate::core::render::render;
use crate::core::{Analysis, Bookworm, ConfigProvider, LoadOutcome, Pipeline, Storage};
use crate::utils::error::Result;
use crate::utils::validation::duplicate_names;

pub struct BookwormPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BookwormPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BookwormPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Bookworm>> {
        tracing::debug!("Loading bookworms from: {}", self.config.input_path());
        let bookworms = load_bookworms(&self.storage, self.config.input_path()).await?;

        // 名字相同的書蟲會互相排除在推薦來源之外
        for name in duplicate_names(&bookworms) {
            tracing::warn!(
                "Several bookworms are named '{}'; they will not recommend books to each other",
                name
            );
        }

        Ok(bookworms)
    }

    async fn transform(&self, bookworms: Vec<Bookworm>) -> Result<Analysis> {
        let options = RecommendOptions {
            sort: self.config.sort_recommendations(),
        };

        let common_books = books::find_common_books(&bookworms);
        tracing::debug!("Found {} common books", common_books.len());

        let recommendations = books::recommend_other_books_with(&bookworms, options);
        tracing::debug!(
            "Built recommendations for {} bookworms (sorted: {})",
            recommendations.len(),
            options.sort
        );

        Ok(Analysis {
            reader_count: bookworms.len(),
            book_occurrences: bookworms.iter().map(|b| b.books.len()).sum(),
            common_books,
            recommendations,
        })
    }

    async fn load(&self, analysis: Analysis) -> Result<LoadOutcome> {
        let format = self.config.output_format();
        let report = render(&analysis, format)?;

        match self.config.output_path() {
            Some(path) => {
                tracing::debug!("Writing {:?} report ({} bytes) to {}", format, report.len(), path);
                self.storage.write_file(path, report.as_bytes()).await?;
                Ok(LoadOutcome::Written(path.to_string()))
            }
            None => Ok(LoadOutcome::Rendered(report)),
        }
    }
}
