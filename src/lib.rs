pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::books::{
    count_books, find_common_books, recommend_other_books, recommend_other_books_with,
    sort_books, RecommendOptions,
};
pub use core::render::OutputFormat;
pub use core::{etl::BookwormsEngine, pipeline::BookwormPipeline};
pub use domain::model::{Analysis, Book, Bookworm, LoadOutcome, Recommendation};
pub use utils::error::{BookwormsError, Result};
