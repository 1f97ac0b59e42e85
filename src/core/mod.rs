pub mod books;
pub mod etl;
pub mod loader;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{Analysis, Book, Bookworm, LoadOutcome, Recommendation};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
