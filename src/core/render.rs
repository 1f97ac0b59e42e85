use crate::domain::model::{Analysis, Book, Recommendation};
use crate::utils::error::{BookwormsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    reader_count: usize,
    book_occurrences: usize,
    common_books: &'a [Book],
    recommendations: &'a [Recommendation],
}

pub fn render(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(analysis)),
        OutputFormat::Json => render_json(analysis),
        OutputFormat::Csv => render_csv(analysis),
    }
}

/// `- <title> by <author>`，每本書一行
pub fn render_books(books: &[Book]) -> String {
    books
        .iter()
        .map(|book| format!("- {} by {}\n", book.title, book.author))
        .collect()
}

pub fn render_recommendations(recommendations: &[Recommendation]) -> String {
    let mut out = String::new();
    for recommendation in recommendations {
        let _ = writeln!(out, "{}, we think you may also like:", recommendation.name);
        out.push_str(&render_books(&recommendation.books));
    }
    out
}

pub fn render_text(analysis: &Analysis) -> String {
    let mut out = String::from("** Common books **\n");
    out.push_str(&render_books(&analysis.common_books));
    out.push_str("\n** Recommended books **\n");
    out.push_str(&render_recommendations(&analysis.recommendations));
    out
}

pub fn render_json(analysis: &Analysis) -> Result<String> {
    let report = JsonReport {
        generated_at: Utc::now(),
        reader_count: analysis.reader_count,
        book_occurrences: analysis.book_occurrences,
        common_books: &analysis.common_books,
        recommendations: &analysis.recommendations,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_csv(analysis: &Analysis) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["section", "reader", "author", "title"])?;

    for book in &analysis.common_books {
        writer.write_record(["common", "", book.author.as_str(), book.title.as_str()])?;
    }

    for recommendation in &analysis.recommendations {
        for book in &recommendation.books {
            writer.write_record([
                "recommendation",
                recommendation.name.as_str(),
                book.author.as_str(),
                book.title.as_str(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BookwormsError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        BookwormsError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
