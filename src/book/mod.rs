//! Document loading and page windowing

pub mod document;

pub use document::{Document, book_chunk};
