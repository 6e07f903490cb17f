//! txtread - a terminal pager for plain-text books
//!
//! txtread pages a text file through a fixed viewport, remembers where you
//! stopped, and keeps per-book word lists, notes and quotes.

pub mod app;
pub mod book;
pub mod config;
pub mod error;
pub mod external;
pub mod notes;
pub mod reader;
pub mod stats;
pub mod theme;
pub mod ui;
pub mod words;

pub use app::App;
pub use book::Document;
pub use config::Config;
pub use error::ReaderError;
pub use theme::Theme;
