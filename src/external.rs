//! Clipboard and browser glue
//!
//! Every failure here is reported back as a value; nothing in this module
//! may bring the reader down.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Which web search a clipboard lookup goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    Dictionary,
    Catalog,
}

/// Read text from the system clipboard
pub fn read_clipboard() -> Result<String> {
    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard.get_text().context("Clipboard holds no text")
}

/// Put text on the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard.set_text(text.to_string()).context("Failed to copy to clipboard")
}

/// Fill the `{}` placeholder of a search URL.
///
/// Catalog searches go through a query string and are escaped; dictionary
/// lookups take the term as a path segment as-is.
pub fn search_url(template: &str, target: SearchTarget, text: &str) -> Option<String> {
    let term = text.trim();
    if term.is_empty() {
        return None;
    }
    let term = match target {
        SearchTarget::Dictionary => term.to_string(),
        SearchTarget::Catalog => query_escape(term),
    };
    Some(if template.contains("{}") {
        template.replacen("{}", &term, 1)
    } else {
        format!("{template}{term}")
    })
}

/// Escape text for use as a query-string value (spaces become `+`)
pub fn query_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                escaped.push(byte as char)
            }
            b' ' => escaped.push('+'),
            _ => escaped.push_str(&format!("%{byte:02X}")),
        }
    }
    escaped
}

/// Open a URL in the system browser
pub fn open_in_browser(url: &str) -> Result<()> {
    open::that_detached(url).with_context(|| format!("Failed to open {url}"))
}

/// Look up the clipboard contents with the given search.
///
/// Returns `Ok(None)` when the clipboard is empty so the caller can stay quiet.
pub fn search_clipboard(template: &str, target: SearchTarget) -> Result<Option<String>> {
    let text = read_clipboard()?;
    let Some(url) = search_url(template, target, &text) else {
        return Ok(None);
    };
    open_in_browser(&url)?;
    tracing::info!(%url, "opened search");
    Ok(Some(url))
}
