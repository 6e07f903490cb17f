//! Go-to-line resolution

use once_cell::sync::Lazy;
use regex::Regex;

use super::navigation::{NavigationPolicy, NavigationState};

/// Anything that is not a digit in the goto dialog input
static NON_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]+").unwrap());

/// Find the page-aligned window start for `target_line`.
///
/// Accumulates whole viewport heights until the document length or the
/// target is reached, steps back one page when the target was overshot,
/// and returns the index of the line just before that boundary. The caller
/// places the window one line after the returned index, so a goto lands on
/// the aligned page boundary rather than on the target line itself.
pub fn resolve_goto(total_lines: usize, viewport_height: usize, target_line: usize) -> usize {
    let height = viewport_height.max(1);
    let mut boundary = 0;
    while boundary < total_lines && boundary < target_line {
        boundary += height;
    }
    if boundary > target_line || boundary > total_lines {
        boundary = boundary.saturating_sub(height);
    }
    boundary.saturating_sub(1)
}

/// Strip everything but digits from the goto dialog input
pub fn sanitize_goto_input(input: &str) -> String {
    NON_DIGITS_RE.replace_all(input.trim(), "").into_owned()
}

/// Parse the goto dialog input into a target line, if it holds any digits
pub fn parse_goto_target(input: &str) -> Option<usize> {
    let digits = sanitize_goto_input(input);
    if digits.is_empty() {
        return None;
    }
    // Overflowing input means "as far as possible"
    Some(digits.parse().unwrap_or(usize::MAX))
}

impl NavigationState {
    /// Move the window to the aligned page resolved for `target_line`.
    ///
    /// In line-by-line mode the first line of that page is then pinned to the
    /// bottom row like any other line-wise position. Returns false for an
    /// empty document, which has nowhere to go.
    pub fn goto_line(&mut self, target_line: usize) -> bool {
        let total = self.total_lines();
        if total == 0 {
            return false;
        }
        let mut from_line = resolve_goto(total, self.viewport_height, target_line) + 1;
        if from_line >= total {
            from_line = self.last_page_start();
        }
        self.set_window(from_line, 0);
        if self.policy == NavigationPolicy::LineByLine {
            self.pin_line(self.line_number);
        }
        tracing::debug!(target_line, from_line = self.from_line, "goto resolved");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_lands_on_aligned_boundary() {
        assert_eq!(resolve_goto(2000, 53, 120), 105);
    }

    #[test]
    fn resolve_target_on_boundary() {
        assert_eq!(resolve_goto(2000, 53, 106), 105);
        assert_eq!(resolve_goto(2000, 53, 53), 52);
    }

    #[test]
    fn resolve_non_positive_target_is_document_start() {
        assert_eq!(resolve_goto(2000, 53, 0), 0);
        assert_eq!(resolve_goto(2000, 53, 1), 0);
    }

    #[test]
    fn resolve_target_past_end_uses_last_boundary() {
        // 53 * 37 = 1961 is the last boundary not past 2000 lines
        assert_eq!(resolve_goto(2000, 53, 5000), 1960);
        assert_eq!(resolve_goto(2000, 53, 2000), 1960);
    }

    #[test]
    fn resolve_on_empty_document() {
        assert_eq!(resolve_goto(0, 10, 50), 0);
    }

    #[test]
    fn goto_sets_window_after_boundary() {
        let mut nav = NavigationState::new(2000, 53, 80, "book.txt");
        assert!(nav.goto_line(120));
        assert_eq!(nav.from_line, 106);
        assert_eq!(nav.to_line, 159);
        assert_eq!(nav.current_row, 0);
        assert_eq!(nav.line_number, 107);
        assert!(nav.is_consistent());
    }

    #[test]
    fn goto_past_end_keeps_lines_on_screen() {
        // Boundary equals the document length, so the next line would be empty
        let mut nav = NavigationState::new(106, 53, 80, "book.txt");
        assert!(nav.goto_line(200));
        assert!(nav.from_line < 106);
        assert_eq!(nav.from_line, 53);
    }

    #[test]
    fn goto_in_line_by_line_pins_page_start() {
        let mut nav = NavigationState::new(2000, 53, 80, "book.txt");
        nav.policy = NavigationPolicy::LineByLine;
        assert!(nav.goto_line(120));
        assert_eq!((nav.from_line, nav.to_line, nav.current_row, nav.line_number), (54, 107, 52, 107));
        assert!(nav.is_consistent());
    }

    #[test]
    fn line_by_line_down_then_up_after_goto_restores_window() {
        let mut nav = NavigationState::new(2000, 53, 80, "book.txt");
        nav.policy = NavigationPolicy::LineByLine;
        nav.goto_line(120);
        let before = (nav.from_line, nav.to_line, nav.current_row, nav.line_number);

        assert!(nav.move_down());
        assert!(nav.move_up());
        assert_eq!((nav.from_line, nav.to_line, nav.current_row, nav.line_number), before);
    }

    #[test]
    fn goto_on_empty_document_is_noop() {
        let mut nav = NavigationState::new(0, 10, 80, "book.txt");
        assert!(!nav.goto_line(5));
        assert_eq!(nav.from_line, 0);
    }

    #[test]
    fn sanitize_strips_non_digits() {
        assert_eq!(sanitize_goto_input(" 12a3 "), "123");
        assert_eq!(sanitize_goto_input("line: 42\n"), "42");
        assert_eq!(sanitize_goto_input("abc"), "");
    }

    #[test]
    fn parse_target() {
        assert_eq!(parse_goto_target("120"), Some(120));
        assert_eq!(parse_goto_target(""), None);
        assert_eq!(parse_goto_target("x"), None);
        assert_eq!(parse_goto_target("99999999999999999999999999"), Some(usize::MAX));
    }
}
