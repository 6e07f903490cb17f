//! Completion percentage arithmetic

/// Percentage of the document covered when `current_line` is the line being read.
///
/// Returns `None` for an empty document, which has no meaningful percentage.
pub fn percent(current_line: usize, total_lines: usize) -> Option<f64> {
    if total_lines == 0 {
        return None;
    }
    Some((current_line as u64 * 100) as f64 / total_lines as f64)
}

/// Number of lines to advance before the truncated percentage increases.
///
/// Searches forward one line at a time since the step between integer
/// percentages is uneven for most document lengths. Returns `None` when the
/// document is empty or the reader is already at (or past) the last line.
pub fn lines_to_next_breakpoint(current_line: usize, total_lines: usize) -> Option<usize> {
    if total_lines == 0 || current_line >= total_lines {
        return None;
    }

    let current = percent(current_line, total_lines)? as u64;
    let mut candidate = current_line;
    loop {
        candidate += 1;
        let next = percent(candidate, total_lines)? as u64;
        if next > current {
            return Some(candidate - current_line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_line_in_document() {
        assert_eq!(percent(30, 150), Some(20.0));
        assert_eq!(percent(1, 3), Some(100.0 / 3.0));
        assert_eq!(percent(1000, 1000), Some(100.0));
    }

    #[test]
    fn percent_of_empty_document_is_none() {
        assert_eq!(percent(1, 0), None);
    }

    #[test]
    fn breakpoint_from_round_percentage() {
        assert_eq!(lines_to_next_breakpoint(100, 1000), Some(10));
    }

    #[test]
    fn breakpoint_from_fractional_percentage() {
        assert_eq!(lines_to_next_breakpoint(22, 1000), Some(8));
    }

    #[test]
    fn breakpoint_in_short_document() {
        // Every line moves the percentage in a document shorter than 100 lines
        assert_eq!(lines_to_next_breakpoint(1, 7), Some(1));
        assert_eq!(lines_to_next_breakpoint(6, 7), Some(1));
    }

    #[test]
    fn breakpoint_is_guarded_at_document_end() {
        assert_eq!(lines_to_next_breakpoint(1000, 1000), None);
        assert_eq!(lines_to_next_breakpoint(5, 0), None);
    }

    #[test]
    fn breakpoint_is_at_least_one_line() {
        for total in [3, 99, 100, 101, 997, 2000] {
            for current in 1..total {
                let k = lines_to_next_breakpoint(current, total).unwrap();
                assert!(k >= 1, "total={total} current={current}");
            }
        }
    }
}
