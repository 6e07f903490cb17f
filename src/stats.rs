//! Reading statistics for the current session

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::reader::{NavigationState, lines_to_next_breakpoint, percent};

/// Tracks how long each percentage point took to reach
#[derive(Debug, Clone)]
pub struct ReadingStats {
    start_line: usize,
    started_at: Instant,
    last_breakpoint_at: Instant,
    current_percentage: u64,
    breakpoints: BTreeMap<u64, Duration>,
}

impl ReadingStats {
    /// Start tracking from the position the session opened at
    pub fn new(line_number: usize, total_lines: usize, now: Instant) -> Self {
        Self {
            start_line: line_number,
            started_at: now,
            last_breakpoint_at: now,
            current_percentage: truncated_percent(line_number, total_lines),
            breakpoints: BTreeMap::new(),
        }
    }

    /// Record the position after a transition.
    ///
    /// Only forward progress past the highest percentage seen so far counts;
    /// going back and re-reading does not reset the clock.
    pub fn observe(&mut self, line_number: usize, total_lines: usize, now: Instant) {
        let reached = truncated_percent(line_number, total_lines);
        if reached > self.current_percentage {
            let elapsed = now.saturating_duration_since(self.last_breakpoint_at);
            self.breakpoints.insert(reached, elapsed);
            self.last_breakpoint_at = now;
            self.current_percentage = reached;
        }
    }

    /// Time taken to reach each percentage point, ascending
    pub fn breakpoints(&self) -> &BTreeMap<u64, Duration> {
        &self.breakpoints
    }

    /// Lines advanced since the session started (never negative)
    pub fn lines_advanced(&self, line_number: usize) -> usize {
        line_number.saturating_sub(self.start_line)
    }

    pub fn session_duration(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Lines of the statistics screen
    pub fn summary(
        &self,
        nav: &NavigationState,
        word_count: usize,
        saved_words: usize,
        now: Instant,
    ) -> Vec<String> {
        let total = nav.total_lines();
        let mut lines = vec![
            format!("Lines in document     {total}"),
            format!("Words in document     {word_count}"),
            format!("Current line          {}", nav.current_line()),
        ];

        match percent(nav.line_number, total) {
            Some(pct) => lines.push(format!("Completed             {pct:.1}%")),
            None => lines.push("Completed             -".to_string()),
        }
        if let Some(k) = lines_to_next_breakpoint(nav.line_number, total) {
            lines.push(format!("Next percentage in    {k} lines"));
        }

        lines.push(format!("Lines this session    {}", self.lines_advanced(nav.line_number)));
        lines.push(format!(
            "Session time          {:.1} min",
            self.session_duration(now).as_secs_f64() / 60.0
        ));
        lines.push(format!("Saved words           {saved_words}"));

        if !self.breakpoints.is_empty() {
            lines.push(String::new());
            for (pct, took) in &self.breakpoints {
                lines.push(format!("{pct}% took you {:.1} minutes", took.as_secs_f64() / 60.0));
            }
        }
        lines
    }
}

fn truncated_percent(line_number: usize, total_lines: usize) -> u64 {
    percent(line_number, total_lines).map(|p| p as u64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_time_per_percentage_point() {
        let start = Instant::now();
        let mut stats = ReadingStats::new(1, 100, start);

        stats.observe(1, 100, start + Duration::from_secs(30));
        assert!(stats.breakpoints().is_empty());

        stats.observe(2, 100, start + Duration::from_secs(60));
        stats.observe(3, 100, start + Duration::from_secs(180));

        let recorded: Vec<_> = stats.breakpoints().iter().map(|(p, d)| (*p, d.as_secs())).collect();
        assert_eq!(recorded, vec![(2, 60), (3, 120)]);
    }

    #[test]
    fn going_back_does_not_record() {
        let start = Instant::now();
        let mut stats = ReadingStats::new(50, 100, start);
        stats.observe(10, 100, start + Duration::from_secs(5));
        stats.observe(50, 100, start + Duration::from_secs(10));
        assert!(stats.breakpoints().is_empty());
    }

    #[test]
    fn lines_advanced_since_start() {
        let stats = ReadingStats::new(40, 100, Instant::now());
        assert_eq!(stats.lines_advanced(55), 15);
        assert_eq!(stats.lines_advanced(10), 0);
    }

    #[test]
    fn empty_document_has_no_percentage() {
        let start = Instant::now();
        let mut stats = ReadingStats::new(1, 0, start);
        stats.observe(1, 0, start);
        let nav = NavigationState::new(0, 10, 80, "empty.txt");
        let summary = stats.summary(&nav, 0, 0, start);
        assert!(summary.iter().any(|l| l.starts_with("Completed") && l.ends_with('-')));
        assert!(summary.contains(&"Current line          0".to_string()));
        assert!(!summary.iter().any(|l| l.starts_with("Next percentage")));
    }

    #[test]
    fn summary_lists_breakpoints() {
        let start = Instant::now();
        let mut stats = ReadingStats::new(1, 100, start);
        stats.observe(2, 100, start + Duration::from_secs(90));

        let mut nav = NavigationState::new(100, 10, 80, "book.txt");
        nav.move_down();
        let summary = stats.summary(&nav, 500, 3, start + Duration::from_secs(90));

        assert!(summary.contains(&"Current line          2".to_string()));
        assert!(summary.contains(&"Saved words           3".to_string()));
        assert!(summary.contains(&"2% took you 1.5 minutes".to_string()));
    }
}
