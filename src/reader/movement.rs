//! Up/down transitions under both navigation policies
//!
//! Every transition keeps `line_number == from_line + current_row + 1` and
//! refuses to move above the first line or below the last one. In
//! line-by-line mode the highlight sits on the bottom row unless the window
//! is at the document start, which keeps a down step and an up step inverse.

use super::navigation::{NavigationPolicy, NavigationState};

impl NavigationState {
    /// Move the highlight one line down. Returns whether anything changed.
    pub fn move_down(&mut self) -> bool {
        if self.line_number >= self.total_lines() {
            return false;
        }
        match self.policy {
            NavigationPolicy::ByPage => self.page_step_down(),
            NavigationPolicy::LineByLine => self.line_step_down(),
        }
        self.line_number += 1;
        debug_assert!(self.is_consistent());
        true
    }

    /// Move the highlight one line up. Returns whether anything changed.
    pub fn move_up(&mut self) -> bool {
        if self.line_number <= 1 {
            return false;
        }
        let moved = match self.policy {
            NavigationPolicy::ByPage => self.page_step_up(),
            NavigationPolicy::LineByLine => self.line_step_up(),
        };
        if moved {
            self.line_number -= 1;
        }
        debug_assert!(self.is_consistent());
        moved
    }

    fn page_step_down(&mut self) {
        if self.current_row + 1 >= self.viewport_height {
            self.current_row = 0;
            self.from_line += self.viewport_height;
            self.to_line = self.from_line + self.viewport_height;
        } else {
            self.current_row += 1;
        }
    }

    fn page_step_up(&mut self) -> bool {
        if self.current_row > 0 {
            self.current_row -= 1;
            return true;
        }
        if self.from_line == 0 {
            return false;
        }
        // A window left unaligned by goto falls back onto the document start
        let previous = self.from_line.saturating_sub(self.viewport_height);
        self.current_row = self.from_line - 1 - previous;
        self.from_line = previous;
        self.to_line = previous + self.viewport_height;
        true
    }

    fn line_step_down(&mut self) {
        if self.current_row + 1 < self.viewport_height {
            self.current_row += 1;
        } else {
            self.from_line += 1;
            self.to_line += 1;
        }
    }

    fn line_step_up(&mut self) -> bool {
        if self.from_line > 0 {
            self.from_line -= 1;
            self.to_line -= 1;
            true
        } else if self.current_row > 0 {
            self.current_row -= 1;
            true
        } else {
            false
        }
    }
}
