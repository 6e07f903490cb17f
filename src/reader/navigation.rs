//! Navigation state for a reading session

use std::path::{Path, PathBuf};

/// Which mode currently owns the screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Reading,
    Help,
    Goto,
    WordBuilding,
    ViewWords,
    References,
    Stats,
}

/// How up/down keys move through the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Highlight walks down the page, then the next full page is shown
    #[default]
    ByPage,
    /// Highlight stays on the bottom row and the window slides one line
    LineByLine,
}

impl NavigationPolicy {
    /// The other policy
    pub fn toggled(self) -> Self {
        match self {
            NavigationPolicy::ByPage => NavigationPolicy::LineByLine,
            NavigationPolicy::LineByLine => NavigationPolicy::ByPage,
        }
    }

    /// Short label for the status bar
    pub fn label(self) -> &'static str {
        match self {
            NavigationPolicy::ByPage => "page",
            NavigationPolicy::LineByLine => "line",
        }
    }
}

/// Viewport bounds, highlighted row and display flags for one document.
///
/// After every completed transition `line_number == from_line + current_row + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    /// First document line index in the window (inclusive)
    pub from_line: usize,
    /// End of the window (exclusive), may run past the document end
    pub to_line: usize,
    /// Highlighted row within the window
    pub current_row: usize,
    /// 1-based absolute line number of the highlighted row
    pub line_number: usize,
    pub viewport_height: usize,
    pub viewport_width: usize,
    /// Active mode
    pub mode: Mode,
    pub policy: NavigationPolicy,
    pub show_status_bar: bool,
    pub show_percentage_points: bool,
    total_lines: usize,
    source: PathBuf,
}

impl NavigationState {
    /// Start a session at the top of the document
    pub fn new(
        total_lines: usize,
        viewport_height: usize,
        viewport_width: usize,
        source: impl Into<PathBuf>,
    ) -> Self {
        let viewport_height = viewport_height.max(1);
        Self {
            from_line: 0,
            to_line: viewport_height,
            current_row: 0,
            line_number: 1,
            viewport_height,
            viewport_width,
            mode: Mode::Reading,
            policy: NavigationPolicy::ByPage,
            show_status_bar: true,
            show_percentage_points: false,
            total_lines,
            source: source.into(),
        }
    }

    /// Number of lines in the document
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// The document this state navigates
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Line number shown to the reader, 0 when the document has no lines
    pub fn current_line(&self) -> usize {
        if self.total_lines == 0 { 0 } else { self.line_number }
    }

    /// Index into the document of the highlighted line, if it exists
    pub fn highlighted_index(&self) -> Option<usize> {
        let index = self.from_line + self.current_row;
        (index < self.total_lines).then_some(index)
    }

    /// Whether the position bookkeeping agrees with the window
    pub fn is_consistent(&self) -> bool {
        self.line_number == self.from_line + self.current_row + 1
            && self.current_row < self.viewport_height
    }

    /// Seed the window from a saved `from_line`.
    ///
    /// The stored window end is not trusted since the terminal may have a
    /// different height than when the progress was saved.
    pub fn restore(&mut self, from_line: usize) {
        if self.total_lines == 0 {
            return;
        }
        let from_line = if from_line >= self.total_lines {
            self.last_page_start()
        } else {
            from_line
        };
        self.set_window(from_line, 0);
        if self.policy == NavigationPolicy::LineByLine {
            self.pin_line(self.line_number);
        }
    }

    /// Adopt a new terminal size, keeping the first visible line
    pub fn resize(&mut self, viewport_height: usize, viewport_width: usize) {
        self.viewport_height = viewport_height.max(1);
        self.viewport_width = viewport_width;
        if self.total_lines == 0 {
            self.set_window(0, 0);
        } else {
            self.restore(self.from_line);
        }
    }

    /// Jump to the first line of the document
    pub fn go_start(&mut self) {
        self.set_window(0, 0);
    }

    /// Jump to the last line of the document
    pub fn go_end(&mut self) {
        if self.total_lines == 0 {
            return;
        }
        match self.policy {
            NavigationPolicy::ByPage => {
                let from_line = self.last_page_start();
                self.set_window(from_line, self.total_lines - 1 - from_line);
            }
            NavigationPolicy::LineByLine => self.pin_line(self.total_lines),
        }
    }

    /// Switch between page-wise and line-wise movement.
    ///
    /// Entering line-by-line pins the highlight to the bottom row and slides
    /// the window so the same line stays highlighted. Near the top of the
    /// document, where there are fewer lines above than rows, the window
    /// stays at the start instead.
    pub fn toggle_policy(&mut self) {
        self.policy = self.policy.toggled();
        if self.policy == NavigationPolicy::LineByLine {
            self.pin_line(self.line_number);
        }
        tracing::debug!(policy = ?self.policy, line = self.line_number, "navigation policy toggled");
    }

    pub fn toggle_status_bar(&mut self) {
        self.show_status_bar = !self.show_status_bar;
    }

    pub fn toggle_percentage_points(&mut self) {
        self.show_percentage_points = !self.show_percentage_points;
    }

    /// Start index of the last page-aligned window that holds a line
    pub(crate) fn last_page_start(&self) -> usize {
        (self.total_lines.saturating_sub(1) / self.viewport_height) * self.viewport_height
    }

    /// Place the window at `from_line` with `current_row` highlighted
    pub(crate) fn set_window(&mut self, from_line: usize, current_row: usize) {
        self.from_line = from_line;
        self.to_line = from_line + self.viewport_height;
        self.current_row = current_row;
        self.line_number = from_line + current_row + 1;
    }

    /// Highlight `line_number` on the bottom row when enough lines precede it
    pub(crate) fn pin_line(&mut self, line_number: usize) {
        let line_number = line_number.max(1);
        if line_number >= self.viewport_height {
            self.set_window(line_number - self.viewport_height, self.viewport_height - 1);
        } else {
            self.set_window(0, line_number - 1);
        }
    }
}
