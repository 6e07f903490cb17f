//! Paged browsing over the saved word list

/// Selection over logical pages of `page_size` entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsPager {
    entries: Vec<String>,
    page_size: usize,
    page: usize,
    selected: usize,
}

impl WordsPager {
    pub fn new(entries: Vec<String>, page_size: usize) -> Self {
        Self { entries, page_size: page_size.max(1), page: 0, selected: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pages, at least one even when empty
    pub fn page_count(&self) -> usize {
        self.entries.len().div_ceil(self.page_size).max(1)
    }

    /// Zero-based index of the visible page
    pub fn page(&self) -> usize {
        self.page
    }

    /// Selected row within the visible page
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Entries on the visible page
    pub fn current_page(&self) -> &[String] {
        let start = (self.page * self.page_size).min(self.entries.len());
        let end = (start + self.page_size).min(self.entries.len());
        &self.entries[start..end]
    }

    /// The entry under the selection
    pub fn selected_entry(&self) -> Option<&str> {
        self.current_page().get(self.selected).map(String::as_str)
    }

    /// Select the next entry, continuing onto the next page
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.current_page().len() {
            self.selected += 1;
        } else if self.page + 1 < self.page_count() {
            self.page += 1;
            self.selected = 0;
        }
    }

    /// Select the previous entry, continuing onto the previous page
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else if self.page > 0 {
            self.page -= 1;
            self.selected = self.current_page().len().saturating_sub(1);
        }
    }

    /// Take the selected entry out of the list, keeping the selection on a
    /// valid entry of the same or an earlier page
    pub fn remove_selected(&mut self) -> Option<String> {
        let index = self.page * self.page_size + self.selected;
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);

        if self.page >= self.page_count() {
            self.page = self.page_count() - 1;
            self.selected = self.current_page().len().saturating_sub(1);
        } else if self.selected >= self.current_page().len() {
            self.selected = self.current_page().len().saturating_sub(1);
        }
        Some(removed)
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            self.selected = 0;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.selected = 0;
        }
    }
}
