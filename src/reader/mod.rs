//! Pagination and navigation core
//!
//! Maps a flat sequence of lines onto a fixed-height viewport and keeps the
//! reading position consistent under page-wise and line-wise movement.

pub mod goto;
pub mod movement;
pub mod navigation;
pub mod percentage;

pub use goto::{parse_goto_target, resolve_goto, sanitize_goto_input};
pub use navigation::{Mode, NavigationPolicy, NavigationState};
pub use percentage::{lines_to_next_breakpoint, percent};
