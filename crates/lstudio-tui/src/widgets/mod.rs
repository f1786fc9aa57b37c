//! Widget components for the TUI

mod header;
mod live_page;
mod section_editor;
mod section_list;
mod section_view;
mod status_bar;

pub use header::MainHeader;
pub use live_page::LivePage;
pub use section_editor::EditorView;
pub use section_list::SectionList;
pub use section_view::{live_lines, unknown_lines, SectionView};
pub use status_bar::StatusBar;
