//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over the current
//! [`playback::Frame`](crate::playback::Frame) plus whatever scroll state the
//! app keeps for it.
//!
//! # Pane Modules
//!
//! - [`bars`]: bar chart of the array being sorted
//! - [`structure`]: shape-aware drawing of a data structure snapshot
//! - [`info`]: description, complexity table and running statistics
//! - [`narration`]: captions of every frame up to the cursor
//! - [`status`]: status bar with keybindings, playback state and value prompt
//! - `utils`: highlight colors and borders shared by the panes above

mod utils;

pub mod bars;
pub mod info;
pub mod narration;
pub mod status;
pub mod structure;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use info::{render_info_pane, InfoRenderData, Selection};
pub use narration::render_narration_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use structure::render_structure_pane;
