//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, autoplay and the value prompt
//! - **[`panes`]** — stateless render functions for each visible pane (bars, structure,
//!   info, narration, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from validated
//! [`Settings`] and call [`App::run`] to start the event loop.
//!
//! [`Settings`]: crate::config::Settings
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
