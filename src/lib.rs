//! # Introduction
//!
//! sortty animates sorting algorithms and data-structure operations in the
//! terminal. Every algorithm and operation is turned into a sequence of
//! discrete steps; each step carries a full snapshot of the collection, the
//! positions it touched, and an explanation. The steps are then navigated
//! forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Algorithm::run / Container::perform → steps → Session (frames) → TUI / JSON
//! ```
//!
//! 1. [`step`] — the step records shared by both engines.
//! 2. [`sorting`] — bubble, insertion, selection, quick and merge sort as lazy
//!    state machines; nothing runs until a step is pulled.
//! 3. [`structures`] — linked list, stack, queue, binary tree, array and
//!    binary heap, each narrating its own operations.
//! 4. [`registry`] — name lookup and description metadata for menus.
//! 5. [`playback`] — frame history with a memory limit, so a run can be
//!    stepped backward after it has been played.
//! 6. [`config`], [`dump`], [`ui`] — command line, JSON lines output and the
//!    ratatui front-end; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortty::sorting::Algorithm;
//!
//! let mut run = Algorithm::Quick.run(&[3, 1, 2]);
//! let first = run.next().unwrap();
//! assert_eq!(first.array, vec![3, 1, 2]);
//! run.by_ref().for_each(drop);
//! assert_eq!(run.array(), &[1, 2, 3]);
//! ```

pub mod config;
pub mod dump;
pub mod error;
pub mod playback;
pub mod registry;
pub mod sorting;
pub mod step;
pub mod structures;
pub mod ui;

pub use error::{Result, SorttyError};
