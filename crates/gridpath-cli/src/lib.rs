//! gridpath CLI library.
//!
//! Input resolution, logging setup, terminal styling, output rendering and
//! failure classification for the `gridpath` binary.

pub mod failure;
pub mod input;
pub mod logging;
pub mod output;
pub mod terminal;
