//! folio: a single-page portfolio for the terminal.
//!
//! The page scrolls like a web page under a fixed navigation bar whose highlighted link follows
//! the section currently in view.

pub mod app_state;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod page;
pub mod reveal;
pub mod section;
pub mod tracker;
pub mod ui;
pub mod viewport;

pub use error::{Error, Result};
