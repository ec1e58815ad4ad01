#![doc = include_str!("../README.md")]

//! A minimal interactive command menu.
//!
//! This crate lets a program register named actions and prompt the user on
//! standard input until one of them is picked.

pub mod action;
pub mod error;
pub mod menu;
pub mod reader;
pub mod writer;

pub use action::{Action, Callback};
pub use error::{MenuError, Result};
pub use menu::{Menu, MenuConfig};
pub use reader::{LineReader, ReadEvent};
pub use writer::MenuWriter;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::error::MenuError;
    pub use crate::menu::{Menu, MenuConfig};
}
