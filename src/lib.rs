pub mod action;
pub mod config;
pub mod error;
pub mod git;
pub mod tickets;
pub mod ui;

pub use error::{GitTicketsError, Result};
