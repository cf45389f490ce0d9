pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod resolver;
pub mod tag_source;
pub mod ui;

pub use error::{ReleaseError, Result};
