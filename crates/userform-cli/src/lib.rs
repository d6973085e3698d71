//! # userform-cli
//!
//! Command-line driver for the userform contact form:
//! - interactive or scripted form sessions (`run`)
//! - one-shot record validation (`validate`)
//! - country table listing (`countries`)
//! - configuration helpers (`config path|get|init`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod driver;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
