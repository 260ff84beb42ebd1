//! Command line front end for the capriccio feature parser.
//!
//! The binary reads one feature document, parses it and prints either a
//! short summary or the full document tree as JSON.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
