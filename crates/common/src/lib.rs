//! Shared helpers for the page-links workspace.

pub mod utils;
