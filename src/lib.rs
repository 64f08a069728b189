//! newsify library crate.
//!
//! Turns a picked or captured photo into a generated news article: the
//! session tracks the acquired image and style, normalizes the image for
//! upload, submits it to the newsify service and yields the result page
//! location.

pub mod api;
pub mod camera;
pub mod cli;
pub mod config;
pub mod image;
pub mod navigation;
pub mod presentation;
pub mod session;
pub mod style;
