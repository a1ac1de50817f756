//! tij-empty - placeholders for empty terminal lists
//!
//! Shows a centred image, title, detail text and button over a list or
//! grid whenever it holds no items.
//!
//! This library provides:
//! - [`empty_data_set`]: The placeholder controller and its content source
//! - [`container`]: Tables, grids and item counting
//! - [`ui`]: The placeholder view and its components
//! - [`model`]: Placeholder states and text images
//! - [`config`]: Layout and style defaults
//! - [`app`]: The demo application
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File logging setup

pub mod app;
pub mod config;
pub mod container;
pub mod empty_data_set;
pub mod keys;
pub mod logging;
pub mod model;
pub mod ui;
