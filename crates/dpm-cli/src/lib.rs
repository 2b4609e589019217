//! CLI library components for the DICOM Pipeline Monitor.

pub mod cli;
pub mod commands;
pub mod config;
pub mod events;
pub mod logging;
pub mod render;
