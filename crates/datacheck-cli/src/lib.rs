//! Library components of the dataset validator binaries.

pub mod args;
pub mod chooser;
pub mod group_count;
pub mod logging;
pub mod pipeline;
pub mod settings;
