//! Request-level API
//!
//! [`ReciteProcessor`] ties the pipeline together: one text block in, tokens,
//! paragraphs and statistics out.

mod config;
mod input;
mod output;
mod processor;

pub use config::{defaults, Config, ConfigBuilder};
pub use input::Input;
pub use output::{Output, ProcessingStats};
pub use processor::ReciteProcessor;
