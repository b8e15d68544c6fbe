//! User configuration: resolved options, presets, and interactive answers
//!
//! This module provides:
//! - The `Options` record every install run is driven by
//! - Directory-layout variants and their derived project paths
//! - Resolution from a named preset or an interactive answer source

pub mod options;
pub mod resolver;

pub use options::{Layout, Options};
pub use resolver::{
    resolve, AnswerSource, ConfigError, Question, Selection, PRESET_NAMES, QUESTIONS,
};
