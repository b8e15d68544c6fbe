//! The installation orchestration pipeline
//!
//! This module provides:
//! - Durable filesystem operations (recursive copy, append, tolerant remove)
//! - The ordered, fail-fast install pipeline and its step/error types

pub mod fsops;
pub mod pipeline;

pub use fsops::FsError;
pub use pipeline::{
    InstallError, InstallPipeline, InstallRequest, InstallSummary, Step, StepError,
};
