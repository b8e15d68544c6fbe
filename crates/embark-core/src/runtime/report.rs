//! Progress reporting seam
//!
//! The pipeline talks to the user only through this trait; tests substitute
//! a recording double to assert what was reported.

use colored::Colorize;

/// The print collaborator
pub trait Reporter: Send + Sync {
    /// A step started
    fn begin(&self, message: &str);

    /// A step finished successfully
    fn succeed(&self, message: &str);

    fn info(&self, message: &str);

    fn error(&self, message: &str);
}

/// Writes progress to the terminal
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn begin(&self, message: &str) {
        println!("  {} {}...", "▸".blue(), message);
    }

    fn succeed(&self, message: &str) {
        println!("  {} {}", "✔".green(), message);
    }

    fn info(&self, message: &str) {
        println!("  {}", message.dimmed());
    }

    fn error(&self, message: &str) {
        eprintln!("  {} {}", "✖".red(), message);
    }
}
