//! Terminal output components.
//!
//! This module provides:
//! - [`Theme`] for styled output and NO_COLOR handling
//! - [`StatusKind`] as the canonical status icon vocabulary
//! - [`Console`] as the output writer the commands print through
//!
//! All reporting goes to standard output as human-readable status lines;
//! there is no structured output format.

pub mod icons;
pub mod theme;

pub use icons::StatusKind;
pub use theme::{should_use_colors, Theme};

/// Output writer used by all commands.
///
/// `quiet` suppresses headers and informational lines but never status
/// results, warnings, or errors.
#[derive(Debug, Clone)]
pub struct Console {
    theme: Theme,
    quiet: bool,
}

impl Console {
    /// Create a console with the given theme.
    pub fn new(theme: Theme, quiet: bool) -> Self {
        Self { theme, quiet }
    }

    /// Access the theme for custom formatting.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether informational output is suppressed.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Print a plain informational line.
    pub fn message(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }

    /// Print a header banner.
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("{}", self.theme.format_header(title));
        }
    }

    /// Print a key-value info line.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("{}", self.theme.format_kv(key, value));
        }
    }

    /// Print a success line.
    pub fn success(&self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    /// Print a warning line.
    pub fn warning(&self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    /// Print an error line.
    ///
    /// Diagnostics go to stdout like everything else; the exit code is the
    /// machine-readable channel.
    pub fn error(&self, msg: &str) {
        println!("{}", self.theme.format_error(msg));
    }

    /// Print a status line for the given kind.
    pub fn status(&self, kind: StatusKind, msg: &str) {
        match kind {
            StatusKind::Info | StatusKind::Skipped => {
                if !self.quiet {
                    println!("{}", kind.format(&self.theme, msg));
                }
            }
            _ => println!("{}", kind.format(&self.theme, msg)),
        }
    }
}
