//! Output formatting for CLI commands

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints structured data as JSON (one line in JSON mode, pretty in text mode)
    pub fn data<T: Serialize>(&self, data: &T) {
        let rendered = match self.format {
            OutputFormat::Text => serde_json::to_string_pretty(data),
            OutputFormat::Json => serde_json::to_string(data),
        };
        if let Ok(json) = rendered {
            println!("{}", json);
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
