//! Builder-style helper for constructing **Markdown** text.
//!
//! Every method returns `self`, enabling call-chaining:
//!
//! ```rust
//! use expert_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_section_h1("Experts")
//!     .add_blank_line()
//!     .add_bullet_key_value("IT", "programming questions")
//!     .finalize();
//!
//! assert_eq!(md, "# Experts\n\n- **IT**: programming questions\n");
//! ```
//!
//! No smart formatting: newlines and whitespace are emitted exactly as
//! requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce markdown fragments.
///
/// Owns a `String` buffer that grows with each chained call; writes into a
/// `String` cannot fail, so results of `writeln!` are ignored.
#[derive(Debug, Default, Clone)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a level-1 (`#`) heading.
    pub fn add_section_h1(mut self, line: impl Display) -> Self {
        let _ = writeln!(self.buffer, "# {line}");
        self
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section_h2(mut self, line: impl Display) -> Self {
        let _ = writeln!(self.buffer, "## {line}");
        self
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        let _ = writeln!(self.buffer, "{line}");
        self
    }

    /// Add a bold line (`**text**`) and a trailing newline.
    pub fn add_line_bold(mut self, line: impl Display) -> Self {
        let _ = writeln!(self.buffer, "**{line}**");
        self
    }

    /// `**Key**: Value`
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        let _ = writeln!(self.buffer, "**{key}**: {value}");
        self
    }

    /// `- **Key**: Value`
    pub fn add_bullet_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        let _ = writeln!(self.buffer, "- **{key}**: {value}");
        self
    }

    /// `N. **Key**: Value`, for numbered instructions.
    pub fn add_step(
        mut self,
        number: usize,
        key: impl Display,
        value: impl Display,
    ) -> Self {
        let _ = writeln!(self.buffer, "{number}. **{key}**: {value}");
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Insert a "---" delimiter.
    pub fn add_delimiter(self) -> Self {
        self.add_line("---")
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
