//! javelin_printer: The output side of translation.
//!
//! `TargetWriter` appends translated text to a caller-supplied sink while
//! tracking whether the output sits at the start of a line, so that extra
//! indentation for synthesized blocks can be inserted in front of every
//! non-empty line. Output can be redirected into in-memory buffers (see
//! [`redirect`]) and replayed later.

pub mod redirect;

pub use redirect::{Captured, Redirect, RedirectGuard};

use javelin_core::chars::{CARRIAGE_RETURN, LINE_FEED};
use std::fmt;

/// Options for the writer.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Line terminator used by `writeln`.
    pub new_line: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            new_line: "\n".to_string(),
        }
    }
}

/// One level of the output stack.
#[derive(Debug)]
struct Frame {
    text: String,
    at_line_start: bool,
}

/// Writes translated text to a sink, with a stack of redirect buffers.
pub struct TargetWriter<'w> {
    sink: &'w mut dyn fmt::Write,
    sink_at_line_start: bool,
    buffers: Vec<Frame>,
    additional_indentation: usize,
    options: WriterOptions,
}

impl<'w> TargetWriter<'w> {
    pub fn new(sink: &'w mut dyn fmt::Write) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    pub fn with_options(sink: &'w mut dyn fmt::Write, options: WriterOptions) -> Self {
        Self {
            sink,
            sink_at_line_start: true,
            buffers: Vec::new(),
            additional_indentation: 0,
            options,
        }
    }

    // ========================================================================
    // Writing
    // ========================================================================

    /// Append `text`, indenting every line that receives content.
    pub fn write(&mut self, text: &str) -> fmt::Result {
        let mut rest = text;
        while !rest.is_empty() {
            let line_end = rest
                .find([LINE_FEED, CARRIAGE_RETURN])
                .unwrap_or(rest.len());
            let (segment, tail) = rest.split_at(line_end);
            if !segment.is_empty() {
                if self.at_line_start() && self.additional_indentation > 0 {
                    let indent = " ".repeat(self.additional_indentation);
                    self.emit(&indent)?;
                }
                self.emit(segment)?;
                self.set_at_line_start(false);
            }
            if tail.is_empty() {
                break;
            }
            let break_len = if tail.starts_with("\r\n") { 2 } else { 1 };
            self.emit(&tail[..break_len])?;
            self.set_at_line_start(true);
            rest = &tail[break_len..];
        }
        Ok(())
    }

    /// Append `text` followed by a line break.
    pub fn writeln(&mut self, text: &str) -> fmt::Result {
        self.write(text)?;
        let new_line = self.options.new_line.clone();
        self.emit(&new_line)?;
        self.set_at_line_start(true);
        Ok(())
    }

    /// Terminate the current line unless output already sits at a line start.
    pub fn ensure_line_start(&mut self) -> fmt::Result {
        if self.at_line_start() {
            Ok(())
        } else {
            self.writeln("")
        }
    }

    /// Append text exactly as given. Used to replay captured output, which
    /// was indented when it was first written.
    pub fn write_raw(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }
        self.emit(text)?;
        let ends_line = text.ends_with([LINE_FEED, CARRIAGE_RETURN]);
        self.set_at_line_start(ends_line);
        Ok(())
    }

    fn emit(&mut self, text: &str) -> fmt::Result {
        match self.buffers.last_mut() {
            Some(frame) => {
                frame.text.push_str(text);
                Ok(())
            }
            None => self.sink.write_str(text),
        }
    }

    // ========================================================================
    // Line & indentation state
    // ========================================================================

    /// Whether the current target is at the start of a line.
    pub fn at_line_start(&self) -> bool {
        match self.buffers.last() {
            Some(frame) => frame.at_line_start,
            None => self.sink_at_line_start,
        }
    }

    fn set_at_line_start(&mut self, value: bool) {
        match self.buffers.last_mut() {
            Some(frame) => frame.at_line_start = value,
            None => self.sink_at_line_start = value,
        }
    }

    pub fn additional_indentation(&self) -> usize {
        self.additional_indentation
    }

    /// Add `amount` columns of indentation; returns the previous value.
    pub fn increment_additional_indentation(&mut self, amount: usize) -> usize {
        let previous = self.additional_indentation;
        self.additional_indentation += amount;
        previous
    }

    pub fn set_additional_indentation(&mut self, value: usize) {
        self.additional_indentation = value;
    }

    /// Number of active redirect buffers.
    pub fn redirect_depth(&self) -> usize {
        self.buffers.len()
    }
}

impl Redirect for TargetWriter<'_> {
    fn push_redirect(&mut self) {
        let at_line_start = self.at_line_start();
        self.buffers.push(Frame {
            text: String::new(),
            at_line_start,
        });
    }

    fn pop_redirect(&mut self) -> String {
        self.buffers.pop().map(|frame| frame.text).unwrap_or_default()
    }

    fn write_captured(&mut self, text: &str) -> fmt::Result {
        self.write_raw(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut TargetWriter<'_>) -> fmt::Result) -> String {
        let mut out = String::new();
        {
            let mut writer = TargetWriter::new(&mut out);
            f(&mut writer).unwrap();
        }
        out
    }

    #[test]
    fn test_write_passes_text_through() {
        assert_eq!(written(|w| w.write("a = b;\n")), "a = b;\n");
    }

    #[test]
    fn test_indentation_applies_to_non_empty_lines() {
        let out = written(|w| {
            w.increment_additional_indentation(4);
            w.write("class A {\n\n  int x;\n}")
        });
        assert_eq!(out, "    class A {\n\n      int x;\n    }");
    }

    #[test]
    fn test_indentation_only_at_line_start() {
        let out = written(|w| {
            w.write("a")?;
            w.increment_additional_indentation(2);
            w.write("b\nc")
        });
        assert_eq!(out, "ab\n  c");
    }

    #[test]
    fn test_increment_returns_previous() {
        let mut out = String::new();
        let mut writer = TargetWriter::new(&mut out);
        assert_eq!(writer.increment_additional_indentation(4), 0);
        assert_eq!(writer.increment_additional_indentation(4), 4);
        writer.set_additional_indentation(0);
        assert_eq!(writer.additional_indentation(), 0);
    }

    #[test]
    fn test_writeln_and_ensure_line_start() {
        let out = written(|w| {
            w.writeln("namespace a {")?;
            w.ensure_line_start()?;
            w.write("x")?;
            w.ensure_line_start()?;
            w.writeln("}")
        });
        assert_eq!(out, "namespace a {\nx\n}\n");
    }

    #[test]
    fn test_crlf_counts_as_one_break() {
        let out = written(|w| {
            w.increment_additional_indentation(1);
            w.write("a\r\nb")
        });
        assert_eq!(out, " a\r\n b");
    }

    #[test]
    fn test_custom_new_line() {
        let mut out = String::new();
        {
            let options = WriterOptions {
                new_line: "\r\n".to_string(),
            };
            let mut writer = TargetWriter::with_options(&mut out, options);
            writer.writeln("x").unwrap();
        }
        assert_eq!(out, "x\r\n");
    }

    #[test]
    fn test_write_raw_skips_indentation() {
        let out = written(|w| {
            w.increment_additional_indentation(4);
            w.write_raw("a\n")?;
            w.write("b")
        });
        assert_eq!(out, "a\n    b");
    }
}
