//! Scoped output redirection.
//!
//! A [`RedirectGuard`] installs a fresh buffer as the current output target
//! and removes it again when it goes out of scope, on success and on early
//! return alike. The buffered text only survives through
//! [`RedirectGuard::finish`], which hands back a [`Captured`] value that the
//! caller must either flush or discard.

use std::fmt;
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// Something whose output can be temporarily captured.
pub trait Redirect {
    /// Make a new empty buffer the current output target.
    fn push_redirect(&mut self);

    /// Remove the current buffer and return its text.
    fn pop_redirect(&mut self) -> String;

    /// Append previously captured text to the current target verbatim.
    fn write_captured(&mut self, text: &str) -> fmt::Result;
}

/// Holds a redirect open for as long as it lives.
pub struct RedirectGuard<'a, T: Redirect + ?Sized> {
    target: &'a mut T,
    open: bool,
}

impl<'a, T: Redirect + ?Sized> RedirectGuard<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        target.push_redirect();
        Self { target, open: true }
    }

    /// Close the redirect and keep what was written into it.
    pub fn finish(mut self) -> Captured {
        self.open = false;
        Captured {
            text: self.target.pop_redirect(),
        }
    }
}

impl<T: Redirect + ?Sized> Deref for RedirectGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T: Redirect + ?Sized> DerefMut for RedirectGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.target
    }
}

impl<T: Redirect + ?Sized> Drop for RedirectGuard<'_, T> {
    fn drop(&mut self) {
        if self.open {
            let abandoned = self.target.pop_redirect();
            trace!(len = abandoned.len(), "redirect closed without finishing");
        }
    }
}

/// Output captured by a finished redirect.
#[must_use = "captured output must be flushed or explicitly discarded"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    text: String,
}

impl Captured {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replay the captured text into `target`'s current output.
    pub fn flush<T: Redirect + ?Sized>(self, target: &mut T) -> fmt::Result {
        target.write_captured(&self.text)
    }

    pub fn discard(self) {
        trace!(len = self.text.len(), "discarding captured output");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TargetWriter;

    #[test]
    fn test_finish_then_flush() {
        let mut out = String::new();
        {
            let mut writer = TargetWriter::new(&mut out);
            writer.write("head ").unwrap();
            let mut guard = RedirectGuard::new(&mut writer);
            guard.write("body").unwrap();
            let captured = guard.finish();
            assert_eq!(captured.text(), "body");
            writer.write("| ").unwrap();
            captured.flush(&mut writer).unwrap();
        }
        assert_eq!(out, "head | body");
    }

    #[test]
    fn test_drop_restores_previous_target() {
        let mut out = String::new();
        {
            let mut writer = TargetWriter::new(&mut out);
            let result: fmt::Result = (|| {
                let mut guard = RedirectGuard::new(&mut writer);
                guard.write("lost")?;
                Err(fmt::Error)
            })();
            assert!(result.is_err());
            assert_eq!(writer.redirect_depth(), 0);
            writer.write("kept").unwrap();
        }
        assert_eq!(out, "kept");
    }

    #[test]
    fn test_nested_redirects() {
        let mut out = String::new();
        {
            let mut writer = TargetWriter::new(&mut out);
            let mut outer = RedirectGuard::new(&mut writer);
            outer.write("a").unwrap();
            let inner_text = {
                let mut inner = RedirectGuard::new(&mut *outer);
                inner.write("b").unwrap();
                inner.finish()
            };
            assert_eq!(outer.redirect_depth(), 1);
            outer.write("c").unwrap();
            let outer_text = outer.finish();
            assert_eq!(outer_text.text(), "ac");
            inner_text.flush(&mut writer).unwrap();
            outer_text.discard();
        }
        assert_eq!(out, "b");
    }

    #[test]
    fn test_buffer_inherits_line_state() {
        let mut out = String::new();
        {
            let mut writer = TargetWriter::new(&mut out);
            writer.increment_additional_indentation(2);
            writer.write("x").unwrap();
            let mut guard = RedirectGuard::new(&mut writer);
            guard.write("y\nz").unwrap();
            guard.finish().flush(&mut writer).unwrap();
        }
        assert_eq!(out, "  xy\n  z");
    }
}
