//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, either inline in the result field or as a full report on the primary input.

use ariadne::{Color, Report};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while processing an operation.
pub trait ErrorKind: Debug + Send {
    /// Returns a reference to this error kind as a [`std::any::Any`] trait object, enabling
    /// downcasting to the concrete kind.
    fn as_any(&self) -> &dyn std::any::Any;

    /// The short, display-ready description of this error.
    ///
    /// This is the text that front ends place inside the inline marker that replaces the result
    /// display when processing fails.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with the region of the primary input it originated from.
///
/// Unlike errors produced by a parser, orchestration errors rarely point at anything narrower
/// than the whole primary expression, so a single span is carried rather than a list.
#[derive(Debug)]
pub struct Error {
    /// The region of the primary input that this error originated from.
    pub span: Range<usize>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given span and kind.
    pub fn new(span: Range<usize>, kind: impl ErrorKind + 'static) -> Self {
        Self { span, kind: Box::new(kind) }
    }

    /// The short, display-ready description of this error.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, self.span.clone())
    }
}
