//! The error kinds produced while binding, assembling and processing operation requests.
//!
//! Every kind implements [`pad_error::ErrorKind`]: its [`message`](pad_error::ErrorKind::message)
//! is the text shown inline in the result field, and its report points at the input that caused
//! the failure for front ends that can render one.

use ariadne::{Fmt, Label, Report, ReportKind};
use pad_engine::EngineError;
use pad_error::{ErrorKind, EXPR};
use std::ops::Range;
use crate::request::OperationKind;

/// A required target variable field was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingTarget {
    /// The operation that needed the target.
    pub kind: OperationKind,
}

impl MissingTarget {
    /// The wording of the operation inside the error message.
    fn verb(&self) -> &'static str {
        match self.kind {
            OperationKind::TaylorExpansion => "taylor expand",
            kind => kind.name(),
        }
    }
}

impl ErrorKind for MissingTarget {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn message(&self) -> String {
        format!("cannot {} to empty string", self.verb())
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.message())
            .with_label(
                Label::new((src_id, span))
                    .with_color(EXPR)
                    .with_message(format!("cannot {} this expression yet", self.verb())),
            )
            .with_help(format!(
                "type the variable to {} to in its options panel",
                self.verb().fg(EXPR),
            ))
            .finish()
    }
}

/// Error analysis was requested with no variables named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingVariables;

impl ErrorKind for MissingVariables {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn message(&self) -> String {
        String::from("cannot do error analysis without specifying variables")
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.message())
            .with_label(
                Label::new((src_id, span))
                    .with_color(EXPR)
                    .with_message("the errors of this expression cannot be propagated yet"),
            )
            .with_help(format!(
                "name at least one {} in the error-analysis panel",
                "variable".fg(EXPR),
            ))
            .finish()
    }
}

/// A selector value does not name any operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation {
    /// The value the selector reported.
    pub name: String,

    /// A list of similarly named operations, if any.
    pub suggestions: Vec<String>,
}

impl ErrorKind for UnknownOperation {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn message(&self) -> String {
        format!("`{}` is not an operation", self.name)
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.message())
            .with_label(
                Label::new((src_id, span))
                    .with_color(EXPR)
                    .with_message("this selector value"),
            )
            .with_help(if self.suggestions.is_empty() {
                format!(
                    "the available operations are: {}",
                    OperationKind::ALL
                        .iter()
                        .map(|kind| format!("`{}`", kind.name().fg(EXPR)))
                        .collect::<Vec<_>>()
                        .join(", "),
                )
            } else if self.suggestions.len() == 1 {
                format!("did you mean the `{}` operation?", (&*self.suggestions[0]).fg(EXPR))
            } else {
                format!(
                    "did you mean one of these operations? {}",
                    self.suggestions
                        .iter()
                        .map(|s| format!("`{}`", s.fg(EXPR)))
                        .collect::<Vec<_>>()
                        .join(", "),
                )
            })
            .finish()
    }
}

/// The engine rejected a request: malformed LaTeX, or an operation that is undefined on the
/// given expression. Opaque beyond its display-ready message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineFailure {
    /// The message the engine reported.
    pub message: String,
}

impl From<EngineError> for EngineFailure {
    fn from(err: EngineError) -> Self {
        Self { message: err.message().to_string() }
    }
}

impl ErrorKind for EngineFailure {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.message())
            .with_label(
                Label::new((src_id, span))
                    .with_color(EXPR)
                    .with_message("the engine rejected this expression"),
            )
            .with_help("check the LaTeX of the expression and of the filled-in option fields")
            .finish()
    }
}
