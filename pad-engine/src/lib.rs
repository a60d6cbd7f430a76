//! The boundary between the session orchestration layer and the external symbolic computation
//! engine.
//!
//! The engine is an opaque collaborator: it owns parsing, simplification, calculus, series
//! expansion, error propagation, and translation of results to a numeric-code export form. This
//! crate only describes the shape of that boundary: the [`Engine`] trait with one entry point
//! per operation, the [`EngineResult`] it produces, and the [`EngineError`] it fails with. The
//! orchestration layer never inspects an expression beyond assembling these calls.
//!
//! Engine calls are synchronous and, from the caller's point of view, side-effect free. A failed
//! call is opaque; only a display-ready message is available.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The reserved separator placed between entries when a list of expressions is joined into one
/// engine-facing string.
///
/// This is the literal four-character sequence `\n\n` (two escaped line breaks), exactly as it
/// crosses the engine boundary. The LaTeX of a single expression can never contain two adjacent
/// escaped line breaks, so the separator is unambiguous.
pub const ENTRY_DELIMITER: &str = "\\n\\n";

/// An opaque failure reported by the engine, such as malformed LaTeX or an operation that is
/// undefined on the given expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    message: String,
}

impl EngineError {
    /// Creates a new error with the given display-ready message.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// The display-ready message describing this failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EngineError {}

/// The structured result of a successful engine call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineResult {
    /// The LaTeX form of the result, suitable for a display-only field.
    pub latex: String,

    /// The intermediate derivation steps, in the order the engine took them. May be empty.
    pub steps: Vec<String>,

    /// The numeric-code export form of the result.
    ///
    /// Older engine builds return a bare LaTeX string with no inline export form; in that case
    /// this is [`None`] and the export form is derived with [`Engine::translate_to_export`].
    pub export: Option<String>,
}

impl EngineResult {
    /// Wraps a bare LaTeX string, the degenerate result shape of older engine builds: no steps,
    /// no inline export form.
    pub fn from_latex(latex: impl Into<String>) -> Self {
        Self {
            latex: latex.into(),
            steps: Vec::new(),
            export: None,
        }
    }
}

/// The engine's entry points, one per operation the front end offers.
///
/// Every entry point takes the primary expression in LaTeX and the implicit-multiplication flag
/// (whether consecutive letters multiply single-letter variables); the remaining parameters are
/// the operation's auxiliary inputs, already validated and joined by the caller.
pub trait Engine {
    /// Simplifies the given expression.
    fn simplify(&self, expr: &str, implicit_multiplication: bool)
        -> Result<EngineResult, EngineError>;

    /// Numerically evaluates the given expression.
    ///
    /// `keys` is a list of variable names joined with [`ENTRY_DELIMITER`]; `values` holds one
    /// evaluated value per key, in the same order. Both may be empty, in which case the engine
    /// evaluates using only its built-in constants.
    fn calculate(
        &self,
        expr: &str,
        keys: &str,
        values: &[String],
        implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError>;

    /// Differentiates the given expression to the target variable.
    fn differentiate(
        &self,
        expr: &str,
        target: &str,
        implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError>;

    /// Integrates the given expression to the target variable.
    fn integrate(
        &self,
        expr: &str,
        target: &str,
        implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError>;

    /// Computes the Taylor expansion of the given expression in the target variable, around the
    /// given point, up to the given degree.
    ///
    /// The degree is whatever number the degree field held; the engine owns numeric validation
    /// beyond "is this blank", so a non-numeric field arrives here as NaN.
    fn taylor_expansion(
        &self,
        expr: &str,
        target: &str,
        around: &str,
        degree: f64,
        implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError>;

    /// Propagates the errors of the given variables through the expression.
    ///
    /// `variables` is a list of variable names joined with [`ENTRY_DELIMITER`].
    fn error_analysis(
        &self,
        expr: &str,
        variables: &str,
        implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError>;

    /// Translates a result's LaTeX into its numeric-code export form.
    ///
    /// Only used when an [`EngineResult`] carries no inline export form.
    fn translate_to_export(&self, latex: &str) -> Result<String, EngineError>;
}
