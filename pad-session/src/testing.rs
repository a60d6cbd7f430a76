//! Scriptable stub engines for exercising the orchestration layer without any real mathematics.

use pad_engine::{Engine, EngineError, EngineResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// A record of one engine entry point hit.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Simplify { expr: String },
    Calculate { expr: String, keys: String, values: Vec<String> },
    Differentiate { expr: String, target: String },
    Integrate { expr: String, target: String },
    TaylorExpansion { expr: String, target: String, around: String, degree: f64 },
    ErrorAnalysis { expr: String, variables: String },
    TranslateToExport { latex: String },
}

/// An engine that records every call it receives.
///
/// Operation entry points answer with `responses[expr]` when an entry exists for the expression
/// and with `default_latex` otherwise, attaching `steps` and `export` either way; setting `fail`
/// makes every call fail with that message instead.
#[derive(Debug, Default)]
pub(crate) struct StubEngine {
    pub responses: HashMap<String, String>,
    pub default_latex: String,
    pub steps: Vec<String>,
    pub export: Option<String>,
    pub fail: Option<String>,
    pub calls: RefCell<Vec<Call>>,
}

impl StubEngine {
    pub fn returning(latex: impl Into<String>) -> Self {
        Self {
            default_latex: latex.into(),
            ..Self::default()
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn answer(&self, expr: &str) -> Result<EngineResult, EngineError> {
        if let Some(message) = &self.fail {
            return Err(EngineError::new(message.clone()));
        }

        let latex = self.responses
            .get(expr)
            .cloned()
            .unwrap_or_else(|| self.default_latex.clone());
        Ok(EngineResult {
            latex,
            steps: self.steps.clone(),
            export: self.export.clone(),
        })
    }
}

impl Engine for StubEngine {
    fn simplify(
        &self,
        expr: &str,
        _implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError> {
        self.calls.borrow_mut().push(Call::Simplify { expr: expr.to_string() });
        self.answer(expr)
    }

    fn calculate(
        &self,
        expr: &str,
        keys: &str,
        values: &[String],
        _implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError> {
        self.calls.borrow_mut().push(Call::Calculate {
            expr: expr.to_string(),
            keys: keys.to_string(),
            values: values.to_vec(),
        });
        self.answer(expr)
    }

    fn differentiate(
        &self,
        expr: &str,
        target: &str,
        _implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError> {
        self.calls.borrow_mut().push(Call::Differentiate {
            expr: expr.to_string(),
            target: target.to_string(),
        });
        self.answer(expr)
    }

    fn integrate(
        &self,
        expr: &str,
        target: &str,
        _implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError> {
        self.calls.borrow_mut().push(Call::Integrate {
            expr: expr.to_string(),
            target: target.to_string(),
        });
        self.answer(expr)
    }

    fn taylor_expansion(
        &self,
        expr: &str,
        target: &str,
        around: &str,
        degree: f64,
        _implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError> {
        self.calls.borrow_mut().push(Call::TaylorExpansion {
            expr: expr.to_string(),
            target: target.to_string(),
            around: around.to_string(),
            degree,
        });
        self.answer(expr)
    }

    fn error_analysis(
        &self,
        expr: &str,
        variables: &str,
        _implicit_multiplication: bool,
    ) -> Result<EngineResult, EngineError> {
        self.calls.borrow_mut().push(Call::ErrorAnalysis {
            expr: expr.to_string(),
            variables: variables.to_string(),
        });
        self.answer(expr)
    }

    fn translate_to_export(&self, latex: &str) -> Result<String, EngineError> {
        self.calls.borrow_mut().push(Call::TranslateToExport { latex: latex.to_string() });
        if let Some(message) = &self.fail {
            return Err(EngineError::new(message.clone()));
        }
        Ok(format!("exported({})", latex))
    }
}
