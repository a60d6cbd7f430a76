//! Session orchestration for an interactive LaTeX math front end.
//!
//! A user types a mathematical expression, chooses an operation (simplify, calculate,
//! differentiate, integrate, Taylor-expand, propagate errors), and sees a rendered result plus,
//! optionally, the intermediate derivation steps and a numeric-code export form. All actual
//! mathematics is delegated to an external symbolic engine behind the [`pad_engine::Engine`]
//! trait; this crate owns everything around that call:
//!
//! - the [`registry`] of expression-input slots the user fills in,
//! - the [`request`] assembler that validates auxiliary inputs and builds an engine call,
//! - the [`fmt`] transforms applied to a numeric result for display,
//! - the [`display`] surface rebuilt after every processing cycle,
//! - the [`panels`] visibility state machine driven by the operation selector,
//! - and the [`session::Session`] that ties them together behind a single change-dispatch
//!   entry point.
//!
//! # Processing model
//!
//! Everything is single-threaded and event-triggered: each subscribed change runs the full
//! pipeline (assemble, invoke, post-process, render) synchronously to completion before the next
//! change is processed. Display state is unconditionally cleared at the start of every cycle, so
//! a stale result can never outlive the edit that invalidated it.
//!
//! ```
//! use pad_engine::{Engine, EngineError, EngineResult};
//! use pad_session::{Change, Session};
//! # struct Echo;
//! # impl Engine for Echo {
//! #     fn simplify(&self, expr: &str, _: bool) -> Result<EngineResult, EngineError> {
//! #         Ok(EngineResult::from_latex(expr))
//! #     }
//! #     fn calculate(&self, expr: &str, _: &str, _: &[String], _: bool) -> Result<EngineResult, EngineError> {
//! #         Ok(EngineResult::from_latex(expr))
//! #     }
//! #     fn differentiate(&self, expr: &str, _: &str, _: bool) -> Result<EngineResult, EngineError> {
//! #         Ok(EngineResult::from_latex(expr))
//! #     }
//! #     fn integrate(&self, expr: &str, _: &str, _: bool) -> Result<EngineResult, EngineError> {
//! #         Ok(EngineResult::from_latex(expr))
//! #     }
//! #     fn taylor_expansion(&self, expr: &str, _: &str, _: &str, _: f64, _: bool) -> Result<EngineResult, EngineError> {
//! #         Ok(EngineResult::from_latex(expr))
//! #     }
//! #     fn error_analysis(&self, expr: &str, _: &str, _: bool) -> Result<EngineResult, EngineError> {
//! #         Ok(EngineResult::from_latex(expr))
//! #     }
//! #     fn translate_to_export(&self, latex: &str) -> Result<String, EngineError> {
//! #         Ok(latex.to_string())
//! #     }
//! # }
//!
//! let mut session = Session::new(Echo);
//! session.apply(Change::Primary("x + x".to_string())).unwrap();
//! assert_eq!(session.display().result(), "x + x");
//! ```

pub mod display;
pub mod error;
pub mod fmt;
pub mod panels;
pub mod registry;
pub mod request;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use request::OperationKind;
pub use session::{Change, Session};
