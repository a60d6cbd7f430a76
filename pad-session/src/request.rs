//! Operation requests: what the front end asks the engine to do, assembled and validated from
//! the current session state.
//!
//! Assembly is the only place where structural validation happens. Mathematical validity is
//! entirely the engine's business; the assembler only checks that the inputs an operation cannot
//! run without are present, and fails with a [`MissingTarget`]/[`MissingVariables`] error before
//! the engine is ever called.

use crate::error::{EngineFailure, MissingTarget, MissingVariables, UnknownOperation};
use crate::fmt;
use crate::registry::FieldRegistry;
use levenshtein::levenshtein;
use pad_engine::{Engine, EngineError, EngineResult, ENTRY_DELIMITER};
use pad_error::Error;
use std::fmt::{Display, Formatter};
use std::ops::Range;

/// The operations the front end can ask the engine to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Simplify the expression.
    Simplify,

    /// Numerically evaluate the expression, substituting the active key/value pairs.
    Calculate,

    /// Differentiate the expression to a target variable.
    Differentiate,

    /// Integrate the expression to a target variable.
    Integrate,

    /// Taylor-expand the expression in a target variable around a point.
    TaylorExpansion,

    /// Propagate the errors of the named variables through the expression.
    ErrorAnalysis,
}

impl OperationKind {
    /// Every operation, in the order the selector offers them.
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Simplify,
        OperationKind::Calculate,
        OperationKind::Differentiate,
        OperationKind::Integrate,
        OperationKind::TaylorExpansion,
        OperationKind::ErrorAnalysis,
    ];

    /// The selector value naming this operation.
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Simplify => "simplify",
            OperationKind::Calculate => "calculate",
            OperationKind::Differentiate => "differentiate",
            OperationKind::Integrate => "integrate",
            OperationKind::TaylorExpansion => "taylor-expansion",
            OperationKind::ErrorAnalysis => "error-analysis",
        }
    }

    /// Binds a raw selector value to its operation.
    ///
    /// An unknown value produces an [`UnknownOperation`] error carrying similarly spelled
    /// operation names, so a front end can render a "did you mean" hint.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| {
                Error::new(0..name.len(), UnknownOperation {
                    name: name.to_string(),
                    suggestions: Self::similar_names(name)
                        .into_iter()
                        .map(|name| name.to_string())
                        .collect(),
                })
            })
    }

    /// Returns all operations with a name similar to the given name.
    pub fn similar_names(name: &str) -> Vec<&'static str> {
        Self::ALL
            .iter()
            .map(|kind| kind.name())
            .filter(|candidate| levenshtein(candidate, name) < 2)
            .collect()
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The contents of the operation-specific option fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionFields {
    /// The variable to differentiate to.
    pub differentiate_to: String,

    /// The variable to integrate to.
    pub integrate_to: String,

    /// The variable to taylor expand in.
    pub taylor_to: String,

    /// The point to taylor expand around.
    pub taylor_around: String,

    /// The degree to taylor expand up to, still unparsed.
    pub taylor_degree: String,
}

/// The auxiliary payload of an [`OperationRequest`], one variant per family of operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Auxiliary {
    /// No auxiliary input (simplification).
    None,

    /// The substitutions for a calculation: keys joined with [`ENTRY_DELIMITER`], and one
    /// pre-evaluated value per key, in the same order.
    Substitutions {
        keys: String,
        values: Vec<String>,
    },

    /// The variable to differentiate or integrate to.
    Target(String),

    /// The Taylor-expansion inputs.
    Taylor {
        target: String,
        around: String,
        degree: f64,
    },

    /// The variables to propagate errors of, joined with [`ENTRY_DELIMITER`].
    Variables(String),
}

/// A structurally valid engine request.
///
/// [`assemble`] is the only constructor, which guarantees that the auxiliary payload matches the
/// operation kind and that every required auxiliary input was present at assembly time.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    kind: OperationKind,
    input: String,
    auxiliary: Auxiliary,
    implicit_multiplication: bool,
    scientific_notation: bool,
}

impl OperationRequest {
    /// The operation this request performs.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The primary input expression.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The auxiliary payload attached to the operation.
    pub fn auxiliary(&self) -> &Auxiliary {
        &self.auxiliary
    }

    /// Whether consecutive letters multiply single-letter variables.
    pub fn implicit_multiplication(&self) -> bool {
        self.implicit_multiplication
    }

    /// Whether a numeric result should be renormalized into scientific notation for display.
    pub fn scientific_notation(&self) -> bool {
        self.scientific_notation
    }

    /// Invokes the engine entry point this request maps onto.
    pub fn invoke<E: Engine>(&self, engine: &E) -> Result<EngineResult, EngineError> {
        let implicit = self.implicit_multiplication;
        match (self.kind, &self.auxiliary) {
            (OperationKind::Simplify, Auxiliary::None) => {
                engine.simplify(&self.input, implicit)
            },
            (OperationKind::Calculate, Auxiliary::Substitutions { keys, values }) => {
                engine.calculate(&self.input, keys, values, implicit)
            },
            (OperationKind::Differentiate, Auxiliary::Target(target)) => {
                engine.differentiate(&self.input, target, implicit)
            },
            (OperationKind::Integrate, Auxiliary::Target(target)) => {
                engine.integrate(&self.input, target, implicit)
            },
            (OperationKind::TaylorExpansion, Auxiliary::Taylor { target, around, degree }) => {
                engine.taylor_expansion(&self.input, target, around, *degree, implicit)
            },
            (OperationKind::ErrorAnalysis, Auxiliary::Variables(variables)) => {
                engine.error_analysis(&self.input, variables, implicit)
            },

            // `assemble` always pairs the kind with its payload
            _ => unreachable!(),
        }
    }
}

/// Assembles a validated request from the current session state.
///
/// A missing required auxiliary input fails with [`MissingTarget`] or [`MissingVariables`]
/// without the engine being called. For a calculation, each active value slot is first evaluated
/// through the engine on its own (a zero-substitution `calculate` call) and the evaluated LaTeX
/// is what gets substituted; the raw slot content is never sent.
pub fn assemble<E: Engine>(
    engine: &E,
    kind: OperationKind,
    input: &str,
    options: &OptionFields,
    registry: &FieldRegistry,
    implicit_multiplication: bool,
    scientific_notation: bool,
) -> Result<OperationRequest, Error> {
    let span = 0..input.len();
    let auxiliary = match kind {
        OperationKind::Simplify => Auxiliary::None,
        OperationKind::Calculate => {
            let mut keys = Vec::new();
            let mut values = Vec::new();
            for (key, value) in registry.active_pairs() {
                let evaluated = engine
                    .calculate(value, "", &[], implicit_multiplication)
                    .map_err(|err| Error::new(span.clone(), EngineFailure::from(err)))?;
                keys.push(key);
                values.push(evaluated.latex);
            }
            log::debug!("substituting {:?} = {:?}", keys, values);
            Auxiliary::Substitutions {
                keys: keys.join(ENTRY_DELIMITER),
                values,
            }
        },
        OperationKind::Differentiate => {
            Auxiliary::Target(require_target(&options.differentiate_to, kind, &span)?)
        },
        OperationKind::Integrate => {
            Auxiliary::Target(require_target(&options.integrate_to, kind, &span)?)
        },
        OperationKind::TaylorExpansion => Auxiliary::Taylor {
            target: require_target(&options.taylor_to, kind, &span)?,
            around: options.taylor_around.clone(),
            degree: fmt::number_from_str(&options.taylor_degree),
        },
        OperationKind::ErrorAnalysis => {
            let variables = registry.active_values();
            if variables.is_empty() {
                return Err(Error::new(span, MissingVariables));
            }
            Auxiliary::Variables(variables.join(ENTRY_DELIMITER))
        },
    };

    Ok(OperationRequest {
        kind,
        input: input.to_string(),
        auxiliary,
        implicit_multiplication,
        scientific_notation,
    })
}

/// Validates that a target variable field is non-empty before it is sent anywhere.
fn require_target(
    target: &str,
    kind: OperationKind,
    span: &Range<usize>,
) -> Result<String, Error> {
    if target.is_empty() {
        Err(Error::new(span.clone(), MissingTarget { kind }))
    } else {
        Ok(target.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{Call, StubEngine};
    use pretty_assertions::assert_eq;
    use super::*;

    fn registry_with_pairs(pairs: &[(usize, &str, &str)]) -> FieldRegistry {
        let mut registry = FieldRegistry::new();
        for id in 0..crate::registry::SLOT_CAPACITY {
            registry.add_pair_slot(id);
            registry.add_slot(id);
        }
        for (id, key, value) in pairs {
            registry.set_key(*id, *key);
            registry.set_value(*id, *value);
        }
        registry
    }

    #[test]
    fn selector_names_round_trip() {
        for kind in OperationKind::ALL {
            assert_eq!(OperationKind::from_name(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_selector_value_suggests() {
        let err = OperationKind::from_name("simplfy").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<UnknownOperation>().unwrap();
        assert_eq!(kind.suggestions, vec![String::from("simplify")]);
    }

    #[test]
    fn empty_differentiate_target_never_reaches_the_engine() {
        let engine = StubEngine::returning("2x");
        let registry = FieldRegistry::new();
        let options = OptionFields::default();

        let err = assemble(
            &engine,
            OperationKind::Differentiate,
            "x^2",
            &options,
            &registry,
            false,
            false,
        ).unwrap_err();

        let kind = err.kind.as_any().downcast_ref::<MissingTarget>().unwrap();
        assert_eq!(kind.kind, OperationKind::Differentiate);
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn empty_integrate_target_never_reaches_the_engine() {
        let engine = StubEngine::returning("x^2/2");
        let err = assemble(
            &engine,
            OperationKind::Integrate,
            "x",
            &OptionFields::default(),
            &FieldRegistry::new(),
            false,
            false,
        ).unwrap_err();

        assert!(err.kind.as_any().downcast_ref::<MissingTarget>().is_some());
        assert_eq!(err.message(), "cannot integrate to empty string");
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn error_analysis_needs_variables() {
        let engine = StubEngine::returning("\\Delta x");
        let err = assemble(
            &engine,
            OperationKind::ErrorAnalysis,
            "x y",
            &OptionFields::default(),
            &FieldRegistry::new(),
            true,
            false,
        ).unwrap_err();

        assert!(err.kind.as_any().downcast_ref::<MissingVariables>().is_some());
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn calculate_pre_evaluates_every_active_value() {
        let mut engine = StubEngine::returning("5");
        engine.responses.insert(String::from("1+1"), String::from("2"));
        engine.responses.insert(String::from("3^2"), String::from("9"));
        let registry = registry_with_pairs(&[(0, "x", "1+1"), (3, "y", "3^2"), (5, "z", "")]);

        let request = assemble(
            &engine,
            OperationKind::Calculate,
            "x+y",
            &OptionFields::default(),
            &registry,
            false,
            false,
        ).unwrap();

        assert_eq!(request.auxiliary(), &Auxiliary::Substitutions {
            keys: String::from("x\\n\\ny"),
            values: vec![String::from("2"), String::from("9")],
        });

        // one zero-substitution evaluation per active pair; the inactive pair is skipped
        assert_eq!(*engine.calls.borrow(), vec![
            Call::Calculate {
                expr: String::from("1+1"),
                keys: String::new(),
                values: Vec::new(),
            },
            Call::Calculate {
                expr: String::from("3^2"),
                keys: String::new(),
                values: Vec::new(),
            },
        ]);
    }

    #[test]
    fn calculate_aborts_when_pre_evaluation_fails() {
        let engine = StubEngine::failing("undefined variable");
        let registry = registry_with_pairs(&[(0, "x", "q+1")]);

        let err = assemble(
            &engine,
            OperationKind::Calculate,
            "x",
            &OptionFields::default(),
            &registry,
            false,
            false,
        ).unwrap_err();

        assert!(err.kind.as_any().downcast_ref::<EngineFailure>().is_some());
        assert_eq!(err.message(), "undefined variable");
    }

    #[test]
    fn taylor_degree_number_semantics() {
        let engine = StubEngine::returning("1+x");
        let registry = FieldRegistry::new();
        let mut options = OptionFields {
            taylor_to: String::from("x"),
            taylor_around: String::from("0"),
            ..OptionFields::default()
        };

        let request = assemble(
            &engine,
            OperationKind::TaylorExpansion,
            "e^x",
            &options,
            &registry,
            false,
            false,
        ).unwrap();
        assert_eq!(request.auxiliary(), &Auxiliary::Taylor {
            target: String::from("x"),
            around: String::from("0"),
            degree: 0.0, // blank degree reads as zero
        });

        // a non-numeric degree is forwarded as NaN; the engine owns numeric validation
        options.taylor_degree = String::from("high");
        let request = assemble(
            &engine,
            OperationKind::TaylorExpansion,
            "e^x",
            &options,
            &registry,
            false,
            false,
        ).unwrap();
        let Auxiliary::Taylor { degree, .. } = request.auxiliary() else {
            panic!("expected a taylor payload");
        };
        assert!(degree.is_nan());
    }

    #[test]
    fn invoke_maps_each_kind_onto_its_entry_point() {
        let engine = StubEngine::returning("ok");
        let mut registry = registry_with_pairs(&[(0, "x", "2")]);
        registry.set_variable(0, "m");
        let options = OptionFields {
            differentiate_to: String::from("x"),
            integrate_to: String::from("t"),
            taylor_to: String::from("x"),
            taylor_around: String::from("1"),
            taylor_degree: String::from("3"),
        };

        for kind in OperationKind::ALL {
            let request = assemble(&engine, kind, "f(x)", &options, &registry, true, false)
                .unwrap();
            engine.calls.borrow_mut().clear();
            request.invoke(&engine).unwrap();

            let calls = engine.calls.borrow();
            assert_eq!(calls.len(), 1, "{} dispatched {} calls", kind, calls.len());
            match (kind, &calls[0]) {
                (OperationKind::Simplify, Call::Simplify { expr }) => {
                    assert_eq!(expr, "f(x)");
                },
                (OperationKind::Calculate, Call::Calculate { keys, values, .. }) => {
                    assert_eq!(keys, "x");
                    assert_eq!(values, &vec![String::from("ok")]);
                },
                (OperationKind::Differentiate, Call::Differentiate { target, .. }) => {
                    assert_eq!(target, "x");
                },
                (OperationKind::Integrate, Call::Integrate { target, .. }) => {
                    assert_eq!(target, "t");
                },
                (OperationKind::TaylorExpansion, Call::TaylorExpansion { target, around, degree, .. }) => {
                    assert_eq!(target, "x");
                    assert_eq!(around, "1");
                    assert_eq!(*degree, 3.0);
                },
                (OperationKind::ErrorAnalysis, Call::ErrorAnalysis { variables, .. }) => {
                    assert_eq!(variables, "m");
                },
                (kind, call) => panic!("{} dispatched to {:?}", kind, call),
            }
        }
    }
}
