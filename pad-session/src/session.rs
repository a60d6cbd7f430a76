//! The session orchestrator: owns all front-end state and runs the processing pipeline on every
//! subscribed change.
//!
//! Every editing widget on the page registers its edits as a [`Change`] and funnels them through
//! [`Session::apply`], the single dispatch entry point. Each dispatch runs synchronously to
//! completion, so processing cycles never interleave and the display always reflects the most
//! recent change.

use crate::display::DisplayState;
use crate::error::EngineFailure;
use crate::fmt;
use crate::panels::PanelVisibility;
use crate::registry::{FieldRegistry, SLOT_CAPACITY};
use crate::request::{self, OperationKind, OptionFields};
use pad_engine::Engine;
use pad_error::Error;

/// A subscribed front-end change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The primary input was edited.
    Primary(String),

    /// A different operation was selected.
    Operation(OperationKind),

    /// The key side of the pair slot at the given position was edited.
    PairKey(usize, String),

    /// The value side of the pair slot at the given position was edited.
    PairValue(usize, String),

    /// The error-variable slot at the given position was edited.
    ErrorVariable(usize, String),

    /// The differentiation target field was edited.
    DifferentiateTarget(String),

    /// The integration target field was edited.
    IntegrateTarget(String),

    /// The Taylor-expansion target field was edited.
    TaylorTarget(String),

    /// The Taylor-expansion point field was edited.
    TaylorAround(String),

    /// The Taylor-expansion degree field was edited.
    TaylorDegree(String),

    /// The implicit-multiplication checkbox was toggled.
    ImplicitMultiplication(bool),

    /// The scientific-notation checkbox was toggled.
    ScientificNotation(bool),

    /// The LaTeX copy output was shown or hidden.
    ShowLatexOutput(bool),

    /// The export copy output was shown or hidden.
    ShowExportOutput(bool),
}

/// A live session: the engine, everything the user has typed, and the output surface.
#[derive(Debug)]
pub struct Session<E> {
    engine: E,
    operation: OperationKind,
    input: String,
    options: OptionFields,
    registry: FieldRegistry,
    implicit_multiplication: bool,
    scientific_notation: bool,
    display: DisplayState,
    panels: PanelVisibility,
}

impl<E: Engine> Session<E> {
    /// Creates a session around the given engine.
    ///
    /// Every slot position is created eagerly, matching the widgets the page builds at startup;
    /// the operation starts on the selector's default, simplification.
    pub fn new(engine: E) -> Self {
        let mut registry = FieldRegistry::new();
        for id in 0..SLOT_CAPACITY {
            registry.add_pair_slot(id);
            registry.add_slot(id);
        }

        let operation = OperationKind::Simplify;
        Self {
            engine,
            operation,
            input: String::new(),
            options: OptionFields::default(),
            registry,
            implicit_multiplication: false,
            scientific_notation: false,
            display: DisplayState::new(),
            panels: PanelVisibility::new(operation),
        }
    }

    /// The single dispatch entry point every subscribed change funnels through.
    ///
    /// Primary-input edits and operation changes surface processing failures to the caller.
    /// Edits inside the key/value/variable slot editors reprocess best-effort: the display
    /// still shows the inline error marker, but the failure itself is swallowed: a quiet retry
    /// on every keystroke, an authoritative error on a deliberate action. Checkbox changes only
    /// record state; the next edit picks them up.
    pub fn apply(&mut self, change: Change) -> Result<(), Error> {
        match change {
            Change::Primary(latex) => {
                self.input = latex;
                self.process()
            },
            Change::Operation(kind) => {
                self.operation = kind;
                self.panels.transition(kind);
                self.process()
            },
            Change::PairKey(id, latex) => {
                self.registry.set_key(id, latex);
                self.process_quietly();
                Ok(())
            },
            Change::PairValue(id, latex) => {
                self.registry.set_value(id, latex);
                self.process_quietly();
                Ok(())
            },
            Change::ErrorVariable(id, latex) => {
                self.registry.set_variable(id, latex);
                self.process_quietly();
                Ok(())
            },
            Change::DifferentiateTarget(latex) => {
                self.options.differentiate_to = latex;
                self.process()
            },
            Change::IntegrateTarget(latex) => {
                self.options.integrate_to = latex;
                self.process()
            },
            Change::TaylorTarget(latex) => {
                self.options.taylor_to = latex;
                self.process()
            },
            Change::TaylorAround(latex) => {
                self.options.taylor_around = latex;
                self.process()
            },
            Change::TaylorDegree(latex) => {
                self.options.taylor_degree = latex;
                self.process()
            },
            Change::ImplicitMultiplication(enabled) => {
                self.implicit_multiplication = enabled;
                Ok(())
            },
            Change::ScientificNotation(enabled) => {
                self.scientific_notation = enabled;
                Ok(())
            },
            Change::ShowLatexOutput(show) => {
                self.display.set_show_latex_output(show);
                Ok(())
            },
            Change::ShowExportOutput(show) => {
                self.display.set_show_export_output(show);
                Ok(())
            },
        }
    }

    /// Runs one full processing cycle: clear the surface, assemble, invoke, post-process,
    /// render. An empty primary input stops right after the clear.
    fn process(&mut self) -> Result<(), Error> {
        self.display.clear();
        if self.input.is_empty() {
            return Ok(());
        }

        match self.run() {
            Ok(()) => Ok(()),
            Err(err) => {
                self.display.render_error(&err);
                Err(err)
            },
        }
    }

    fn run(&mut self) -> Result<(), Error> {
        let request = request::assemble(
            &self.engine,
            self.operation,
            &self.input,
            &self.options,
            &self.registry,
            self.implicit_multiplication,
            self.scientific_notation,
        )?;

        let result = request
            .invoke(&self.engine)
            .map_err(|err| Error::new(0..self.input.len(), EngineFailure::from(err)))?;

        // older engine builds return no inline export form; derive it from the raw result (the
        // display transform below never feeds back into anything)
        let export = match &result.export {
            Some(export) => export.clone(),
            None => self.engine
                .translate_to_export(&result.latex)
                .map_err(|err| Error::new(0..self.input.len(), EngineFailure::from(err)))?,
        };

        let latex = if request.kind() == OperationKind::Calculate && request.scientific_notation() {
            fmt::renormalize(&result.latex)
        } else {
            result.latex
        };

        self.display.render(&latex, &result.steps, &export);
        Ok(())
    }

    fn process_quietly(&mut self) {
        if let Err(err) = self.process() {
            log::debug!("auxiliary edit reprocessing failed: {}", err.message());
        }
    }

    /// The currently selected operation.
    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    /// The output surface.
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// The panel visibility machine.
    pub fn panels(&self) -> &PanelVisibility {
        &self.panels
    }

    /// The expression-input slots.
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }
}
