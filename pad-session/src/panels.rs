//! Visibility of the operation-specific option panels.
//!
//! Each operation that needs auxiliary input has a panel for it; selecting an operation shows
//! exactly that panel and hides the rest. Simplification needs nothing, so it shows none.

use crate::request::OperationKind;

/// The auxiliary panels the front end can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// The key/value pairs substituted into a calculation.
    InputValues,

    /// The differentiation target variable.
    DifferentiateOptions,

    /// The integration target variable.
    IntegrateOptions,

    /// The Taylor-expansion target, expansion point and degree.
    TaylorOptions,

    /// The variables to propagate errors of.
    ErrorAnalysisOptions,
}

impl Panel {
    /// Every panel.
    pub const ALL: [Panel; 5] = [
        Panel::InputValues,
        Panel::DifferentiateOptions,
        Panel::IntegrateOptions,
        Panel::TaylorOptions,
        Panel::ErrorAnalysisOptions,
    ];

    /// The panel serving the given operation, if it has one.
    pub fn for_operation(kind: OperationKind) -> Option<Panel> {
        match kind {
            OperationKind::Simplify => None,
            OperationKind::Calculate => Some(Panel::InputValues),
            OperationKind::Differentiate => Some(Panel::DifferentiateOptions),
            OperationKind::Integrate => Some(Panel::IntegrateOptions),
            OperationKind::TaylorExpansion => Some(Panel::TaylorOptions),
            OperationKind::ErrorAnalysis => Some(Panel::ErrorAnalysisOptions),
        }
    }
}

/// Maps the selected operation to the set of visible panels.
///
/// The machine's state is just the selected operation's panel; it transitions whenever the
/// selector changes and lives for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    visible: Option<Panel>,
}

impl PanelVisibility {
    /// Creates the machine in the state matching the selector's initial value.
    pub fn new(kind: OperationKind) -> Self {
        Self { visible: Panel::for_operation(kind) }
    }

    /// Moves to the state matching the newly selected operation.
    pub fn transition(&mut self, kind: OperationKind) {
        self.visible = Panel::for_operation(kind);
    }

    /// The panel currently shown, if any.
    pub fn visible(&self) -> Option<Panel> {
        self.visible
    }

    /// Whether the given panel is currently shown.
    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible == Some(panel)
    }
}
