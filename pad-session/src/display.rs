//! The visible output surface rebuilt after every processing cycle.
//!
//! The surface mirrors what the page shows: a display-only result field, a list of derivation
//! step nodes, and two plain-text copy outputs (the result's LaTeX and its numeric-code export
//! form), each with its own show/hide toggle. The orchestration layer clears the whole surface
//! at the start of a cycle and repopulates it at the end, so it always reflects exactly one
//! request.

use pad_error::Error;

/// A rendered derivation step, addressed by a unique node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepNode {
    /// The node id, `step-latex-{index}`.
    pub id: String,

    /// The step's LaTeX.
    pub latex: String,
}

/// The output surface of a session.
#[derive(Debug)]
pub struct DisplayState {
    result: String,
    steps: Vec<StepNode>,
    latex_output: String,
    export_output: String,
    show_latex_output: bool,
    show_export_output: bool,
}

impl DisplayState {
    /// Creates an empty surface with both copy outputs visible.
    pub fn new() -> Self {
        Self {
            result: String::new(),
            steps: Vec::new(),
            latex_output: String::new(),
            export_output: String::new(),
            show_latex_output: true,
            show_export_output: true,
        }
    }

    /// Clears everything a processing cycle populates. The visibility toggles are user
    /// preferences, not results, and survive.
    pub fn clear(&mut self) {
        self.result.clear();
        self.steps.clear();
        self.latex_output.clear();
        self.export_output.clear();
    }

    /// Populates the surface from a successful result. The step list is rebuilt from scratch,
    /// in the order given, one freshly addressed node per step.
    pub fn render(&mut self, latex: &str, steps: &[String], export: &str) {
        self.result = latex.to_string();
        self.latex_output = latex.to_string();
        self.export_output = export.to_string();
        self.steps = steps
            .iter()
            .enumerate()
            .map(|(i, step)| StepNode {
                id: format!("step-latex-{}", i),
                latex: step.clone(),
            })
            .collect();
    }

    /// Replaces the result field with the inline marker for a failed cycle.
    pub fn render_error(&mut self, error: &Error) {
        self.result = format!("\\textbf{{Invalid LaTeX ({})}}", error.message());
    }

    /// The content of the display-only result field.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// The rendered derivation steps, in order.
    pub fn steps(&self) -> &[StepNode] {
        &self.steps
    }

    /// The plain-text copy output holding the result's LaTeX.
    pub fn latex_output(&self) -> &str {
        &self.latex_output
    }

    /// The plain-text copy output holding the result's export form.
    pub fn export_output(&self) -> &str {
        &self.export_output
    }

    /// Whether the LaTeX copy output is shown.
    pub fn shows_latex_output(&self) -> bool {
        self.show_latex_output
    }

    /// Whether the export copy output is shown.
    pub fn shows_export_output(&self) -> bool {
        self.show_export_output
    }

    pub(crate) fn set_show_latex_output(&mut self, show: bool) {
        self.show_latex_output = show;
    }

    pub(crate) fn set_show_export_output(&mut self, show: bool) {
        self.show_export_output = show;
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
