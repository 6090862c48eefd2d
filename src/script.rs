//! Input script construction for the external program's interactive prompts.
//!
//! The executable reads its configuration as a fixed sequence of
//! line-oriented stdin answers. Order is everything: a missing or extra line
//! does not fail, it silently shifts every later answer onto the wrong
//! prompt. The sequence is therefore kept as one declarative list of typed
//! steps, from which both the rendered script and any test mock derive.

use crate::params::ParameterSet;

/// One answer line in the prompt protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptStep {
    /// A `y`/`n` confirmation line.
    Confirm(bool),
    /// A decimal integer line.
    Integer(u32),
}

impl PromptStep {
    fn render(&self, out: &mut String) {
        match self {
            PromptStep::Confirm(true) => out.push('y'),
            PromptStep::Confirm(false) => out.push('n'),
            PromptStep::Integer(v) => out.push_str(&v.to_string()),
        }
        out.push('\n');
    }
}

/// The exact prompt sequence the executable walks through:
/// configure code 1 (confirm, n, k, d), configure code 2 (confirm, n, k, d),
/// custom message, pre-computed matrix. Ten lines total.
pub fn prompt_sequence(params: &ParameterSet) -> Vec<PromptStep> {
    vec![
        PromptStep::Confirm(true),
        PromptStep::Integer(params.g1.n),
        PromptStep::Integer(params.g1.k),
        PromptStep::Integer(params.g1.d),
        PromptStep::Confirm(true),
        PromptStep::Integer(params.g2.n),
        PromptStep::Integer(params.g2.k),
        PromptStep::Integer(params.g2.d),
        PromptStep::Confirm(params.custom_message),
        PromptStep::Confirm(params.use_precomputed_matrix),
    ]
}

/// Render the full stdin script for one run: every step as one
/// newline-terminated line, no blank lines, no echoed prompts.
pub fn build_script(params: &ParameterSet) -> String {
    let steps = prompt_sequence(params);
    let mut out = String::with_capacity(steps.len() * 4);
    for step in &steps {
        step.render(&mut out);
    }
    out
}
