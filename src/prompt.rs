//! Prompt templating for the three operating modes.
//!
//! Each mode has one fixed template file with `{{KEY}}` placeholders. The
//! templates ask the model for plain text so replies print cleanly and the
//! numbered commands can be picked out line by line.

use std::collections::BTreeMap;

const DEBUG_TEMPLATE: &str = include_str!("templates/debug.template");
const COMMAND_TEMPLATE: &str = include_str!("templates/command.template");
const QUESTION_TEMPLATE: &str = include_str!("templates/question.template");
const QUESTION_WITH_CONTEXT_TEMPLATE: &str =
    include_str!("templates/question_with_context.template");

/// Operating mode selected on the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// `-d`: explain a failing command and suggest three fixes.
    Debug(String),
    /// `-c`: suggest three commands for a task.
    Command(String),
    /// `-q`: answer a question.
    Question(String),
}

impl Mode {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Debug(_) => "debug",
            Self::Command(_) => "command",
            Self::Question(_) => "question",
        }
    }

    /// Whether this mode reads piped stdin as context.
    pub fn reads_piped_input(&self) -> bool {
        matches!(self, Self::Debug(_) | Self::Question(_))
    }

    /// Whether the reply is a numbered list the user picks from.
    pub fn offers_selection(&self) -> bool {
        matches!(self, Self::Debug(_) | Self::Command(_))
    }

    /// Render the final prompt for this mode.
    ///
    /// `piped` is the captured stdin context, empty when none was piped.
    pub fn render_prompt(&self, piped: &str) -> String {
        match self {
            Self::Debug(description) => debug_prompt(description, piped),
            Self::Command(request) => command_prompt(request),
            Self::Question(question) => question_prompt(question, piped),
        }
    }
}

/// Debug prompt: the piped output is the failing command, the flag text is context.
pub fn debug_prompt(description: &str, piped_input: &str) -> String {
    let mut vars = BTreeMap::new();
    vars.insert("COMMAND", piped_input);
    vars.insert("CONTEXT", description);
    render_template(DEBUG_TEMPLATE, &vars)
}

/// Command prompt: ask for exactly three numbered commands.
pub fn command_prompt(request: &str) -> String {
    let mut vars = BTreeMap::new();
    vars.insert("REQUEST", request);
    render_template(COMMAND_TEMPLATE, &vars)
}

/// Question prompt, grounded in piped context when any was captured.
pub fn question_prompt(question: &str, piped_context: &str) -> String {
    let mut vars = BTreeMap::new();
    vars.insert("QUESTION", question);
    if piped_context.is_empty() {
        return render_template(QUESTION_TEMPLATE, &vars);
    }
    vars.insert("CONTEXT", piped_context);
    render_template(QUESTION_WITH_CONTEXT_TEMPLATE, &vars)
}

/// Substitute `{{KEY}}` placeholders in one left-to-right pass.
///
/// Substituted values are never rescanned, so user text that happens to
/// contain `{{...}}` is kept verbatim. Unknown placeholders are left as-is.
fn render_template(template: &str, vars: &BTreeMap<&str, &str>) -> String {
    let template = template.trim_end();
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            rendered.push_str(&rest[start..]);
            return rendered;
        };
        let key = &after_open[..end];
        match vars.get(key) {
            Some(value) => rendered.push_str(value),
            None => {
                rendered.push_str("{{");
                rendered.push_str(key);
                rendered.push_str("}}");
            }
        }
        rest = &after_open[end + 2..];
    }
    rendered.push_str(rest);
    rendered
}
