//! Debug, command, and question modes.

use crate::api::ModelClient;
use crate::clipboard::Clipboard;
use crate::error::ShellyError;
use crate::prompt::Mode;
use crate::selection::select_and_copy;
use crate::ui::render::RenderSink;
use crate::ui::terminal::Terminal;

/// I/O seams one mode invocation writes to and reads from.
pub struct ModeContext<'a> {
    pub renderer: &'a dyn RenderSink,
    pub terminal: &'a mut dyn Terminal,
    pub clipboard: &'a dyn Clipboard,
}

/// Run one mode end to end.
///
/// Piped stdin is consumed only by modes that use it, and only when stdin is
/// not a terminal. The reply is printed verbatim; debug and command modes then
/// prompt for a pick and copy it.
pub async fn run_mode(
    model: &dyn ModelClient,
    mode: &Mode,
    ctx: ModeContext<'_>,
) -> Result<(), ShellyError> {
    let piped = if mode.reads_piped_input() && !ctx.terminal.stdin_is_interactive() {
        ctx.terminal.read_piped_input()?
    } else {
        String::new()
    };
    if matches!(mode, Mode::Debug(_)) && piped.is_empty() {
        ctx.renderer
            .warn("no command output on stdin; pipe the failing command into shelly -d");
    }

    let prompt = mode.render_prompt(&piped);
    tracing::info!(
        mode = mode.name(),
        model = model.model(),
        piped_chars = piped.len(),
        prompt_chars = prompt.len(),
        "sending prompt"
    );

    let reply = {
        let mut spinner = ctx.renderer.waiting(model.model());
        let result = model.complete(&prompt).await;
        spinner.stop();
        result?
    };

    ctx.renderer.assistant_message(&reply);

    if mode.offers_selection() {
        let command = select_and_copy(ctx.renderer, ctx.terminal, ctx.clipboard, &reply)?;
        tracing::debug!(command = %command, "command copied");
    }
    Ok(())
}
