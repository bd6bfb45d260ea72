//! Application entry orchestration for the shelly CLI.

use crate::cli::{self, Invocation, UsageError};
use shelly::api::ApiClient;
use shelly::build_info;
use shelly::clipboard::SystemClipboard;
use shelly::config::{load_config, resolve_api_settings, ConfigStore};
use shelly::error::ShellyError;
use shelly::runner::{run_init, run_mode, ModeContext};
use shelly::ui::render::{RenderSink, Renderer};
use shelly::ui::terminal::SystemTerminal;

const INIT_HINT: &str = "Run 'shelly --init' to set up your API key";

/// Run one invocation and return the process exit code.
pub(crate) async fn run(args: cli::Args) -> i32 {
    let renderer = Renderer::detect(args.no_color);
    tracing::debug!(build = %build_info::build_summary(), "starting");

    let Some(invocation) = resolve_invocation(&renderer, &args) else {
        return 1;
    };
    let result = execute(&renderer, invocation).await;
    exit_code(&renderer, result)
}

/// Map parsed flags to one action, printing usage or the one-mode error otherwise.
fn resolve_invocation(renderer: &dyn RenderSink, args: &cli::Args) -> Option<Invocation> {
    match args.invocation() {
        Ok(invocation) => Some(invocation),
        Err(UsageError::NoMode) => {
            renderer.info(cli::USAGE_TEXT);
            None
        }
        Err(UsageError::MultipleModes) => {
            renderer.error("Only one mode can be used at a time");
            None
        }
    }
}

fn exit_code(renderer: &dyn RenderSink, result: Result<(), ShellyError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(error = ?err, "invocation failed");
            report_error(renderer, &err);
            1
        }
    }
}

async fn execute(renderer: &Renderer, invocation: Invocation) -> Result<(), ShellyError> {
    let mut terminal = SystemTerminal;
    let store = ConfigStore::default_location()?;

    match invocation {
        Invocation::Init => run_init(renderer, &mut terminal, &store),
        Invocation::Run(mode) => {
            let config = load_config(&store)?;
            let client = ApiClient::new(&resolve_api_settings(), &config);
            let ctx = ModeContext {
                renderer,
                terminal: &mut terminal,
                clipboard: &SystemClipboard,
            };
            run_mode(&client, &mode, ctx).await
        }
    }
}

/// Print `err` on stderr, with the init hint when credentials are missing or rejected.
fn report_error(renderer: &dyn RenderSink, err: &ShellyError) {
    match err {
        ShellyError::Config(config_err) if config_err.needs_init() => {
            renderer.error(&format!("loading config: {config_err}"));
            renderer.detail(INIT_HINT);
        }
        ShellyError::Api(api_err) if matches!(api_err.status_code(), Some(401 | 403)) => {
            renderer.error(&api_err.to_string());
            renderer.detail(INIT_HINT);
        }
        other => renderer.error(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use shelly::error::{ApiError, ClipboardError, ConfigError, SelectionError};
    use shelly::ui::spinner::Spinner;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockRenderer {
        /// Captured `(stream, text)` lines.
        entries: Mutex<Vec<(&'static str, String)>>,
    }

    impl MockRenderer {
        fn record(&self, stream: &'static str, text: &str) {
            self.entries
                .lock()
                .expect("mock renderer lock")
                .push((stream, text.to_string()));
        }

        fn lines(&self, stream: &str) -> Vec<String> {
            self.entries
                .lock()
                .expect("mock renderer lock")
                .iter()
                .filter(|(s, _)| *s == stream)
                .map(|(_, text)| text.clone())
                .collect()
        }
    }

    impl RenderSink for MockRenderer {
        fn assistant_message(&self, content: &str) {
            self.record("stdout", content);
        }

        fn info(&self, text: &str) {
            self.record("stdout", text);
        }

        fn success(&self, text: &str) {
            self.record("stdout", text);
        }

        fn prompt_inline(&self, text: &str) {
            self.record("stdout", text);
        }

        fn waiting(&self, _model: &str) -> Spinner {
            Spinner::inactive()
        }

        fn warn(&self, msg: &str) {
            self.record("stderr", &format!("warning: {msg}"));
        }

        fn error(&self, msg: &str) {
            self.record("stderr", &format!("error: {msg}"));
        }

        fn detail(&self, text: &str) {
            self.record("stderr", text);
        }
    }

    fn args(argv: &[&str]) -> cli::Args {
        cli::Args::parse_from(std::iter::once("shelly").chain(argv.iter().copied()))
    }

    fn code_for(err: ShellyError) -> (i32, MockRenderer) {
        let renderer = MockRenderer::default();
        let code = exit_code(&renderer, Err(err));
        (code, renderer)
    }

    #[test]
    fn two_modes_print_one_mode_error_and_fail() {
        let renderer = MockRenderer::default();
        assert_eq!(resolve_invocation(&renderer, &args(&["-c", "x", "-q", "y"])), None);
        assert_eq!(
            renderer.lines("stderr"),
            vec!["error: Only one mode can be used at a time".to_string()]
        );
        assert!(renderer.lines("stdout").is_empty());
    }

    #[test]
    fn no_mode_prints_usage_on_stdout() {
        let renderer = MockRenderer::default();
        assert_eq!(resolve_invocation(&renderer, &args(&[])), None);
        assert_eq!(renderer.lines("stdout"), vec![cli::USAGE_TEXT.to_string()]);
        assert!(renderer.lines("stderr").is_empty());
    }

    #[test]
    fn single_mode_resolves_silently() {
        let renderer = MockRenderer::default();
        let invocation = resolve_invocation(&renderer, &args(&["-q", "why"]));
        assert!(matches!(invocation, Some(Invocation::Run(_))));
        assert!(renderer.entries.lock().unwrap().is_empty());
    }

    #[test]
    fn success_exits_zero() {
        let renderer = MockRenderer::default();
        assert_eq!(exit_code(&renderer, Ok(())), 0);
        assert!(renderer.lines("stderr").is_empty());
    }

    #[test]
    fn missing_config_adds_init_hint() {
        let missing = ConfigError::NotFound(PathBuf::from("/h/config.json"));
        let (code, renderer) = code_for(missing.into());
        assert_eq!(code, 1);
        let stderr = renderer.lines("stderr");
        assert!(stderr[0].starts_with("error: loading config: config file not found"));
        assert_eq!(stderr[1], INIT_HINT);
    }

    #[test]
    fn rejected_key_adds_init_hint() {
        for status in [401, 403] {
            let (code, renderer) = code_for(ApiError::Status(status, "denied".into()).into());
            assert_eq!(code, 1);
            let stderr = renderer.lines("stderr");
            assert!(stderr[0].contains(&status.to_string()));
            assert_eq!(stderr[1], INIT_HINT);
        }
    }

    #[test]
    fn other_failures_have_no_hint() {
        let failures: Vec<ShellyError> = vec![
            ApiError::Status(500, "boom".into()).into(),
            SelectionError::Invalid("4".into()).into(),
            ClipboardError::Unavailable.into(),
        ];
        for err in failures {
            let (code, renderer) = code_for(err);
            assert_eq!(code, 1);
            let stderr = renderer.lines("stderr");
            assert_eq!(stderr.len(), 1, "got: {stderr:?}");
            assert!(stderr[0].starts_with("error: "));
        }
    }
}
