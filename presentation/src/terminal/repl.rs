//! REPL (Read-Eval-Print Loop) for the command terminal

use crate::config::{OutputConfig, ReplConfig};
use crate::output::{tool_list::ToolListView, transcript::TranscriptView};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tooltrack_application::{
    CommandOutcome, PendingSage, SageClient, TerminalSession, resolve_pending,
};
use tracing::{debug, warn};

const PROMPT: &str = "tooltrack> ";
const SCANNER_PROMPT: &str = "qr> ";
const SCANNER_HINT: &str = "Enter a QR payload per line, empty line or Ctrl-C to close the scanner";
const SCANNER_CLOSED: &str = "📷 QR Scanner closed";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// What the read loop should do after a line was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    Continue,
    /// Transcript was reset, clear the screen before printing
    Redraw,
    /// A Sage request was staged and must be resolved before the next prompt
    AskSage(PendingSage),
    Exit,
}

/// Interactive command terminal
pub struct TerminalRepl {
    session: TerminalSession,
    sage: Arc<dyn SageClient>,
    config: ReplConfig,
    transcript_view: TranscriptView,
    tool_view: ToolListView,
    printed: usize,
    notices: Vec<String>,
    tools_changed: bool,
}

impl TerminalRepl {
    pub fn new(sage: Arc<dyn SageClient>) -> Self {
        let output = OutputConfig::default();
        Self {
            session: TerminalSession::new(),
            sage,
            config: ReplConfig::default(),
            transcript_view: TranscriptView::new(output.color),
            tool_view: ToolListView::new(output.color),
            printed: 0,
            notices: Vec::new(),
            tools_changed: false,
        }
    }

    pub fn with_repl_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_output_config(mut self, output: OutputConfig) -> Self {
        self.transcript_view = TranscriptView::new(output.color);
        self.tool_view = ToolListView::new(output.color);
        self
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        print!("{}", self.take_output());

        loop {
            let prompt = if self.session.is_scanner_open() {
                SCANNER_PROMPT
            } else {
                PROMPT
            };

            match rl.readline(prompt) {
                Ok(line) => {
                    if !self.session.is_scanner_open() && !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.trim());
                    }

                    let action = self.apply(&line);
                    if action == ReplAction::Redraw {
                        print!("{}", CLEAR_SCREEN);
                    }
                    print!("{}", self.take_output());

                    match action {
                        ReplAction::Exit => break,
                        ReplAction::AskSage(pending) => {
                            self.resolve(pending).await;
                            print!("{}", self.take_output());
                        }
                        ReplAction::Continue | ReplAction::Redraw => {}
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    if self.session.is_scanner_open() {
                        self.close_scanner();
                        print!("{}", self.take_output());
                    } else {
                        println!("^C");
                    }
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            if let Err(e) = rl.save_history(path) {
                warn!("Failed to save history to {}: {}", path.display(), e);
            }
        }

        Ok(())
    }

    /// Apply one line of input to the session.
    pub fn apply(&mut self, line: &str) -> ReplAction {
        if self.session.is_scanner_open() {
            let payload = line.trim();
            if payload.is_empty() {
                self.close_scanner();
            } else {
                self.session.add_tool(payload);
                self.tools_changed = true;
            }
            return ReplAction::Continue;
        }

        let command = line.trim();
        match command {
            "" => return ReplAction::Continue,
            "exit" | "quit" => {
                self.notices.push("Bye!".to_string());
                return ReplAction::Exit;
            }
            _ => {}
        }

        match self.session.handle_command(line) {
            CommandOutcome::Completed => ReplAction::Continue,
            CommandOutcome::ScannerOpened => {
                self.notices.push(SCANNER_HINT.to_string());
                ReplAction::Continue
            }
            CommandOutcome::TranscriptReset => {
                self.printed = 0;
                ReplAction::Redraw
            }
            CommandOutcome::SageRequested(pending) => ReplAction::AskSage(pending),
        }
    }

    /// Wait for a staged Sage request and append its answer.
    pub async fn resolve(&mut self, pending: PendingSage) {
        debug!("Waiting for Sage request #{}", pending.id());
        let completion = resolve_pending(self.sage.as_ref(), pending).await;
        self.session.complete_sage(completion);
    }

    /// Everything not yet shown: new transcript lines, the tool panel if the
    /// registry changed, then notices.
    pub fn take_output(&mut self) -> String {
        let transcript = self.session.transcript();
        let mut output = self
            .transcript_view
            .render(transcript.lines_since(self.printed));
        self.printed = transcript.len();

        if self.tools_changed && self.config.show_tools {
            output.push_str(&self.tool_view.render(self.session.tools()));
        }
        self.tools_changed = false;

        for notice in self.notices.drain(..) {
            output.push_str(&notice);
            output.push('\n');
        }

        output
    }

    fn close_scanner(&mut self) {
        self.session.close_scanner();
        self.notices.push(SCANNER_CLOSED.to_string());
    }
}
