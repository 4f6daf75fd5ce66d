//! Terminal session controller
//!
//! Owns the per-session state (transcript, tool registry, scanner flag) and
//! applies classified commands to it. Nothing here performs I/O; Sage
//! requests leave the session as [`PendingSage`] markers.

pub mod pending;

use pending::{PendingSage, SageCompletion};
use std::collections::BTreeSet;
use tooltrack_domain::transcript::lines;
use tooltrack_domain::{Intent, SEPARATOR, Tool, ToolRegistry, Transcript};
use tracing::{debug, info, warn};

/// What the front end has to do after a command was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Transcript updated, nothing else to do
    Completed,
    /// The scanning interface should be shown
    ScannerOpened,
    /// The transcript went back to the banner and should be redrawn
    TranscriptReset,
    /// A Sage request was staged and must be resolved by the caller
    SageRequested(PendingSage),
}

/// State of one single-user terminal session
#[derive(Debug, Clone)]
pub struct TerminalSession {
    transcript: Transcript,
    registry: ToolRegistry,
    scanner_open: bool,
    next_request_id: u64,
    outstanding: BTreeSet<u64>,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            registry: ToolRegistry::new(),
            scanner_open: false,
            next_request_id: 1,
            outstanding: BTreeSet::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn tools(&self) -> &[Tool] {
        self.registry.tools()
    }

    pub fn is_scanner_open(&self) -> bool {
        self.scanner_open
    }

    /// Number of staged Sage requests not yet completed
    pub fn outstanding_requests(&self) -> usize {
        self.outstanding.len()
    }

    /// Classify one raw command line and apply it.
    pub fn handle_command(&mut self, raw: &str) -> CommandOutcome {
        let intent = Intent::parse(raw);
        debug!("Command {:?} classified as {}", raw, intent.name());

        match intent {
            Intent::Help => {
                self.transcript.push(lines::echo(raw));
                self.transcript.extend(lines::HELP);
                self.transcript.push(SEPARATOR);
                CommandOutcome::Completed
            }
            Intent::Scan => {
                self.open_scanner();
                self.transcript.push(lines::echo(raw));
                self.transcript.push(lines::SCANNER_OPENED);
                self.transcript.push(SEPARATOR);
                CommandOutcome::ScannerOpened
            }
            Intent::Track => {
                self.transcript.push(lines::echo(raw));
                let total = lines::track_total(self.registry.len());
                self.transcript.push(total);
                let entries: Vec<String> = self
                    .registry
                    .tools()
                    .iter()
                    .map(|tool| lines::track_entry(tool.name(), tool.qr_code()))
                    .collect();
                self.transcript.extend(entries);
                self.transcript.push(SEPARATOR);
                CommandOutcome::Completed
            }
            Intent::Sage { query } => {
                self.transcript.push(lines::echo(raw));
                self.transcript.push(lines::SAGE_THINKING);
                self.transcript.push(SEPARATOR);

                let pending = PendingSage::new(self.next_request_id, query);
                self.next_request_id += 1;
                self.outstanding.insert(pending.id());
                CommandOutcome::SageRequested(pending)
            }
            Intent::Clear => {
                self.transcript.reset();
                CommandOutcome::TranscriptReset
            }
            Intent::Unknown => {
                self.transcript.push(lines::echo(raw));
                self.transcript.push(lines::UNKNOWN_COMMAND);
                self.transcript.push(SEPARATOR);
                CommandOutcome::Completed
            }
        }
    }

    /// Register a scanned tool and confirm it in the transcript.
    pub fn add_tool(&mut self, qr_payload: &str) -> Tool {
        let tool = self.registry.add_tool(qr_payload).clone();
        info!("Tool added: {} ({})", tool.name(), tool.id());
        let line = lines::tool_added(tool.name(), tool.qr_code());
        self.transcript.push(line);
        tool
    }

    /// Replace the full tool sequence on behalf of a display collaborator.
    pub fn replace_tools(&mut self, tools: Vec<Tool>) {
        self.registry.replace_all(tools);
    }

    pub fn open_scanner(&mut self) {
        self.scanner_open = true;
    }

    pub fn close_scanner(&mut self) {
        self.scanner_open = false;
    }

    /// Append the answer (or error) of a staged Sage request.
    ///
    /// Completions may arrive in any order. Returns `false` and changes
    /// nothing if the request was never staged or was already completed.
    pub fn complete_sage(&mut self, completion: SageCompletion) -> bool {
        let id = completion.pending.id();
        if !self.outstanding.remove(&id) {
            warn!("Ignoring completion for unknown Sage request #{}", id);
            return false;
        }

        let line = match &completion.result {
            Ok(text) => lines::sage_response(text),
            Err(e) => lines::sage_error(&e.message),
        };
        self.transcript.extend([line.as_str(), SEPARATOR]);
        true
    }
}
