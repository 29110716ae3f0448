use crate::api::AniListClient;
use crate::error::AppError;
use crate::query::{build_query, QueryOptions};
use crate::rename::{build_candidate_name, rename_folder};
use crate::session::{
    spawn_input_reader, spawn_search, AppEvent, FolderOutcome, Session, WalkState,
};
use crate::ui::Ui;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tracing::{debug, info};

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 1-based candidate number
    Pick(usize),
    Skip,
    Retry,
    /// `Some` sets the override query, `None` clears it
    Override(Option<String>),
    ToggleBrackets,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if line.is_empty() {
        return Command::Empty;
    }

    if let Ok(number) = line.parse::<usize>() {
        if number >= 1 {
            return Command::Pick(number);
        }
        return Command::Unknown(line.to_string());
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "s" | "skip" => Command::Skip,
        "r" | "retry" => Command::Retry,
        "o" | "override" => {
            if rest.is_empty() {
                Command::Override(None)
            } else {
                Command::Override(Some(rest.to_string()))
            }
        }
        "b" | "brackets" => Command::ToggleBrackets,
        "h" | "?" | "help" => Command::Help,
        "q" | "quit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive walk over all folders.
///
/// Everything runs on this thread; the stdin reader and the per-folder search
/// workers only post [`AppEvent`]s over the channel.
pub struct App {
    base_dir: PathBuf,
    session: Session,
    client: Arc<AniListClient>,
    options: QueryOptions,
    dry_run: bool,
    ui: Ui,
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl App {
    pub fn new(
        base_dir: PathBuf,
        session: Session,
        client: Arc<AniListClient>,
        options: QueryOptions,
        dry_run: bool,
        ui: Ui,
    ) -> Self {
        let (tx, rx) = channel();

        Self {
            base_dir,
            session,
            client,
            options,
            dry_run,
            ui,
            tx,
            rx,
        }
    }

    pub fn run(mut self) -> Result<Vec<FolderOutcome>, AppError> {
        self.ui.dim("Type 'h' for the list of commands.");
        spawn_input_reader(self.tx.clone());
        self.start_search();

        while !self.session.is_done() {
            let event = self
                .rx
                .recv()
                .map_err(|_| AppError::Other("Event channel closed unexpectedly".to_string()))?;

            match event {
                AppEvent::SearchDone {
                    seq,
                    folder_index,
                    candidates,
                } => {
                    if self.session.deliver(seq, candidates) {
                        self.show_candidates();
                    } else {
                        debug!(seq, folder_index, "Ignoring result for a superseded search");
                    }
                }
                AppEvent::Input(line) => {
                    if self.handle_input(&line) == Flow::Quit {
                        info!("Session ended by user");
                        break;
                    }
                }
                AppEvent::InputClosed => {
                    self.ui.warning("Input closed, ending session.");
                    break;
                }
            }
        }

        Ok(self.session.report().to_vec())
    }

    /// Launch a search for the current folder. No-op once the walk is done.
    fn start_search(&mut self) {
        let ticket = match self.session.begin_search() {
            Some(ticket) => ticket,
            None => return,
        };

        let (current, total) = self.session.position();
        self.ui.folder_banner(current, total, &ticket.folder_name);

        let query = build_query(&ticket.folder_name, &self.options);
        debug!(folder = %ticket.folder_name, query = %query, "Launching search");
        self.ui.searching(&query);

        spawn_search(self.client.clone(), ticket, query, self.tx.clone());
    }

    fn show_candidates(&mut self) {
        if self.session.candidates().is_empty() {
            self.ui.info("No candidates found.");
            self.ui
                .dim("'s' skips, 'o <text>' searches with an override, 'r' retries.");
        } else {
            self.ui.info("Select the matching anime:");
            let labels: Vec<String> = self
                .session
                .candidates()
                .iter()
                .map(|c| c.display_label())
                .collect();
            for (i, label) in labels.iter().enumerate() {
                self.ui.candidate_row(i + 1, label);
            }
        }
        self.ui.prompt();
    }

    fn handle_input(&mut self, line: &str) -> Flow {
        let command = parse_command(line);

        match self.session.state() {
            WalkState::Searching => self.handle_while_searching(command),
            WalkState::Selecting => self.handle_while_selecting(command),
            WalkState::Done => Flow::Continue,
        }
    }

    /// Only skip and quit act before the current folder's search resolves;
    /// a late result for a skipped folder is discarded by the session.
    fn handle_while_searching(&mut self, command: Command) -> Flow {
        match command {
            Command::Skip => {
                self.skip_current();
                Flow::Continue
            }
            Command::Quit => Flow::Quit,
            Command::Empty => Flow::Continue,
            _ => {
                self.ui
                    .dim("Still searching; 's' skips this folder, 'q' quits.");
                Flow::Continue
            }
        }
    }

    fn handle_while_selecting(&mut self, command: Command) -> Flow {
        match command {
            Command::Pick(number) => {
                self.pick(number - 1);
                Flow::Continue
            }
            Command::Skip => {
                self.skip_current();
                Flow::Continue
            }
            Command::Retry => {
                self.start_search();
                Flow::Continue
            }
            Command::Override(query) => {
                match &query {
                    Some(q) => self.ui.info(&format!("Override set to '{}'.", q)),
                    None => self.ui.info("Override cleared."),
                }
                self.options.override_query = query;
                self.start_search();
                Flow::Continue
            }
            Command::ToggleBrackets => {
                self.options.strip_brackets = !self.options.strip_brackets;
                if self.options.strip_brackets {
                    self.ui.info("Bracketed text is now ignored in queries.");
                } else {
                    self.ui.info("Queries now use the full folder name.");
                }
                self.start_search();
                Flow::Continue
            }
            Command::Help => {
                self.ui.help();
                self.ui.prompt();
                Flow::Continue
            }
            Command::Quit => Flow::Quit,
            Command::Empty => {
                self.ui.prompt();
                Flow::Continue
            }
            Command::Unknown(input) => {
                self.ui
                    .warning(&format!("Unrecognized command '{}'. Type 'h' for help.", input));
                self.ui.prompt();
                Flow::Continue
            }
        }
    }

    fn skip_current(&mut self) {
        if let Some(folder) = self.session.current() {
            info!(folder = %folder.name, "Skipping folder");
            self.ui.dim("Skipped.");
        }
        self.session.skip();
        self.start_search();
    }

    /// Apply the user's pick: build the new name and rename. A failure of any
    /// step keeps the current folder selectable and re-prompts.
    fn pick(&mut self, index: usize) {
        let candidate = match self.session.select(index) {
            Ok(candidate) => candidate,
            Err(e) => {
                self.ui.error(&e.to_string());
                self.ui.prompt();
                return;
            }
        };

        let new_name = match build_candidate_name(&candidate) {
            Some(name) => name,
            None => {
                self.ui
                    .error("That candidate has no usable title; pick another or skip.");
                self.ui.prompt();
                return;
            }
        };

        let source_path = match self.session.current() {
            Some(folder) => folder.path.clone(),
            None => return,
        };

        if self.dry_run {
            self.ui
                .success(&format!("Would rename to '{}' (dry run).", new_name));
            self.session.mark_renamed(new_name);
            self.start_search();
            return;
        }

        match rename_folder(&self.base_dir, &source_path, &new_name) {
            Ok(_) => {
                self.ui.success(&format!("Renamed to '{}'.", new_name));
                self.session.mark_renamed(new_name);
                self.start_search();
            }
            Err(e) => {
                self.ui.error(&e.to_string());
                self.ui.dim("Pick a different candidate, or 's' to skip.");
                self.ui.prompt();
            }
        }
    }
}
