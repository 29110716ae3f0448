use crate::api::Candidate;
use crate::scanner::Folder;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No candidate selected for '{folder}'")]
    NoCandidate { folder: String },
}

/// Where the walk currently stands for the folder under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// A candidate search is pending or in flight
    Searching,
    /// Candidates delivered; waiting for the user to pick or skip
    Selecting,
    /// Every folder has been visited
    Done,
}

/// What happened to a folder once the walk moved past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderAction {
    Renamed(String),
    Skipped,
}

#[derive(Debug, Clone)]
pub struct FolderOutcome {
    pub name: String,
    pub action: FolderAction,
}

/// Identity of one launched search. The sequence number is what protects the
/// session from stale worker results: a late result for a superseded search
/// carries an old `seq` and is discarded.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    pub seq: u64,
    pub folder_index: usize,
    pub folder_name: String,
}

/// The folder walk: visits every enumerated folder exactly once, in listing
/// order, holding per-folder candidates until the user picks or skips.
///
/// All mutation happens on the interactive thread; workers only hand results
/// back through [`deliver`](Session::deliver).
pub struct Session {
    folders: Vec<Folder>,
    index: usize,
    state: WalkState,
    candidates: Vec<Candidate>,
    inflight: Option<u64>,
    next_seq: u64,
    selections: HashMap<String, Option<usize>>,
    outcomes: Vec<FolderOutcome>,
}

impl Session {
    pub fn new(folders: Vec<Folder>) -> Self {
        let state = if folders.is_empty() {
            WalkState::Done
        } else {
            WalkState::Searching
        };

        Self {
            folders,
            index: 0,
            state,
            candidates: Vec::new(),
            inflight: None,
            next_seq: 0,
            selections: HashMap::new(),
            outcomes: Vec::new(),
        }
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == WalkState::Done
    }

    /// The folder currently under consideration, if any.
    pub fn current(&self) -> Option<&Folder> {
        if self.is_done() {
            None
        } else {
            self.folders.get(self.index)
        }
    }

    /// 1-based position and total, for display.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.folders.len())
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Issue a ticket for a new search of the current folder and enter
    /// `Searching`. Any previously in-flight search is superseded.
    ///
    /// Returns `None` when the walk is already done.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        let folder = self.current()?;
        let ticket = SearchTicket {
            seq: self.next_seq,
            folder_index: self.index,
            folder_name: folder.name.clone(),
        };

        self.next_seq += 1;
        self.inflight = Some(ticket.seq);
        self.candidates.clear();
        self.state = WalkState::Searching;

        Some(ticket)
    }

    /// Apply a worker result. Returns `false` (and changes nothing) when the
    /// result does not belong to the search currently in flight.
    pub fn deliver(&mut self, seq: u64, candidates: Vec<Candidate>) -> bool {
        if self.state != WalkState::Searching || self.inflight != Some(seq) {
            debug!(seq, "Discarding stale search result");
            return false;
        }

        self.candidates = candidates;
        self.inflight = None;
        self.state = WalkState::Selecting;
        true
    }

    /// Record the user's pick and return the chosen candidate.
    ///
    /// `pick` is a zero-based index into [`candidates`](Session::candidates).
    pub fn select(&mut self, pick: usize) -> Result<Candidate, SessionError> {
        let folder_name = match self.current() {
            Some(f) => f.name.clone(),
            None => {
                return Err(SessionError::NoCandidate {
                    folder: String::new(),
                })
            }
        };

        if self.state != WalkState::Selecting || pick >= self.candidates.len() {
            return Err(SessionError::NoCandidate {
                folder: folder_name,
            });
        }

        self.selections.insert(folder_name, Some(pick));
        Ok(self.candidates[pick].clone())
    }

    /// The rename for the current folder succeeded; move on.
    pub fn mark_renamed(&mut self, new_name: String) {
        let name = match self.current() {
            Some(folder) => folder.name.clone(),
            None => return,
        };

        self.outcomes.push(FolderOutcome {
            name,
            action: FolderAction::Renamed(new_name),
        });
        self.advance();
    }

    /// Leave the current folder untouched and move on.
    pub fn skip(&mut self) {
        let name = match self.current() {
            Some(folder) => folder.name.clone(),
            None => return,
        };

        self.selections.insert(name.clone(), None);
        self.outcomes.push(FolderOutcome {
            name,
            action: FolderAction::Skipped,
        });
        self.advance();
    }

    fn advance(&mut self) {
        self.index += 1;
        self.candidates.clear();
        self.inflight = None;
        self.state = if self.index >= self.folders.len() {
            WalkState::Done
        } else {
            WalkState::Searching
        };
    }

    /// Recorded selection for a folder: `Some(None)` means skipped,
    /// `Some(Some(i))` means candidate `i` was chosen.
    #[allow(dead_code)]
    pub fn selection_for(&self, folder_name: &str) -> Option<Option<usize>> {
        self.selections.get(folder_name).copied()
    }

    /// Outcomes accumulated so far, in walk order.
    pub fn report(&self) -> &[FolderOutcome] {
        &self.outcomes
    }
}
