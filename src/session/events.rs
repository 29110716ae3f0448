use super::state::SearchTicket;
use crate::api::{AniListClient, Candidate};
use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Everything the interactive loop reacts to arrives as one of these,
/// posted over a channel. Workers never touch session state directly.
#[derive(Debug)]
pub enum AppEvent {
    /// A line the user typed
    Input(String),
    /// Stdin reached end of file
    InputClosed,
    /// A search worker finished; `seq` identifies which search this was
    SearchDone {
        seq: u64,
        folder_index: usize,
        candidates: Vec<Candidate>,
    },
}

/// Run one candidate search on a worker thread.
///
/// Any search failure is downgraded to an empty candidate list after logging;
/// the walk never aborts because a lookup failed.
pub fn spawn_search(
    client: Arc<AniListClient>,
    ticket: SearchTicket,
    query: String,
    tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        let candidates = match client.search(&query) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(query = %query, error = %e, "Search failed, treating as no results");
                Vec::new()
            }
        };

        debug!(
            seq = ticket.seq,
            folder = %ticket.folder_name,
            count = candidates.len(),
            "Search finished"
        );

        // Receiver may be gone if the session ended early
        let _ = tx.send(AppEvent::SearchDone {
            seq: ticket.seq,
            folder_index: ticket.folder_index,
            candidates,
        });
    });
}

/// Forward stdin lines to the interactive loop, one event per line.
pub fn spawn_input_reader(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read input");
                    break;
                }
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}
