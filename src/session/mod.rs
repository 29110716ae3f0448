mod events;
mod state;

pub use events::{spawn_input_reader, spawn_search, AppEvent};
pub use state::{FolderAction, FolderOutcome, SearchTicket, Session, SessionError, WalkState};
