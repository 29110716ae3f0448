pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod query;
pub mod rename;
pub mod scanner;
pub mod session;
pub mod ui;

pub use api::{rank_candidates, AniListClient, ApiConfig, ApiError, Candidate};
pub use error::{AppError, ExitCode};
pub use query::{build_query, QueryOptions};
pub use rename::{build_candidate_name, rename_folder, sanitize_name, RenameError};
pub use scanner::{list_folders, Folder, ScannerError};
pub use session::{FolderAction, FolderOutcome, Session, SessionError, WalkState};
