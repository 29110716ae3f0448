use serde::Deserialize;
use thiserror::Error;

/// One search result from AniList: a possible identification for a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: u64,
    pub title_english: Option<String>,
    pub title_romaji: Option<String>,
    pub year: Option<u16>,
}

impl Candidate {
    /// Preferred display title: English first, romaji as fallback.
    pub fn title(&self) -> Option<&str> {
        self.title_english
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.title_romaji.as_deref().filter(|t| !t.is_empty()))
    }

    /// Title with a ` (Year)` suffix when the release year is known.
    pub fn display_label(&self) -> String {
        let title = self.title().unwrap_or("<untitled>");
        match self.year {
            Some(year) => format!("{} ({})", title, year),
            None => title.to_string(),
        }
    }
}

/// Search client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Results requested per search (first page only)
    pub page_size: u32,
    /// Candidates kept after ranking
    pub max_candidates: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://graphql.anilist.co".to_string(),
            timeout_secs: 30,
            page_size: 10,
            max_candidates: 5,
        }
    }
}

/// Errors that can occur when querying the metadata search service.
///
/// These never abort the walk: the search worker downgrades them to an empty
/// candidate list after logging.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Search service returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::NetworkError(err.to_string())
        }
    }
}

// Wire format of the AniList GraphQL search response.

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub data: Option<SearchData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchData {
    #[serde(rename = "Page")]
    pub page: Option<MediaPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaPage {
    #[serde(default)]
    pub media: Vec<Media>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Media {
    pub id: u64,
    pub title: MediaTitle,
    #[serde(rename = "startDate")]
    pub start_date: Option<StartDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartDate {
    pub year: Option<u16>,
}

impl From<Media> for Candidate {
    fn from(media: Media) -> Self {
        Candidate {
            id: media.id,
            title_english: media.title.english,
            title_romaji: media.title.romaji,
            year: media.start_date.and_then(|d| d.year),
        }
    }
}
