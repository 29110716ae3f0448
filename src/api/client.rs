use super::types::{ApiConfig, ApiError, Candidate, SearchResponse};
use reqwest::blocking::Client;
use std::cmp::Reverse;
use std::time::Duration;
use tracing::{debug, trace};

// Same query the service documents for anime title search; only the first
// page is requested, no authentication.
const SEARCH_QUERY: &str = "\
query ($search: String, $perPage: Int) {
  Page(perPage: $perPage) {
    media(search: $search, type: ANIME) {
      id
      title {
        romaji
        english
      }
      startDate {
        year
      }
    }
  }
}";

/// Blocking AniList GraphQL search client.
pub struct AniListClient {
    client: Client,
    config: ApiConfig,
}

impl AniListClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Run one search request and return the ranked candidates.
    ///
    /// Ranking sorts by release year descending (missing year last) keeping
    /// the service order for ties, then keeps the first `max_candidates`.
    pub fn search(&self, query: &str) -> Result<Vec<Candidate>, ApiError> {
        debug!(query = %query, "Searching AniList");

        let body = serde_json::json!({
            "query": SEARCH_QUERY,
            "variables": {
                "search": query,
                "perPage": self.config.page_size,
            },
        });

        let response = self.client.post(&self.config.endpoint).json(&body).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let parsed: SearchResponse = response
            .json()
            .map_err(|e| ApiError::ParseError(e.to_string()))?;

        let media = parsed
            .data
            .and_then(|d| d.page)
            .map(|p| p.media)
            .unwrap_or_default();

        trace!(count = media.len(), "Search returned media entries");

        let candidates = media.into_iter().map(Candidate::from).collect();
        Ok(rank_candidates(candidates, self.config.max_candidates))
    }
}

/// Sort by year descending (missing year as 0, so it sorts last) and truncate.
/// The sort is stable: equal years keep the order the service returned.
pub fn rank_candidates(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_by_key(|c| Reverse(c.year.unwrap_or(0)));
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u64, year: Option<u16>) -> Candidate {
        Candidate {
            id,
            title_english: Some(format!("Show {}", id)),
            title_romaji: None,
            year,
        }
    }

    #[test]
    fn test_rank_sorts_year_descending() {
        let ranked = rank_candidates(
            vec![
                candidate(1, Some(1998)),
                candidate(2, Some(2013)),
                candidate(3, Some(2006)),
            ],
            5,
        );

        let years: Vec<Option<u16>> = ranked.iter().map(|c| c.year).collect();
        assert_eq!(years, [Some(2013), Some(2006), Some(1998)]);
    }

    #[test]
    fn test_rank_missing_year_sorts_last() {
        let ranked = rank_candidates(
            vec![candidate(1, None), candidate(2, Some(1980)), candidate(3, None)],
            5,
        );

        assert_eq!(ranked[0].id, 2);
        assert_eq!(ranked[1].id, 1);
        assert_eq!(ranked[2].id, 3);
    }

    #[test]
    fn test_rank_is_stable_for_equal_years() {
        let ranked = rank_candidates(
            vec![
                candidate(10, Some(2020)),
                candidate(20, Some(2020)),
                candidate(30, Some(2020)),
            ],
            5,
        );

        let ids: Vec<u64> = ranked.iter().map(|c| c.id).collect();
        assert_eq!(ids, [10, 20, 30]);
    }

    #[test]
    fn test_rank_truncates_to_limit() {
        let many: Vec<Candidate> = (0..10).map(|i| candidate(i, Some(2000 + i as u16))).collect();
        let ranked = rank_candidates(many, 5);

        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].year, Some(2009));
    }

    #[test]
    fn test_rank_empty_input() {
        let ranked = rank_candidates(Vec::new(), 5);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "data": {
                "Page": {
                    "media": [
                        {
                            "id": 16498,
                            "title": {"romaji": "Shingeki no Kyojin", "english": "Attack on Titan"},
                            "startDate": {"year": 2013}
                        },
                        {
                            "id": 101,
                            "title": {"romaji": "Example", "english": null},
                            "startDate": {"year": null}
                        }
                    ]
                }
            }
        }"#;

        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        let media = parsed.data.unwrap().page.unwrap().media;

        assert_eq!(media.len(), 2);
        assert_eq!(media[0].id, 16498);

        let c: Candidate = media.into_iter().next().unwrap().into();
        assert_eq!(c.title(), Some("Attack on Titan"));
        assert_eq!(c.year, Some(2013));
    }

    #[test]
    fn test_parse_search_response_missing_page() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(parsed.data.is_none());
    }

    #[test]
    fn test_client_creation() {
        let client = AniListClient::new(ApiConfig::default());
        assert!(client.is_ok());
    }
}
