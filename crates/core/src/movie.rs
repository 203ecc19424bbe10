//! Movie entity and request DTOs.

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

/// A movie record as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub genres: Vec<String>,
}

/// DTO for creating a new movie.
///
/// `genres` may be omitted and defaults to empty. Unknown fields are
/// rejected at deserialization time, so the store never sees payloads with
/// fields outside this whitelist.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// DTO for updating an existing movie. All fields are optional.
///
/// Serves both full replacement (PUT) and partial merge (PATCH) call sites;
/// the distinction is the caller's contract, not enforced here.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genres: Option<Vec<String>>,
}

impl Movie {
    /// Produce a copy of this movie with the fields present in `update`
    /// overlaid on top.
    ///
    /// Fields absent from `update` keep their current value; `id` is always
    /// preserved.
    pub fn with_update(&self, update: UpdateMovie) -> Movie {
        Movie {
            id: self.id,
            title: update.title.unwrap_or_else(|| self.title.clone()),
            year: update.year.unwrap_or(self.year),
            genres: update.genres.unwrap_or_else(|| self.genres.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        Movie {
            id: 7,
            title: "Original".to_string(),
            year: 2020,
            genres: vec!["Drama".to_string()],
        }
    }

    // --- Field overlay ---

    #[test]
    fn with_update_overwrites_present_fields() {
        let updated = sample().with_update(UpdateMovie {
            title: Some("New Title".to_string()),
            year: Some(2024),
            genres: Some(vec!["Action".to_string(), "Sci-Fi".to_string()]),
        });

        assert_eq!(updated.title, "New Title");
        assert_eq!(updated.year, 2024);
        assert_eq!(
            updated.genres,
            vec!["Action".to_string(), "Sci-Fi".to_string()]
        );
    }

    #[test]
    fn with_update_keeps_absent_fields() {
        let updated = sample().with_update(UpdateMovie {
            title: Some("New Title".to_string()),
            year: None,
            genres: None,
        });

        assert_eq!(updated.title, "New Title");
        assert_eq!(updated.year, 2020);
        assert_eq!(updated.genres, vec!["Drama".to_string()]);
    }

    #[test]
    fn with_update_always_preserves_id() {
        let updated = sample().with_update(UpdateMovie {
            title: Some("Renamed".to_string()),
            year: Some(1999),
            genres: Some(Vec::new()),
        });

        assert_eq!(updated.id, 7);
    }

    #[test]
    fn with_update_of_nothing_is_identity() {
        let updated = sample().with_update(UpdateMovie {
            title: None,
            year: None,
            genres: None,
        });

        assert_eq!(updated, sample());
    }

    // --- DTO deserialization ---

    #[test]
    fn create_movie_defaults_genres_to_empty() {
        let input: CreateMovie =
            serde_json::from_str(r#"{"title": "No Genres", "year": 2023}"#).unwrap();

        assert_eq!(input.title, "No Genres");
        assert_eq!(input.year, 2023);
        assert!(input.genres.is_empty());
    }

    #[test]
    fn create_movie_rejects_unknown_fields() {
        let result: Result<CreateMovie, _> =
            serde_json::from_str(r#"{"title": "X", "year": 2023, "director": "Y"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn create_movie_rejects_missing_title() {
        let result: Result<CreateMovie, _> = serde_json::from_str(r#"{"year": 2023}"#);

        assert!(result.is_err());
    }

    #[test]
    fn create_movie_rejects_mistyped_year() {
        let result: Result<CreateMovie, _> =
            serde_json::from_str(r#"{"title": "X", "year": "not-a-number"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn update_movie_accepts_partial_payloads() {
        let input: UpdateMovie = serde_json::from_str(r#"{"year": 2024}"#).unwrap();

        assert_eq!(input.title, None);
        assert_eq!(input.year, Some(2024));
        assert_eq!(input.genres, None);
    }

    #[test]
    fn update_movie_rejects_unknown_fields() {
        let result: Result<UpdateMovie, _> = serde_json::from_str(r#"{"rating": 5}"#);

        assert!(result.is_err());
    }
}
