//! In-memory movie store.
//!
//! The single source of truth for movie existence, identity, and field
//! values. Backed by a plain `Vec` in insertion order; all lookups are
//! linear scans, which is the intended scale for this service. The store
//! itself is synchronous and does no locking; exclusive access is the
//! caller's responsibility (the API layer wraps it in a lock).

use crate::error::CoreError;
use crate::movie::{CreateMovie, Movie, UpdateMovie};
use crate::types::MovieId;

/// Owned, in-memory movie collection.
///
/// Ids are assigned from a monotonic counter starting at 1 and are never
/// reused, so deleting and re-creating records cannot produce duplicate ids.
#[derive(Debug)]
pub struct MovieStore {
    movies: Vec<Movie>,
    next_id: MovieId,
}

impl MovieStore {
    /// Create an empty store. The first movie created will get id 1.
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            next_id: 1,
        }
    }

    /// All current movies, in insertion order.
    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by id.
    pub fn get(&self, id: MovieId) -> Result<&Movie, CoreError> {
        self.index_of(id).map(|index| &self.movies[index])
    }

    /// Create a new movie from `input`, assigning the next id.
    ///
    /// Appends to the end of the collection and returns the new record.
    /// Cannot fail: the DTO is already validated at the boundary.
    pub fn create(&mut self, input: CreateMovie) -> Movie {
        let movie = Movie {
            id: self.next_id,
            title: input.title,
            year: input.year,
            genres: input.genres,
        };
        self.next_id += 1;
        self.movies.push(movie.clone());
        movie
    }

    /// Remove the movie with the given id.
    ///
    /// Fails with the same `NotFound` as [`get`](Self::get) when the id does
    /// not exist.
    pub fn delete(&mut self, id: MovieId) -> Result<(), CoreError> {
        let index = self.index_of(id)?;
        self.movies.remove(index);
        Ok(())
    }

    /// Overlay the fields present in `update` onto the movie with the given
    /// id, replacing the record in place.
    ///
    /// Absent fields keep their current value and `id` is preserved. The
    /// record keeps its position in [`list`](Self::list) order. Fails with
    /// the same `NotFound` as [`get`](Self::get) when the id does not exist.
    pub fn update(&mut self, id: MovieId, update: UpdateMovie) -> Result<Movie, CoreError> {
        let index = self.index_of(id)?;
        let updated = self.movies[index].with_update(update);
        self.movies[index] = updated.clone();
        Ok(updated)
    }

    /// Position of the movie with the given id; the one place the
    /// missing-id error is constructed.
    fn index_of(&self, id: MovieId) -> Result<usize, CoreError> {
        self.movies
            .iter()
            .position(|movie| movie.id == id)
            .ok_or(CoreError::NotFound { id })
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
