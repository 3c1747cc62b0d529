use serde::{Deserialize, Serialize};

/// A single movie as returned by the search endpoint.
///
/// This is a snapshot of server state and is never mutated locally. Every
/// field is a string on the wire (the upstream data source reports ratings,
/// runtimes and dates as display text), and all of them are optional in
/// practice, so each defaults to empty rather than failing the whole
/// response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub imdb_rating: String,
    #[serde(default)]
    pub awards: String,
    #[serde(default)]
    pub released: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub actors: String,
}
