//! Operator input parsing.
//!
//! Turns human-entered text into typed values. Nothing is coerced
//! silently: a token that is not an integer is an error naming the token
//! and its position.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DiskSchedError, Result};
use crate::models::{SimulationRequest, Track};

/// Parses a single track number.
pub fn parse_track(text: &str) -> Result<Track> {
    let token = text.trim();
    token
        .parse::<Track>()
        .map_err(|_| DiskSchedError::invalid_input(format!("'{token}' is not a track number")))
}

/// Parses a whitespace-separated request list, e.g. `"98 183 37 122"`.
///
/// Commas are accepted as separators too. Empty input is an error.
pub fn parse_requests(text: &str) -> Result<Vec<Track>> {
    let tracks = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(pos, token)| {
            token.parse::<Track>().map_err(|_| {
                DiskSchedError::invalid_input(format!(
                    "token #{} ('{}') is not a track number",
                    pos + 1,
                    token
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if tracks.is_empty() {
        return Err(DiskSchedError::invalid_input("request list is empty"));
    }

    debug!(count = tracks.len(), "parsed request list");
    Ok(tracks)
}

/// Loads a [`SimulationRequest`] from a JSON file.
///
/// Missing fields take their defaults.
pub fn load_request(path: impl AsRef<Path>) -> Result<SimulationRequest> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let request: SimulationRequest = serde_json::from_str(&text)?;
    debug!(path = %path.display(), requests = request.requests.len(), "loaded request file");
    Ok(request)
}
