use serde::Deserialize;

/// Route request body
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub start: String,
    /// Room identifier, or `emergency exit` for the nearest exit
    pub end: String,
}

/// Nearest-exit request body
#[derive(Debug, Deserialize)]
pub struct ExitRequest {
    pub start: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoomsQuery {
    pub floor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    pub floor: Option<String>,
}
