use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<i32>,
    pub genres: Vec<String>,
    pub version: i32,
}

impl Movie {
    /// Placeholder record returned until a movie store is wired in
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            title: "Casablanca".to_string(),
            year: None,
            runtime: Some(102),
            genres: vec![
                "drama".to_string(),
                "romance".to_string(),
                "war".to_string(),
            ],
            version: 1,
        }
    }
}

/// Input accepted when a client submits a new movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub year: Option<i32>,
    pub runtime: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
}
