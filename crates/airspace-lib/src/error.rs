use thiserror::Error;

/// Convenient result alias for the airspace library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a point name could not be found in the loaded airspace.
    #[error("unknown point name: {name}{}", format_suggestions(.suggestions))]
    UnknownPoint {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two points.
    #[error("no route found between {origin} and {destination}")]
    RouteNotFound { origin: String, destination: String },

    /// Raised when a query needs at least one loaded navigation point.
    #[error("airspace contains no navigation points")]
    EmptyAirspace,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
