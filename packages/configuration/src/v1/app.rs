use serde::{Deserialize, Serialize};

/// General application settings.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct App {
    /// Name reported by the root endpoint.
    #[serde(default = "App::default_name")]
    pub name: String,

    /// Version reported by the root and health check endpoints.
    #[serde(default = "App::default_version")]
    pub version: String,

    /// Enables development-only operations such as seeding sample data.
    #[serde(default = "App::default_debug")]
    pub debug: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            version: Self::default_version(),
            debug: Self::default_debug(),
        }
    }
}

impl App {
    fn default_name() -> String {
        String::from("TripCompare API")
    }

    fn default_version() -> String {
        String::from("1.0.0")
    }

    fn default_debug() -> bool {
        true
    }
}
