//! Environment-backed settings for the demo binary.
//!
//! Everything is optional: with no environment at all the demo runs as a
//! signed-out client. Variables use the `LINKBOARD_` prefix, e.g.
//! `LINKBOARD_USERNAME=alice LINKBOARD_HOME_TOPIC=rust`.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    /// The signed-in user; absent means browse-only
    pub username: Option<String>,
    /// Pins the post box to one community instead of a free topic field
    pub home_topic: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("LINKBOARD"))
            .build()?
            .try_deserialize()
    }
}
