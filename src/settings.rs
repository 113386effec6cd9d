use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub db_path: String,
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Settings come from the environment, with `.env` loaded first.
pub fn load() -> Result<Settings, config::ConfigError> {
    dotenv::dotenv().ok();
    config::Config::builder()
        .set_default("db_path", "trivia.db")?
        .set_default("host", "0.0.0.0")?
        .set_default("port", "8080")?
        .add_source(config::Environment::default())
        .build()?
        .try_deserialize()
}
