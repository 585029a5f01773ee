//! Environment-derived runtime configuration.

/// Settings read once at startup.
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Directory under which per-user image folders live.
    pub user_images_base_path: String,
}

impl Config {
    /// Reads every setting from the process environment.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            user_images_base_path: std::env::var("USER_IMAGES_BASE_PATH")?,
        })
    }
}
