use config::{Config, ConfigError};
use once_cell::sync::Lazy;
use rocket::serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct DbConfig {
    pub location: String,
}

/// page sizes used by both the public and the admin listing pages
#[derive(Deserialize, Clone)]
pub struct PaginationConfig {
    /// used when a request doesn't pass `pageSize`
    #[serde(rename = "defaultpagesize")]
    pub default_page_size: u32,
    /// requests asking for more than this are clamped down to it
    #[serde(rename = "maxpagesize")]
    pub max_page_size: u32,
}

#[derive(Deserialize, Clone)]
pub struct LoggingConfig {
    /// one of `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone)]
pub struct ReliefBoardConfig {
    pub database: DbConfig,
    pub pagination: PaginationConfig,
    pub logging: LoggingConfig,
}

/// Parses the config file located at ./ReliefBoard.toml, if it exists.
/// If this fails to parse the file, the application will panic
pub fn parse_config() -> ReliefBoardConfig {
    let builder = Config::builder()
        .add_source(config::File::with_name("./ReliefBoard.toml"))
        .build();
    let settings = match builder {
        Ok(settings) => settings,
        // some errors are fine, such as not found
        Err(ConfigError::Foreign(e)) if e.to_string().contains("not found") => {
            log::warn!("No config file found. Continuing startup...");
            return RB_CONFIG_DEFAULT.clone();
        }
        Err(e) => {
            log::error!("Failed to parse config file. Exception is {e}");
            panic!("Failed to parse config file. Exception is {e}");
        }
    };
    settings.try_deserialize().unwrap_or_else(|e| {
        log::warn!("Config file is missing values ({e}), falling back to defaults");
        RB_CONFIG_DEFAULT.clone()
    })
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static RELIEF_BOARD_CONFIG: Lazy<ReliefBoardConfig> = Lazy::new(parse_config);
static RB_CONFIG_DEFAULT: Lazy<ReliefBoardConfig> = Lazy::new(|| ReliefBoardConfig {
    database: DbConfig {
        location: "./db.sqlite".to_string(),
    },
    pagination: PaginationConfig {
        default_page_size: 10,
        max_page_size: 100,
    },
    logging: LoggingConfig {
        level: "info".to_string(),
    },
});
