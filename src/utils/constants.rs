use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref SHIFTS_API_URL: String =
        load_or_default(env::SHIFTS_API_URL_ENV_VAR, DEFAULT_SHIFTS_API_URL);
    pub static ref SHIFTS_API_KEY: Option<Secret<String>> = set_api_key();
}

fn load_env() {
    dotenv().ok();
}

fn set_api_key() -> Option<Secret<String>> {
    load_env();
    match std_env::var(env::SHIFTS_API_KEY_ENV_VAR) {
        Ok(key) if !key.is_empty() => Some(Secret::new(key)),
        _ => None,
    }
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const SHIFTS_API_URL_ENV_VAR: &str = "SHIFTS_API_URL";
    pub const SHIFTS_API_KEY_ENV_VAR: &str = "SHIFTS_API_KEY";
    pub const SHIFT_DATA_SOURCE_ENV_VAR: &str = "SHIFT_DATA_SOURCE";
}

pub const DEFAULT_SHIFTS_API_URL: &str = "https://api.example.com/shifts";

pub mod http {
    use std::time::Duration;

    pub const TIMEOUT: Duration = Duration::from_secs(10);
}

pub mod geo {
    use crate::domain::{PositionConfig, WatchConfig};
    use std::time::Duration;

    pub const POSITION_CONFIG: PositionConfig = PositionConfig {
        enable_high_accuracy: true,
        timeout: Duration::from_millis(15_000),
        maximum_age: Duration::from_millis(10_000),
    };

    pub const WATCH_CONFIG: WatchConfig = WatchConfig {
        distance_filter_meters: 50.0,
        min_interval: Duration::from_millis(5_000),
        fastest_interval: Duration::from_millis(2_000),
    };
}

/// Prompt copy shown by prompting platforms. Fixed strings, not
/// configurable at this layer.
pub mod permission_prompt {
    pub const TITLE: &str = "Доступ к геолокации";
    pub const MESSAGE: &str =
        "Приложению нужен доступ к геолокации для поиска смен";
    pub const BUTTON_NEUTRAL: &str = "Спросить позже";
    pub const BUTTON_NEGATIVE: &str = "Отмена";
    pub const BUTTON_POSITIVE: &str = "Разрешить";
}
