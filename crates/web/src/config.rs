use anyhow::{Context, Result, ensure};
use serve_stats::models::{DEFAULT_SET_POINT, SET_POINT_RANGE};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_keys: String,
    pub default_set_point: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            default_set_point: match std::env::var("DEFAULT_SET_POINT") {
                Ok(value) => parse_set_point(&value).context("Invalid DEFAULT_SET_POINT")?,
                Err(_) => DEFAULT_SET_POINT,
            },
        })
    }
}

fn parse_set_point(value: &str) -> Result<u32> {
    let set_point: u32 = value.trim().parse().context("Set point must be a number")?;
    ensure!(
        SET_POINT_RANGE.contains(&set_point),
        "Set point must be between {} and {}, got {}",
        SET_POINT_RANGE.start(),
        SET_POINT_RANGE.end(),
        set_point
    );

    Ok(set_point)
}
