// src/config.rs

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;

use crate::grading::{GradeScale, Grader, GradingEngine, ParsePolicy, grader::MAX_PERCENTAGE_DECIMALS};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,
    pub cors_origins: Vec<String>,
    pub percentage_decimals: u32,
    pub grade_scale: GradeScale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
            percentage_decimals: 0,
            grade_scale: GradeScale::default(),
        }
    }
}

/// Reads `key` and parses it, falling back to `default` when unset or invalid.
fn parse_var<T: FromStr>(key: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Invalid {} '{}': {}; using default", key, raw, e);
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = parse_var("PORT", defaults.port);
        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);
        let log_dir = env::var("LOG_DIR").unwrap_or(defaults.log_dir);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        let percentage_decimals = parse_var("PERCENTAGE_DECIMALS", defaults.percentage_decimals)
            .min(MAX_PERCENTAGE_DECIMALS);
        let grade_scale = parse_var("GRADE_SCALE", defaults.grade_scale);

        Self {
            host,
            port,
            rust_log,
            log_dir,
            cors_origins,
            percentage_decimals,
            grade_scale,
        }
    }

    /// Builds the grading engine described by this configuration.
    pub fn grading_engine(&self) -> GradingEngine {
        GradingEngine::new(
            ParsePolicy::default(),
            Grader::new(self.grade_scale.clone(), self.percentage_decimals),
        )
    }
}
