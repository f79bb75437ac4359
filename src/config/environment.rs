// ABOUTME: Environment configuration for tracking sessions and deployment mode
// ABOUTME: Parses TRACKG_* variables into a typed TrackerConfig with explicit defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Configuration is read from environment variables only. Every value has a
//! default so an empty environment yields a working tracker.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;
use trackg_core::constants::{catalog, env_config};
use trackg_core::errors::{AppError, AppResult};

use crate::exercises::ExerciseKind;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Settings used to construct tracking sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Exercise a new session starts with
    pub default_exercise: ExerciseKind,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_exercise: ExerciseKind::BicepCurl,
            environment: Environment::Development,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` when `TRACKG_DEFAULT_EXERCISE` is
    /// neither a catalog id nor an exercise slug
    pub fn from_env() -> AppResult<Self> {
        let exercise_value = env_var_or(env_config::DEFAULT_EXERCISE, catalog::DEFAULT_EXERCISE_ID);
        let default_exercise = exercise_value.parse::<ExerciseKind>().map_err(|err| {
            AppError::config_invalid(format!(
                "Invalid {} value '{exercise_value}'",
                env_config::DEFAULT_EXERCISE
            ))
            .with_source(err)
        })?;

        let environment = Environment::from_str_or_default(&env_var_or(
            env_config::ENVIRONMENT,
            "development",
        ));

        let config = Self {
            default_exercise,
            environment,
        };

        info!(
            default_exercise = config.default_exercise.slug(),
            environment = %config.environment,
            "Tracker configuration loaded"
        );

        Ok(config)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
