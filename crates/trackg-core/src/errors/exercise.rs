// ABOUTME: Exercise selection error types for the catalog and tracking session
// ABOUTME: Provides structured errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use crate::constants::catalog;

/// Errors raised when selecting or resolving an exercise
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExerciseError {
    /// The identifier is not part of the fixed exercise catalog
    #[error(
        "Unknown exercise id '{id}'. Valid ids: {first}-{last}",
        first = catalog::FIRST_ID,
        last = catalog::LAST_ID
    )]
    InvalidExerciseId {
        /// Identifier that failed to resolve
        id: String,
    },
}

impl ExerciseError {
    /// Create an "invalid exercise id" error
    #[must_use]
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidExerciseId { id: id.into() }
    }
}
