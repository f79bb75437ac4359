// ABOUTME: Immutable exercise catalog mapping selection ids to names and state machines
// ABOUTME: Separated from the mutable tracking session so switch semantics stay explicit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::collections::BTreeMap;
use trackg_core::errors::ExerciseError;

use super::kind::ExerciseKind;

/// One selectable exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Selection identifier ("1" to "6")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// State machine variant
    pub kind: ExerciseKind,
}

impl From<ExerciseKind> for CatalogEntry {
    fn from(kind: ExerciseKind) -> Self {
        Self {
            id: kind.catalog_id(),
            name: kind.display_name(),
            kind,
        }
    }
}

/// The fixed table of selectable exercises, stable for the process lifetime
#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseCatalog;

impl ExerciseCatalog {
    /// All entries in selection order
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry> {
        ExerciseKind::ALL.into_iter().map(CatalogEntry::from)
    }

    /// Number of selectable exercises
    #[must_use]
    pub const fn len(&self) -> usize {
        ExerciseKind::ALL.len()
    }

    /// Always false; the catalog is never empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Resolve a selection identifier
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::InvalidExerciseId` when `id` is not in the catalog
    pub fn lookup(&self, id: &str) -> Result<CatalogEntry, ExerciseError> {
        ExerciseKind::from_catalog_id(id).map(CatalogEntry::from)
    }

    /// Identifier to display name, the listing served to selection UIs
    #[must_use]
    pub fn names(&self) -> BTreeMap<&'static str, &'static str> {
        self.entries().map(|entry| (entry.id, entry.name)).collect()
    }
}
