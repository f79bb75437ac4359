// ABOUTME: Catalog listing command for trackg-cli
// ABOUTME: Prints the six supported exercises as a table or an id to name JSON object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use trackg::errors::AppResult;
use trackg::exercises::ExerciseCatalog;

use crate::helpers::display::display_catalog;

/// List the exercise catalog
pub fn list(json: bool) -> AppResult<()> {
    let catalog = ExerciseCatalog;
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.names())?);
    } else {
        display_catalog(catalog.entries());
    }
    Ok(())
}
