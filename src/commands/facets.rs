//! # Artists and Categories Commands
//!
//! Print the distinct artists or categories across the whole collection,
//! one per line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::Config, query::Facets};

/// Lists all distinct artists.
pub fn execute_artists() -> Result<()> {
    let facets = load_facets()?;
    print_values(&facets.artists);
    Ok(())
}

/// Lists all distinct categories.
pub fn execute_categories() -> Result<()> {
    let facets = load_facets()?;
    print_values(&facets.categories);
    Ok(())
}

fn load_facets() -> Result<Facets> {
    let config = Config::load()?;
    let store = config.open_store();
    Ok(Facets::from_entries(store.entries()))
}

fn print_values(values: &[String]) {
    if values.is_empty() {
        println!("{}", "No tabs found.".dimmed());
        return;
    }
    for value in values {
        println!("{value}");
    }
}
