// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qf_core::{MappingResolver, MappingRow, Store};

use super::{open_store, print_json};
use crate::cli::{MappingCommand, OutputFormat};
use crate::display::format_mapping;
use crate::error::{Error, Result};

pub fn run(cmd: MappingCommand) -> Result<()> {
    let (store, _) = open_store()?;
    run_impl(&store, cmd)
}

/// Internal implementation that accepts a store for testing.
pub(crate) fn run_impl(store: &dyn Store, cmd: MappingCommand) -> Result<()> {
    let resolver = MappingResolver::new(store);
    match cmd {
        MappingCommand::List { output } => {
            let set = resolver.load()?;
            match output.output {
                OutputFormat::Json => print_json(set.as_slice()),
                OutputFormat::Text => {
                    if set.is_empty() {
                        println!("No mappings configured.");
                    }
                    for mapping in set.iter() {
                        println!("{}", format_mapping(mapping));
                    }
                    Ok(())
                }
            }
        }
        MappingCommand::Add {
            prefix,
            base_url,
            project,
        } => {
            let row = MappingRow::new(project.as_deref().unwrap_or(""), &prefix, &base_url);
            let set = resolver.load()?.with_added(row)?;
            resolver.save(&set)?;
            if let Some(added) = set.find(&prefix) {
                println!("Mapped {} to {}", added.prefix, added.base_url);
            }
            Ok(())
        }
        MappingCommand::Remove { prefix } => {
            let (set, removed) = resolver.load()?.without(&prefix);
            if !removed {
                return Err(Error::MappingNotFound(prefix.trim().to_uppercase()));
            }
            resolver.save(&set)?;
            println!("Removed mapping for {}", prefix.trim().to_uppercase());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
