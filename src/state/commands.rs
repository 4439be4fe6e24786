//! Lifecycle and state command handlers

use futures::stream::{self, StreamExt};
use log::{debug, error, warn};
use serde_json::{Map, Value};

use crate::admin::{AdminClient, EntityState, PlanAction};
use crate::cli::{
    CreateArgs, DeleteArgs, ImportArgs, RefreshArgs, StateAction, StateAddressArgs, UpdateArgs,
};
use crate::config::api;
use crate::error::{AdminError, Result};
use crate::output::{output_state_entries, output_state_entry};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::Cli;

use super::models::StateFile;
use super::store::StateStore;

/// Parse `key=value` assignments into an attribute map
pub fn parse_assignments(assignments: &[String]) -> Result<Map<String, Value>> {
    assignments
        .iter()
        .map(|assignment| {
            let (key, value) = assignment.split_once('=').ok_or_else(|| {
                AdminError::Validation(format!(
                    "invalid assignment '{}', expected KEY=VALUE",
                    assignment
                ))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(AdminError::Validation(format!(
                    "invalid assignment '{}', attribute name is empty",
                    assignment
                )));
            }
            Ok((key.to_string(), Value::String(value.to_string())))
        })
        .collect()
}

/// Configurable attributes of an entry, overridden by new assignments
fn config_from_prior(prior: &EntityState, overrides: Map<String, Value>) -> Map<String, Value> {
    let mut config: Map<String, Value> = prior
        .resource_type
        .schema()
        .fields
        .iter()
        .filter(|f| f.is_configurable())
        .filter_map(|f| {
            prior
                .attributes
                .get(f.name)
                .filter(|v| !v.is_null())
                .map(|v| (f.name.to_string(), v.clone()))
        })
        .collect();
    config.extend(overrides);
    config
}

fn lookup<'s>(state: &'s StateFile, address: &str) -> Result<&'s EntityState> {
    state.resources.get(address).ok_or_else(|| {
        AdminError::State(format!("No entity recorded at address '{}'", address))
    })
}

fn ensure_free(state: &StateFile, address: &str) -> Result<()> {
    match state.resources.get(address) {
        Some(existing) => Err(AdminError::State(format!(
            "Address '{}' is already used by {} '{}'",
            address, existing.resource_type, existing.id
        ))),
        None => Ok(()),
    }
}

/// Run the create command
pub async fn run_create_command(
    client: &AdminClient,
    cli: &Cli,
    args: &CreateArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::new(cli.state.clone());
    let mut state = store.load()?;
    ensure_free(&state, &args.address)?;

    let config = parse_assignments(&args.set)?;
    debug!("Creating {} at '{}' with {:?}", args.resource_type, args.address, config);

    let spinner = create_spinner(
        &format!("Creating {} '{}'...", args.resource_type, args.address),
        cli.batch,
    );
    let result = args.resource_type.create(client, &config).await;
    finish_spinner(spinner);
    let entry = result?;

    println!(
        "✓ Created {} '{}' ({})",
        entry.resource_type, args.address, entry.id
    );
    state.resources.insert(args.address.clone(), entry);
    store.save(&state)?;
    Ok(())
}

/// Run the update command
pub async fn run_update_command(
    client: &AdminClient,
    cli: &Cli,
    args: &UpdateArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::new(cli.state.clone());
    let mut state = store.load()?;
    let prior = lookup(&state, &args.address)?.clone();
    let resource_type = prior.resource_type;

    let config = config_from_prior(&prior, parse_assignments(&args.set)?);
    let action = resource_type.plan(&prior, &config)?;
    debug!("Planned {} for '{}'", action, args.address);

    match action {
        PlanAction::NoOp => {
            println!("No changes for {} '{}'", resource_type, args.address);
        }
        PlanAction::Update => {
            let spinner = create_spinner(
                &format!("Updating {} '{}'...", resource_type, args.address),
                cli.batch,
            );
            let result = resource_type.update(client, &prior, &config).await;
            finish_spinner(spinner);
            let entry = result?;

            println!("✓ Updated {} '{}' ({})", resource_type, args.address, entry.id);
            state.resources.insert(args.address.clone(), entry);
            store.save(&state)?;
        }
        PlanAction::Replace => {
            let prompt = format!(
                "{} '{}' ({}) must be replaced: it will be deleted and created again. Continue?",
                resource_type, args.address, prior.id
            );
            if !confirm_action(&prompt, args.yes || cli.batch)? {
                println!("Aborted");
                return Ok(());
            }

            let spinner = create_spinner(
                &format!("Replacing {} '{}'...", resource_type, args.address),
                cli.batch,
            );
            let deleted = resource_type.delete(client, &prior).await;
            if let Err(e) = deleted {
                finish_spinner(spinner);
                return Err(e.into());
            }
            state.resources.remove(&args.address);
            store.save(&state)?;

            let created = resource_type.create(client, &config).await;
            finish_spinner(spinner);
            let entry = created.map_err(|e| {
                AdminError::State(format!(
                    "{} '{}' was deleted but could not be created again: {}",
                    resource_type, args.address, e
                ))
            })?;

            println!(
                "✓ Replaced {} '{}' ({} -> {})",
                resource_type, args.address, prior.id, entry.id
            );
            state.resources.insert(args.address.clone(), entry);
            store.save(&state)?;
        }
    }

    Ok(())
}

/// Run the refresh command
pub async fn run_refresh_command(
    client: &AdminClient,
    cli: &Cli,
    args: &RefreshArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::new(cli.state.clone());
    let mut state = store.load()?;

    let targets: Vec<(String, EntityState)> = match &args.address {
        Some(address) => vec![(address.clone(), lookup(&state, address)?.clone())],
        None => state
            .resources
            .iter()
            .map(|(address, entry)| (address.clone(), entry.clone()))
            .collect(),
    };

    if targets.is_empty() {
        println!("No entities in state");
        return Ok(());
    }

    let total = targets.len();
    let spinner = create_spinner(&format!("Refreshing {} entities...", total), cli.batch);

    let results: Vec<(String, Result<Option<EntityState>>)> = stream::iter(targets)
        .map(|(address, entry)| async move {
            let result = entry.resource_type.read(client, &entry).await;
            (address, result)
        })
        .buffer_unordered(api::MAX_CONCURRENT_REFRESH)
        .collect()
        .await;

    finish_spinner(spinner);

    let mut failures = 0;
    for (address, result) in results {
        match result {
            Ok(Some(entry)) => {
                state.resources.insert(address, entry);
            }
            Ok(None) => {
                if let Some(gone) = state.resources.remove(&address) {
                    warn!(
                        "{} '{}' ({}) no longer exists, removed from state",
                        gone.resource_type, address, gone.id
                    );
                    println!("- {} '{}' is gone, removed from state", gone.resource_type, address);
                }
            }
            Err(e) => {
                error!("Failed to refresh '{}': {}", address, e);
                eprintln!("Failed to refresh '{}': {}", address, e);
                failures += 1;
            }
        }
    }

    store.save(&state)?;

    if failures > 0 {
        return Err(AdminError::State(format!(
            "{} of {} entities failed to refresh",
            failures, total
        ))
        .into());
    }

    println!("✓ Refreshed {} entities", total);
    Ok(())
}

/// Run the delete command
pub async fn run_delete_command(
    client: &AdminClient,
    cli: &Cli,
    args: &DeleteArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::new(cli.state.clone());
    let mut state = store.load()?;
    let entry = lookup(&state, &args.address)?.clone();

    let prompt = format!(
        "Delete {} '{}' ({})?",
        entry.resource_type, args.address, entry.id
    );
    if !confirm_action(&prompt, args.yes || cli.batch)? {
        println!("Aborted");
        return Ok(());
    }

    let spinner = create_spinner(
        &format!("Deleting {} '{}'...", entry.resource_type, args.address),
        cli.batch,
    );
    let result = entry.resource_type.delete(client, &entry).await;
    finish_spinner(spinner);
    result?;

    state.resources.remove(&args.address);
    store.save(&state)?;
    println!(
        "✓ Deleted {} '{}' ({})",
        entry.resource_type, args.address, entry.id
    );
    Ok(())
}

/// Run the import command
pub async fn run_import_command(
    client: &AdminClient,
    cli: &Cli,
    args: &ImportArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::new(cli.state.clone());
    let mut state = store.load()?;
    ensure_free(&state, &args.address)?;

    let spinner = create_spinner(
        &format!("Importing {} '{}'...", args.resource_type, args.id),
        cli.batch,
    );
    let result = args.resource_type.import(client, &args.id).await;
    finish_spinner(spinner);
    let entry = result?;

    println!(
        "✓ Imported {} '{}' ({})",
        entry.resource_type, args.address, entry.id
    );
    state.resources.insert(args.address.clone(), entry);
    store.save(&state)?;
    Ok(())
}

/// Dispatch state subcommands
pub fn run_state_command(
    cli: &Cli,
    action: &StateAction,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::new(cli.state.clone());
    match action {
        StateAction::List(args) => {
            let state = store.load()?;
            output_state_entries(&state.resources, args.output, cli.no_header)
        }
        StateAction::Show(StateAddressArgs { address }) => {
            let state = store.load()?;
            output_state_entry(address, lookup(&state, address)?)
        }
        StateAction::Rm(StateAddressArgs { address }) => {
            let mut state = store.load()?;
            let removed = state.resources.remove(address).ok_or_else(|| {
                AdminError::State(format!("No entity recorded at address '{}'", address))
            })?;
            store.save(&state)?;
            println!(
                "✓ Removed {} '{}' ({}) from state; the remote entity was not changed",
                removed.resource_type, address, removed.id
            );
            Ok(())
        }
    }
}
