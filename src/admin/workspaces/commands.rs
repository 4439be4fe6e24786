//! Workspace command handlers

use log::debug;

use crate::admin::data_sources::{read_workspace, read_workspaces};
use crate::admin::AdminClient;
use crate::cli::{ByIdArgs, WorkspacesArgs};
use crate::output::{output_workspace, output_workspaces};
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

/// Run the get workspaces command
pub async fn run_workspaces_command(
    client: &AdminClient,
    cli: &Cli,
    args: &WorkspacesArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching workspaces...", cli.batch);
    let result = read_workspaces(client, args.include_archived).await;
    finish_spinner(spinner);

    let workspaces = result?.workspaces;
    debug!(
        "{} of {} workspaces are archived",
        workspaces.iter().filter(|w| w.archived_at.is_some()).count(),
        workspaces.len()
    );
    output_workspaces(&workspaces, args.output, cli.no_header)
}

/// Run the get workspace command
pub async fn run_workspace_command(
    client: &AdminClient,
    cli: &Cli,
    args: &ByIdArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(&format!("Fetching workspace '{}'...", args.id), cli.batch);
    let result = read_workspace(client, &args.id).await;
    finish_spinner(spinner);

    output_workspace(&result?, args.output, cli.no_header)
}
