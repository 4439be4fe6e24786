//! Workspace member command handlers

use crate::admin::data_sources::{read_workspace_member, read_workspace_members};
use crate::admin::ids::split_two_part_id;
use crate::admin::AdminClient;
use crate::cli::{ByIdArgs, MembersArgs};
use crate::output::{output_member, output_members};
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

/// Run the get members command
pub async fn run_members_command(
    client: &AdminClient,
    cli: &Cli,
    args: &MembersArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        &format!("Fetching members of workspace '{}'...", args.workspace_id),
        cli.batch,
    );
    let result = read_workspace_members(client, &args.workspace_id).await;
    finish_spinner(spinner);

    output_members(&result?.members, args.output, cli.no_header)
}

/// Run the get member command (`<WORKSPACE_ID>/<USER_ID>`)
pub async fn run_member_command(
    client: &AdminClient,
    cli: &Cli,
    args: &ByIdArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (workspace_id, user_id) = split_two_part_id(&args.id, "workspace_id", "user_id")?;

    let spinner = create_spinner(&format!("Fetching member '{}'...", args.id), cli.batch);
    let result = read_workspace_member(client, &workspace_id, &user_id).await;
    finish_spinner(spinner);

    output_member(&result?, args.output, cli.no_header)
}
