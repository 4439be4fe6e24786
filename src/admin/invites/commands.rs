//! Organization invite command handlers

use crate::admin::data_sources::read_organization_invites;
use crate::admin::AdminClient;
use crate::cli::ListArgs;
use crate::output::output_invites;
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

/// Run the get invites command
pub async fn run_invites_command(
    client: &AdminClient,
    cli: &Cli,
    args: &ListArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching invites...", cli.batch);
    let result = read_organization_invites(client).await;
    finish_spinner(spinner);

    output_invites(&result?.invites, args.output, cli.no_header)
}
