//! User command handlers

use crate::admin::data_sources::{read_user, read_users};
use crate::admin::AdminClient;
use crate::cli::{ByIdArgs, ListArgs};
use crate::output::{output_user, output_users};
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

/// Run the get users command
pub async fn run_users_command(
    client: &AdminClient,
    cli: &Cli,
    args: &ListArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching users...", cli.batch);
    let result = read_users(client).await;
    finish_spinner(spinner);

    output_users(&result?.users, args.output, cli.no_header)
}

/// Run the get user command
pub async fn run_user_command(
    client: &AdminClient,
    cli: &Cli,
    args: &ByIdArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(&format!("Fetching user '{}'...", args.id), cli.batch);
    let result = read_user(client, &args.id).await;
    finish_spinner(spinner);

    output_user(&result?, args.output, cli.no_header)
}
