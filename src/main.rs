//! anthropic-admin - Main entry point

use clap::Parser;
use log::{debug, info};

use anthropic_admin::admin::invites::run_invites_command;
use anthropic_admin::admin::users::{run_user_command, run_users_command};
use anthropic_admin::admin::workspace_members::{run_member_command, run_members_command};
use anthropic_admin::admin::workspaces::{run_workspace_command, run_workspaces_command};
use anthropic_admin::state::{
    run_create_command, run_delete_command, run_import_command, run_refresh_command,
    run_state_command, run_update_command,
};
use anthropic_admin::{AdminClient, Cli, Command, CredentialsResolver, GetResource};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting anthropic-admin v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli.command);

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::State { action } = &cli.command {
        return run_state_command(cli, action);
    }

    let resolver = CredentialsResolver::from_env();
    let api_key = resolver.resolve_api_key(cli.api_key.as_deref())?;
    let base_url = resolver.resolve_base_url(cli.base_url.as_deref());
    debug!("Using API endpoint {}", base_url);

    let client = AdminClient::new(api_key, base_url);

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Users(args) => run_users_command(&client, cli, args).await,
            GetResource::User(args) => run_user_command(&client, cli, args).await,
            GetResource::Workspaces(args) => run_workspaces_command(&client, cli, args).await,
            GetResource::Workspace(args) => run_workspace_command(&client, cli, args).await,
            GetResource::Members(args) => run_members_command(&client, cli, args).await,
            GetResource::Member(args) => run_member_command(&client, cli, args).await,
            GetResource::Invites(args) => run_invites_command(&client, cli, args).await,
        },
        Command::Create(args) => run_create_command(&client, cli, args).await,
        Command::Update(args) => run_update_command(&client, cli, args).await,
        Command::Refresh(args) => run_refresh_command(&client, cli, args).await,
        Command::Delete(args) => run_delete_command(&client, cli, args).await,
        Command::Import(args) => run_import_command(&client, cli, args).await,
        Command::State { action } => run_state_command(cli, action),
    }
}
