//! Lifecycle command arguments (create, update, refresh, delete, import)

use clap::Parser;

use crate::admin::ResourceType;

/// Arguments for 'create' command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        anthropic-admin create workspace prod --set name=Production\n  \
        anthropic-admin create workspace_member alice --set workspace_id=wrkspc_01 \\\n      \
        --set user_id=user_01 --set workspace_role=workspace_developer\n  \
        anthropic-admin create organization_invite bob --set email=bob@example.com --set role=user")]
pub struct CreateArgs {
    /// Resource type
    #[arg(value_enum)]
    pub resource_type: ResourceType,

    /// Local address to record the entity under
    pub address: String,

    /// Attribute assignment (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

/// Arguments for 'update' command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Local address of the entity
    pub address: String,

    /// Attribute assignment (repeatable); unset attributes keep their current value
    #[arg(long = "set", value_name = "KEY=VALUE", required = true)]
    pub set: Vec<String>,

    /// Skip confirmation prompt when the change requires replacement
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'refresh' command
#[derive(Parser, Debug)]
pub struct RefreshArgs {
    /// Local address to refresh (all entries if omitted)
    pub address: Option<String>,
}

/// Arguments for 'delete' command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Local address of the entity
    pub address: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'import' command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        anthropic-admin import workspace prod wrkspc_01\n  \
        anthropic-admin import workspace_member alice wrkspc_01/user_01")]
pub struct ImportArgs {
    /// Resource type
    #[arg(value_enum)]
    pub resource_type: ResourceType,

    /// Local address to record the entity under
    pub address: String,

    /// Remote ID (<WORKSPACE_ID>/<USER_ID> for workspace members)
    pub id: String,
}
