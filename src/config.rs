/// Configuration constants for the Admin API
pub mod api {
    /// Default API endpoint
    pub const BASE_URL: &str = "https://api.anthropic.com";

    /// Path prefix for organization administration endpoints
    pub const ORGANIZATIONS_PATH: &str = "/v1/organizations";

    /// Users endpoint
    pub const USERS: &str = "users";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Workspace members endpoint (below a workspace)
    pub const MEMBERS: &str = "members";

    /// Organization invites endpoint
    pub const INVITES: &str = "invites";

    /// Header carrying the API version marker
    pub const VERSION_HEADER: &str = "anthropic-version";

    /// API version sent with every request
    pub const VERSION: &str = "2023-06-01";

    /// Header carrying the Admin API key
    pub const API_KEY_HEADER: &str = "x-api-key";

    /// Default page size for list requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Upper bound on pages fetched by a single list operation
    pub const MAX_PAGES: usize = 1000;

    /// Maximum number of state entries refreshed concurrently
    pub const MAX_CONCURRENT_REFRESH: usize = 8;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the Admin API key
    pub const API_KEY_ENV_VAR: &str = "ANTHROPIC_API_KEY";

    /// Environment variable overriding the API endpoint
    pub const BASE_URL_ENV_VAR: &str = "ANTHROPIC_BASE_URL";
}

/// Transport retry policy
pub mod retry {
    /// Maximum number of retries after the first attempt
    pub const MAX_RETRIES: u32 = 10;

    /// Backoff before the first retry (milliseconds)
    pub const MIN_BACKOFF_MS: u64 = 1_000;

    /// Backoff ceiling (milliseconds)
    pub const MAX_BACKOFF_MS: u64 = 30_000;
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default state file, relative to the working directory
    pub const STATE_FILE: &str = "anthropic-admin.state.json";

    /// Environment variable overriding the state file location
    pub const STATE_FILE_ENV_VAR: &str = "ANTHROPIC_ADMIN_STATE";
}
