//! Invites module - organization invite resource and data source

mod api;
mod commands;
mod models;
mod resource;

pub use commands::run_invites_command;
pub use models::{
    CreateInviteRequest, Invite, OrganizationInviteModel, OrganizationInvitesDataSourceModel,
    ORGANIZATION_ROLES,
};
pub use resource::{OrganizationInviteResource, ORGANIZATION_INVITE_SCHEMA};
