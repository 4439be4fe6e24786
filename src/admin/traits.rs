//! Common traits for Admin API entities

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::admin::schema::ResourceSchema;
use crate::admin::AdminClient;
use crate::error::Result;

/// Refresh a local model from a remote record
///
/// Implemented by every resource model and data-source model. The remote
/// record is the source of truth: every field it carries overwrites the
/// local value.
pub trait Populate<R> {
    fn populate_from(&mut self, remote: R) -> Result<()>;
}

impl<M, R> Populate<Vec<R>> for Vec<M>
where
    M: Populate<R> + Default,
{
    fn populate_from(&mut self, remote: Vec<R>) -> Result<()> {
        let mut items = Vec::with_capacity(remote.len());
        for record in remote {
            let mut item = M::default();
            item.populate_from(record)?;
            items.push(item);
        }
        *self = items;
        Ok(())
    }
}

/// One kind of remote entity managed through create/read/update/delete
///
/// Implementations only issue the API calls; status handling for the
/// lifecycle as a whole lives in [`crate::admin::Reconciler`].
#[async_trait]
pub trait ManagedResource: Send + Sync {
    /// Local projection persisted in state
    type Model: Populate<Self::Remote> + Clone + Default + Serialize + DeserializeOwned + Send + Sync;
    /// Record returned by the API
    type Remote: Send;

    /// Static field descriptors
    fn schema(&self) -> &'static ResourceSchema;

    /// Identifier the entity is keyed by in state
    fn state_id(&self, model: &Self::Model) -> Result<String>;

    /// Seed a model from an import identifier, before it is read
    fn import_model(&self, id: &str) -> Result<Self::Model>;

    /// Create the entity from the desired model
    async fn create(&self, client: &AdminClient, desired: &Self::Model) -> Result<Self::Remote>;

    /// Fetch the entity, `None` if it no longer exists
    async fn read(&self, client: &AdminClient, current: &Self::Model)
        -> Result<Option<Self::Remote>>;

    /// Fetch the entity, treating a 404 as an error
    async fn fetch(&self, client: &AdminClient, current: &Self::Model) -> Result<Self::Remote>;

    /// Apply the mutable fields of the desired model
    async fn update(&self, client: &AdminClient, desired: &Self::Model) -> Result<Self::Remote>;

    /// Delete (or archive) the entity
    async fn delete(&self, client: &AdminClient, current: &Self::Model) -> Result<()>;
}
