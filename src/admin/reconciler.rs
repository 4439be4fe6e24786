//! Lifecycle reconciliation for one managed entity

use log::{debug, info};

use crate::admin::traits::{ManagedResource, Populate};
use crate::admin::AdminClient;
use crate::error::Result;

/// Drives create/read/update/delete/import for one resource kind
///
/// The client is borrowed from the caller; the reconciler keeps no state
/// between calls. Every method returns a fresh model only after the remote
/// round trip succeeded and the response was parsed, so a failed call never
/// leaves a half-updated model behind.
pub struct Reconciler<'a, R> {
    client: &'a AdminClient,
    resource: R,
}

impl<'a, R: ManagedResource> Reconciler<'a, R> {
    pub fn new(client: &'a AdminClient, resource: R) -> Self {
        Self { client, resource }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    fn type_name(&self) -> &'static str {
        self.resource.schema().type_name
    }

    /// Create the entity and return the fully populated model
    pub async fn create(&self, desired: &R::Model) -> Result<R::Model> {
        debug!("Creating {}", self.type_name());

        let remote = self.resource.create(self.client, desired).await?;
        let mut model = desired.clone();
        model.populate_from(remote)?;

        info!(
            "Created {} '{}'",
            self.type_name(),
            self.resource.state_id(&model)?
        );
        Ok(model)
    }

    /// Refresh the entity; `None` means it is gone and should be dropped
    pub async fn read(&self, current: &R::Model) -> Result<Option<R::Model>> {
        let id = self.resource.state_id(current)?;
        debug!("Reading {} '{}'", self.type_name(), id);

        match self.resource.read(self.client, current).await? {
            Some(remote) => {
                let mut model = current.clone();
                model.populate_from(remote)?;
                Ok(Some(model))
            }
            None => {
                info!(
                    "{} '{}' no longer exists, dropping it from state",
                    self.type_name(),
                    id
                );
                Ok(None)
            }
        }
    }

    /// Apply mutable fields and return the refreshed model
    pub async fn update(&self, desired: &R::Model) -> Result<R::Model> {
        let id = self.resource.state_id(desired)?;
        debug!("Updating {} '{}'", self.type_name(), id);

        let remote = self.resource.update(self.client, desired).await?;
        let mut model = desired.clone();
        model.populate_from(remote)?;

        info!("Updated {} '{}'", self.type_name(), id);
        Ok(model)
    }

    /// Delete the entity; state may be dropped only when this returns `Ok`
    pub async fn delete(&self, current: &R::Model) -> Result<()> {
        let id = self.resource.state_id(current)?;
        debug!("Deleting {} '{}'", self.type_name(), id);

        self.resource.delete(self.client, current).await?;

        info!("Deleted {} '{}'", self.type_name(), id);
        Ok(())
    }

    /// Adopt an existing entity by its import identifier
    pub async fn import(&self, id: &str) -> Result<R::Model> {
        debug!("Importing {} '{}'", self.type_name(), id);

        let seed = self.resource.import_model(id)?;
        let remote = self.resource.fetch(self.client, &seed).await?;
        let mut model = seed;
        model.populate_from(remote)?;

        info!("Imported {} '{}'", self.type_name(), id);
        Ok(model)
    }
}
