use crate::bulk::BulkOrchestrator;
use crate::clients::{CredentialClient, CustomResourceClient, GroupClient, UserClient};
use crate::config::ServerConfig;
use crate::model::ResourceType;
use crate::registry::{RegistryError, ResourceRegistry};
use crate::{credential_actor, custom_actor, group_actor, user_actor};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{info, warn};

pub const USERS: &str = "Users";
pub const GROUPS: &str = "Groups";
pub const SERVICE_CREDENTIALS: &str = "ServiceCredentials";

#[derive(Debug, Error)]
pub enum ShutdownError {
    /// Orchestrators (or registry handles) still keep the actors' mailboxes open.
    #[error("{0} registry handle(s) still in use; drop every orchestrator before shutdown")]
    RegistryInUse(usize),

    #[error(transparent)]
    Join(#[from] JoinError),
}

/// Every resource actor of the directory, plus the registry that routes to them.
pub struct DirectorySystem {
    pub user_client: UserClient,
    pub group_client: GroupClient,
    pub credential_client: CredentialClient,
    pub custom_clients: HashMap<String, CustomResourceClient>,
    registry: Arc<ResourceRegistry>,
    config: ServerConfig,
    handles: Vec<JoinHandle<()>>,
}

impl DirectorySystem {
    /// Spawns all actors and builds the registry. Must be called within a Tokio runtime.
    pub fn new(config: ServerConfig) -> Result<Self, RegistryError> {
        let buffer_size = config.actor_buffer_size;

        let (user_actor, user_client) = user_actor::new(buffer_size);
        let (group_actor, group_client) = group_actor::new(buffer_size);
        let (credential_actor, credential_client) = credential_actor::new(buffer_size);

        let mut handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(group_actor.run(user_client.clone())),
            tokio::spawn(credential_actor.run(user_client.clone())),
        ];

        let mut builder = ResourceRegistry::builder()
            .register(USERS, ResourceType::User, Arc::new(user_client.clone()))?
            .register(GROUPS, ResourceType::Group, Arc::new(group_client.clone()))?
            .register(
                SERVICE_CREDENTIALS,
                ResourceType::ServiceCredential,
                Arc::new(credential_client.clone()),
            )?;

        let mut custom_clients = HashMap::new();
        for name in &config.custom_resource_types {
            let (actor, client) = custom_actor::new(name.clone(), buffer_size);
            handles.push(tokio::spawn(actor.run(())));
            builder = builder.register(
                name.clone(),
                ResourceType::Custom(name.clone()),
                Arc::new(client.clone()),
            )?;
            custom_clients.insert(name.clone(), client);
        }

        let registry = Arc::new(builder.build());
        info!(
            resources = registry.len(),
            actors = handles.len(),
            "Directory system started"
        );

        Ok(Self {
            user_client,
            group_client,
            credential_client,
            custom_clients,
            registry,
            config,
            handles,
        })
    }

    pub fn registry(&self) -> Arc<ResourceRegistry> {
        self.registry.clone()
    }

    /// A bulk orchestrator over this system's registry, configured from [`ServerConfig`].
    pub fn orchestrator(&self) -> BulkOrchestrator {
        let orchestrator = BulkOrchestrator::new(self.registry.clone(), self.config.bulk);
        match &self.config.base_url {
            Some(base_url) => orchestrator.with_base_url(base_url.clone()),
            None => orchestrator,
        }
    }

    /// Stops every actor. Orchestrators and registry handles obtained from this system
    /// must be dropped first; otherwise the actors cannot stop and
    /// [`ShutdownError::RegistryInUse`] is returned without waiting. The actors then stop
    /// once the last of those handles goes away.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        let in_use = Arc::strong_count(&self.registry) - 1;
        if in_use > 0 {
            warn!(in_use, "Registry still shared, refusing to wait for actors");
            return Err(ShutdownError::RegistryInUse(in_use));
        }

        info!("Shutting down directory system");
        let Self {
            user_client,
            group_client,
            credential_client,
            custom_clients,
            registry,
            handles,
            ..
        } = self;
        drop(registry);
        drop(custom_clients);
        drop(credential_client);
        drop(group_client);
        drop(user_client);

        for handle in handles {
            handle.await?;
        }
        info!("Directory system stopped");
        Ok(())
    }
}
