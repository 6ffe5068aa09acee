use async_trait::async_trait;
use resource_framework::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Mailbox {
    id: u32,
    address: String,
    quota_mb: u32,
}

#[derive(Debug)]
struct MailboxCreate {
    address: String,
}

#[derive(Debug)]
struct MailboxUpdate {
    address: Option<String>,
    quota_mb: Option<u32>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum MailboxError {
    #[error("address must contain '@': {0}")]
    InvalidAddress(String),
    #[error("quota must be positive")]
    InvalidQuota,
    #[error("mailbox not found: {0}")]
    NotFound(String),
    #[error("communication error: {0}")]
    Communication(String),
}

#[async_trait]
impl ActorEntity for Mailbox {
    type Id = u32;
    type Create = MailboxCreate;
    type Update = MailboxUpdate;
    type Context = ();
    type Error = MailboxError;

    fn from_create_params(id: u32, params: MailboxCreate) -> Result<Self, Self::Error> {
        if !params.address.contains('@') {
            return Err(MailboxError::InvalidAddress(params.address));
        }
        Ok(Self {
            id,
            address: params.address,
            quota_mb: 100,
        })
    }

    async fn on_update(
        &mut self,
        update: MailboxUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        // address is applied first so the rollback path is exercised
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(quota) = update.quota_mb {
            if quota == 0 {
                return Err(MailboxError::InvalidQuota);
            }
            self.quota_mb = quota;
        }
        Ok(())
    }
}

struct MailboxClient {
    inner: ResourceClient<Mailbox>,
}

#[async_trait]
impl ActorClient<Mailbox> for MailboxClient {
    type Error = MailboxError;

    fn inner(&self) -> &ResourceClient<Mailbox> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MailboxError::NotFound(id),
            other => other
                .downcast_entity::<MailboxError>()
                .unwrap_or_else(|e| MailboxError::Communication(e.to_string())),
        }
    }
}

fn spawn_mailboxes() -> ResourceClient<Mailbox> {
    let mut next = 0;
    let (actor, client) = ResourceActor::new(10, move || {
        next += 1;
        next
    });
    tokio::spawn(actor.run(()));
    client
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = spawn_mailboxes();

    // 1. Create
    let id = client
        .create(MailboxCreate {
            address: "ops@example.com".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // 2. Update
    let updated = client
        .update(
            id,
            MailboxUpdate {
                address: None,
                quota_mb: Some(500),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.quota_mb, 500);
    assert_eq!(updated.address, "ops@example.com");

    // 3. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_update_restores_previous_state() {
    let client = spawn_mailboxes();
    let id = client
        .create(MailboxCreate {
            address: "ops@example.com".into(),
        })
        .await
        .unwrap();

    let result = client
        .update(
            id,
            MailboxUpdate {
                address: Some("changed@example.com".into()),
                quota_mb: Some(0),
            },
        )
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.address, "ops@example.com");
    assert_eq!(stored.quota_mb, 100);
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let client = spawn_mailboxes();

    let update = client
        .update(
            99,
            MailboxUpdate {
                address: None,
                quota_mb: None,
            },
        )
        .await;
    assert!(matches!(update, Err(FrameworkError::NotFound(id)) if id == "99"));
    assert!(matches!(
        client.delete(99).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_actor_client_recovers_entity_errors() {
    let mailboxes = MailboxClient {
        inner: spawn_mailboxes(),
    };

    let err = mailboxes
        .inner()
        .create(MailboxCreate {
            address: "not-an-address".into(),
        })
        .await
        .map_err(MailboxClient::map_error)
        .unwrap_err();
    assert_eq!(err, MailboxError::InvalidAddress("not-an-address".into()));

    assert_eq!(
        mailboxes.delete(5).await.unwrap_err(),
        MailboxError::NotFound("5".into())
    );
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (actor, client) = ResourceActor::<Mailbox>::new(1, || 1);
    drop(actor);

    let result = client.get(1).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
