use crate::client::UsersClient;
use crate::{User, USERS_ENDPOINT};
use std::sync::{Arc, PoisonError, RwLock, Weak};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};
use url::Url;

/// Display surface driven by [`UserPresenter`].
///
/// Calls to `present_users` arrive on whichever runtime worker finished the
/// fetch, hence `Send + Sync`.
pub trait UserView: Send + Sync {
    fn present_users(&self, users: Vec<User>);
    fn present_alert(&self, title: &str, message: &str);
}

#[derive(Debug, Clone)]
pub struct PresenterConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            endpoint: USERS_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Error)]
pub enum PresenterError {
    /// The HTTP client could not be built.
    #[error("http client init error: {0}")]
    Client(#[from] reqwest::Error),
}

type Delegate = Arc<RwLock<Option<Weak<dyn UserView>>>>;

/// Resolves the delegate without keeping the lock while the view runs.
fn current_view(delegate: &RwLock<Option<Weak<dyn UserView>>>) -> Option<Arc<dyn UserView>> {
    let guard = delegate.read().unwrap_or_else(PoisonError::into_inner);
    guard.as_ref().and_then(Weak::upgrade)
}

/// Handle to a spawned users load.
///
/// Dropping it detaches the request; it still runs to completion.
#[must_use = "await `completed()` to observe the end of the load, or drop to detach"]
pub struct UsersRequest {
    handle: Option<JoinHandle<()>>,
}

impl UsersRequest {
    /// True when nothing was started (no valid endpoint or no runtime).
    pub fn is_noop(&self) -> bool {
        self.handle.is_none()
    }

    pub async fn completed(self) {
        if let Some(handle) = self.handle {
            if let Err(e) = handle.await {
                error!(error = %e, "users load task did not finish");
            }
        }
    }
}

pub struct UserPresenter {
    delegate: Delegate,
    client: Option<Arc<UsersClient>>,
}

impl UserPresenter {
    /// An unparsable endpoint is not an error here; loading just becomes a no-op.
    pub fn new(config: PresenterConfig) -> Result<Self, PresenterError> {
        let client = match Url::parse(&config.endpoint) {
            Ok(url) => Some(Arc::new(UsersClient::new(url, config.timeout)?)),
            Err(e) => {
                warn!(endpoint = %config.endpoint, error = %e, "invalid users endpoint, loading disabled");
                None
            }
        };

        Ok(Self {
            delegate: Arc::new(RwLock::new(None)),
            client,
        })
    }

    /// Keeps only a weak reference: the presenter never keeps the view alive.
    pub fn set_view_delegate<V: UserView + 'static>(&self, view: &Arc<V>) {
        let weak: Weak<V> = Arc::downgrade(view);
        self.set_view_delegate_weak(weak);
    }

    /// Same as [`set_view_delegate`](Self::set_view_delegate), for views
    /// already held as `Arc<dyn UserView>`.
    pub fn set_view_delegate_weak(&self, view: Weak<dyn UserView>) {
        *self.delegate.write().unwrap_or_else(PoisonError::into_inner) = Some(view);
    }

    pub fn clear_view_delegate(&self) {
        *self.delegate.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Starts one GET in the background and returns immediately.
    ///
    /// On success the decoded list goes to the view that is set when the
    /// response arrives. Every failure is swallowed: transport errors are
    /// logged at debug level, unusable responses (empty or undecodable body)
    /// at error level.
    pub fn get_users(&self) -> UsersRequest {
        let Some(client) = self.client.clone() else {
            debug!("no users endpoint, skipping load");
            return UsersRequest { handle: None };
        };

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(rt) => rt,
            Err(e) => {
                warn!(error = %e, "get_users called outside a tokio runtime");
                return UsersRequest { handle: None };
            }
        };

        let delegate = Arc::clone(&self.delegate);
        let handle = runtime.spawn(async move {
            match client.fetch_users().await {
                Ok(users) => {
                    debug!(count = users.len(), "users decoded");
                    match current_view(&delegate) {
                        Some(view) => view.present_users(users),
                        None => debug!("view gone, dropping users"),
                    }
                }
                Err(e) if e.is_transport() => {
                    debug!(url = %client.endpoint(), error = %e, "users load failed");
                }
                Err(e) => {
                    error!(url = %client.endpoint(), error = %e, "users response unusable");
                }
            }
        });

        UsersRequest { handle: Some(handle) }
    }

    pub fn did_tap(&self, user: &User) {
        if let Some(view) = current_view(&self.delegate) {
            view.present_alert(&user.name, &user.alert_message());
        }
    }
}
