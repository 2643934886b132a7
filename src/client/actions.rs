//! Client Actions
//!
//! Asynchronous units of work: each action creator performs one HTTP call
//! and dispatches the resulting state updates to the store. Navigation
//! happens only after a successful call.
//!
//! # Failure Handling
//!
//! - Form submissions dispatch `GetErrors` with the field-keyed messages.
//! - `get_current_profile` treats any failure as "no profile yet"
//!   (`ProfileSlot::Empty`).
//! - `get_profile_by_handle` treats any failure as "not found"
//!   (`ProfileSlot::Missing`).
//! - `get_profiles` treats any failure as an absent listing.

use uuid::Uuid;

use crate::client::api::ApiClient;
use crate::client::state::{decode_token, Action, ClientState, ProfileSlot, Store};
use crate::shared::{
    EducationRequest, ExperienceRequest, LoginRequest, ProfileRequest, RegisterRequest,
};

/// Prompt shown before an account is deleted
pub const DELETE_ACCOUNT_PROMPT: &str = "Are you sure? This action CANNOT be undone.";

/// Route changes requested by actions
pub trait Navigator {
    fn push(&mut self, path: &str);
}

/// Navigator that records the visited paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Navigator for History {
    fn push(&mut self, path: &str) {
        self.entries.push(path.to_string());
    }
}

/// API client, store and navigator bundled for the action creators
pub struct ClientSession<N: Navigator> {
    pub client: ApiClient,
    pub store: Store,
    pub navigator: N,
}

impl<N: Navigator> ClientSession<N> {
    pub fn new(client: ApiClient, navigator: N) -> Self {
        Self {
            client,
            store: Store::new(),
            navigator,
        }
    }

    pub fn state(&self) -> &ClientState {
        self.store.state()
    }

    fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    /// Restore a saved token at startup
    ///
    /// An unreadable or expired token logs the user out and sends them to
    /// the login page.
    pub fn restore_session(&mut self, token: &str, now: u64) {
        match decode_token(token) {
            Some(user) if !user.is_expired(now) => {
                self.client.set_token(Some(token.to_string()));
                self.dispatch(Action::SetCurrentUser(Some(user)));
            }
            _ => {
                self.logout_user();
                self.navigator.push("/login");
            }
        }
    }

    /// Register, then go to the login page
    pub async fn register_user(&mut self, request: RegisterRequest) {
        match self.client.register(&request).await {
            Ok(_) => {
                self.dispatch(Action::ClearErrors);
                self.navigator.push("/login");
            }
            Err(e) => self.dispatch(Action::GetErrors(e.field_errors())),
        }
    }

    /// Log in: keep the token for later calls and set the current user
    pub async fn login_user(&mut self, request: LoginRequest) {
        match self.client.login(&request).await {
            Ok(response) => {
                let user = decode_token(&response.token);
                self.client.set_token(Some(response.token));
                self.dispatch(Action::ClearErrors);
                self.dispatch(Action::SetCurrentUser(user));
            }
            Err(e) => self.dispatch(Action::GetErrors(e.field_errors())),
        }
    }

    /// Forget the token and the current user
    pub fn logout_user(&mut self) {
        self.client.clear_token();
        self.dispatch(Action::ClearCurrentProfile);
        self.dispatch(Action::SetCurrentUser(None));
    }

    pub async fn get_current_profile(&mut self) {
        self.dispatch(Action::ProfileLoading);
        let slot = match self.client.get_current_profile().await {
            Ok(Some(profile)) => ProfileSlot::Loaded(Box::new(profile)),
            Ok(None) => ProfileSlot::Empty,
            Err(e) => {
                tracing::debug!("Current profile unavailable: {}", e);
                ProfileSlot::Empty
            }
        };
        self.dispatch(Action::GetProfile(slot));
    }

    pub async fn get_profile_by_handle(&mut self, handle: &str) {
        self.dispatch(Action::ProfileLoading);
        let slot = match self.client.get_profile_by_handle(handle).await {
            Ok(Some(profile)) => ProfileSlot::Loaded(Box::new(profile)),
            Ok(None) => ProfileSlot::Missing,
            Err(e) => {
                tracing::debug!("Profile {} unavailable: {}", handle, e);
                ProfileSlot::Missing
            }
        };
        self.dispatch(Action::GetProfile(slot));
    }

    pub async fn get_profiles(&mut self) {
        self.dispatch(Action::ProfileLoading);
        let profiles = self.client.get_profiles().await.ok();
        self.dispatch(Action::GetProfiles(profiles));
    }

    /// Create or update the profile, then go to the dashboard
    pub async fn create_profile(&mut self, request: ProfileRequest) {
        match self.client.create_profile(&request).await {
            Ok(_) => {
                self.dispatch(Action::ClearErrors);
                self.navigator.push("/dashboard");
            }
            Err(e) => self.dispatch(Action::GetErrors(e.field_errors())),
        }
    }

    pub async fn add_education(&mut self, request: EducationRequest) {
        match self.client.add_education(&request).await {
            Ok(_) => {
                self.dispatch(Action::ClearErrors);
                self.navigator.push("/dashboard");
            }
            Err(e) => self.dispatch(Action::GetErrors(e.field_errors())),
        }
    }

    pub async fn add_experience(&mut self, request: ExperienceRequest) {
        match self.client.add_experience(&request).await {
            Ok(_) => {
                self.dispatch(Action::ClearErrors);
                self.navigator.push("/dashboard");
            }
            Err(e) => self.dispatch(Action::GetErrors(e.field_errors())),
        }
    }

    pub async fn delete_education(&mut self, id: Uuid) {
        match self.client.delete_education(id).await {
            Ok(profile) => self.dispatch(Action::GetProfile(ProfileSlot::Loaded(Box::new(profile)))),
            Err(e) => self.dispatch(Action::GetErrors(e.field_errors())),
        }
    }

    pub async fn delete_experience(&mut self, id: Uuid) {
        match self.client.delete_experience(id).await {
            Ok(profile) => self.dispatch(Action::GetProfile(ProfileSlot::Loaded(Box::new(profile)))),
            Err(e) => self.dispatch(Action::GetErrors(e.field_errors())),
        }
    }

    /// Delete the account after the user confirms
    ///
    /// `confirm` receives the prompt; nothing is sent unless it returns `true`.
    pub async fn delete_account<F>(&mut self, confirm: F)
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_ACCOUNT_PROMPT) {
            return;
        }

        match self.client.delete_account().await {
            Ok(_) => self.logout_user(),
            Err(e) => self.dispatch(Action::GetErrors(e.field_errors())),
        }
    }
}
