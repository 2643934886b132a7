//! Client State Container
//!
//! A unidirectional store: `Action`s describe what happened, and `reduce`
//! computes the next `ClientState` from the previous one without side
//! effects. HTTP calls live in the action layer (`client::actions`), never
//! here.
//!
//! # State Shape
//!
//! ```text
//! ClientState
//! ├── auth     - authenticated flag and the user decoded from the token
//! ├── profile  - current profile slot, profile list, loading flag
//! └── errors   - field-keyed messages of the last failed submission
//! ```

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use uuid::Uuid;

use crate::shared::user::{TokenClaims, BEARER_PREFIX};
use crate::shared::{FieldErrors, Profile};

/// User identity decoded from the bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    /// Expiration (Unix timestamp)
    pub exp: u64,
}

impl CurrentUser {
    pub fn is_expired(&self, now: u64) -> bool {
        self.exp <= now
    }
}

/// Read the claims of a token without checking its signature
///
/// The client has no access to the signing secret; the server checks the
/// signature on every request anyway. Accepts the token with or without
/// the `Bearer ` prefix.
pub fn decode_token(token: &str) -> Option<CurrentUser> {
    let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(token);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    let data = decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;
    let id = Uuid::parse_str(&data.claims.sub).ok()?;

    Some(CurrentUser {
        id,
        name: data.claims.name,
        avatar: data.claims.avatar,
        exp: data.claims.exp,
    })
}

/// Authentication slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<CurrentUser>,
}

/// The current profile as last reported by the server
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProfileSlot {
    /// Nothing loaded, or the requested profile does not exist
    #[default]
    Missing,
    /// The current user has no profile yet
    Empty,
    Loaded(Box<Profile>),
}

impl ProfileSlot {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            ProfileSlot::Loaded(profile) => Some(&**profile),
            _ => None,
        }
    }
}

/// Profile slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub profile: ProfileSlot,
    /// `None` until the listing was fetched successfully
    pub profiles: Option<Vec<Profile>>,
    pub loading: bool,
}

/// Whole client state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    pub auth: AuthState,
    pub profile: ProfileState,
    pub errors: FieldErrors,
}

/// State updates
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Log a user in (`Some`) or out (`None`)
    SetCurrentUser(Option<CurrentUser>),
    ProfileLoading,
    GetProfile(ProfileSlot),
    GetProfiles(Option<Vec<Profile>>),
    ClearCurrentProfile,
    GetErrors(FieldErrors),
    ClearErrors,
}

/// Compute the next state
pub fn reduce(state: &ClientState, action: Action) -> ClientState {
    let mut next = state.clone();
    match action {
        Action::SetCurrentUser(user) => {
            next.auth = AuthState {
                is_authenticated: user.is_some(),
                user,
            };
        }
        Action::ProfileLoading => {
            next.profile.loading = true;
        }
        Action::GetProfile(slot) => {
            next.profile.profile = slot;
            next.profile.loading = false;
        }
        Action::GetProfiles(profiles) => {
            next.profile.profiles = profiles;
            next.profile.loading = false;
        }
        Action::ClearCurrentProfile => {
            next.profile.profile = ProfileSlot::Missing;
        }
        Action::GetErrors(errors) => {
            next.errors = errors;
        }
        Action::ClearErrors => {
            next.errors = FieldErrors::new();
        }
    }
    next
}

/// Holds the current state and applies dispatched actions
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: ClientState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("dispatch {:?}", action);
        self.state = reduce(&self.state, action);
    }
}
