//! Client Module
//!
//! The client action layer for the DevConnect API. It is compiled without
//! the `ssr` feature and has no dependency on the backend.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs      - Module exports
//! ├── config.rs   - Server URL and bearer token
//! ├── api.rs      - Typed HTTP client and ClientError
//! ├── state.rs    - State, actions and the reducer
//! ├── actions.rs  - Action creators (HTTP call, then dispatch)
//! └── forms.rs    - Immutable form state
//! ```

pub mod config;
pub mod api;
pub mod state;
pub mod actions;
pub mod forms;

pub use actions::{ClientSession, History, Navigator};
pub use api::{ApiClient, ClientError, ErrorBody};
pub use config::ClientConfig;
pub use forms::FormState;
pub use state::{Action, ClientState, CurrentUser, ProfileSlot, Store};
