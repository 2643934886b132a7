//! Shared Module
//!
//! Types shared between the backend handlers and the client action layer.
//! Everything here is plain data plus validation: request bodies, response
//! documents, token claims and the field-keyed error map.

/// Field-keyed error map
pub mod error;

/// Registration, login and token types
pub mod user;

/// Profile, education and experience types
pub mod profile;

/// Form input normalisation for serde
pub mod serde_helpers;

pub use error::FieldErrors;
pub use profile::{
    DeleteAccountResponse, Education, EducationRequest, Experience, ExperienceRequest, Profile,
    ProfileOwner, ProfileRequest, Social,
};
pub use user::{CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest, TokenClaims, UserResponse};
