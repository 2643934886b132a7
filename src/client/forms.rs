//! Form State
//!
//! Immutable form values: every edit returns a new `FormState` with one
//! field changed, leaving the previous value untouched. Forms convert into
//! the shared request types on submit.

use std::collections::BTreeMap;

use crate::shared::{
    EducationRequest, ExperienceRequest, LoginRequest, Profile, ProfileRequest, RegisterRequest,
};

/// Placeholder value of the status select
pub const STATUS_PLACEHOLDER: &str = "0";

/// Professional status select options as (label, value)
pub const STATUS_OPTIONS: [(&str, &str); 10] = [
    ("* Select Professional Status", STATUS_PLACEHOLDER),
    ("Developer", "Developer"),
    ("Junior Developer", "Junior Developer"),
    ("Senior Developer", "Senior Developer"),
    ("Manager", "Manager"),
    ("Student", "Student"),
    ("Instructor", "Instructor"),
    ("Intern", "Intern"),
    ("Designer", "Designer"),
    ("Other", "Other"),
];

/// Field values of a form, keyed by input name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<String, String>,
    display_social_inputs: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the profile form for editing
    pub fn from_profile(profile: &Profile) -> Self {
        let optional = |value: &Option<String>| value.clone().unwrap_or_default();
        let social = &profile.social;

        Self::new()
            .with_field("handle", &profile.handle)
            .with_field("status", &profile.status)
            .with_field("skills", profile.skills.join(","))
            .with_field("company", optional(&profile.company))
            .with_field("website", optional(&profile.website))
            .with_field("location", optional(&profile.location))
            .with_field("bio", optional(&profile.bio))
            .with_field("githubusername", optional(&profile.githubusername))
            .with_field("youtube", optional(&social.youtube))
            .with_field("twitter", optional(&social.twitter))
            .with_field("facebook", optional(&social.facebook))
            .with_field("linkedin", optional(&social.linkedin))
            .with_field("instagram", optional(&social.instagram))
    }

    /// New form value with one field changed
    pub fn with_field(&self, name: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.fields.insert(name.to_string(), value.into());
        next
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    fn optional(&self, name: &str) -> Option<String> {
        Some(self.get(name).trim())
            .filter(|value| !value.is_empty())
            .map(String::from)
    }

    fn flag(&self, name: &str) -> bool {
        self.get(name) == "true"
    }

    pub fn display_social_inputs(&self) -> bool {
        self.display_social_inputs
    }

    /// Show or hide the social link inputs
    pub fn toggle_social_inputs(&self) -> Self {
        let mut next = self.clone();
        next.display_social_inputs = !next.display_social_inputs;
        next
    }

    /// Flip the "current" checkbox of an education or experience form
    pub fn toggle_current(&self) -> Self {
        let current = !self.flag("current");
        self.with_field("current", current.to_string())
    }

    /// Whether the "to" date input is disabled
    pub fn to_disabled(&self) -> bool {
        self.flag("current")
    }

    pub fn to_register_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.get("name").to_string(),
            email: self.get("email").to_string(),
            password: self.get("password").to_string(),
            password2: self.optional("password2"),
        }
    }

    pub fn to_login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.get("email").to_string(),
            password: self.get("password").to_string(),
        }
    }

    pub fn to_profile_request(&self) -> ProfileRequest {
        let status = match self.get("status") {
            STATUS_PLACEHOLDER => String::new(),
            status => status.to_string(),
        };

        ProfileRequest {
            handle: self.get("handle").to_string(),
            status,
            skills: self.get("skills").to_string(),
            company: self.optional("company"),
            website: self.optional("website"),
            location: self.optional("location"),
            bio: self.optional("bio"),
            githubusername: self.optional("githubusername"),
            youtube: self.optional("youtube"),
            twitter: self.optional("twitter"),
            facebook: self.optional("facebook"),
            linkedin: self.optional("linkedin"),
            instagram: self.optional("instagram"),
        }
    }

    pub fn to_education_request(&self) -> EducationRequest {
        EducationRequest {
            school: self.get("school").to_string(),
            degree: self.get("degree").to_string(),
            fieldofstudy: self.get("fieldofstudy").to_string(),
            from: self.get("from").to_string(),
            to: self.optional("to").filter(|_| !self.to_disabled()),
            current: self.flag("current"),
            description: self.optional("description"),
        }
    }

    pub fn to_experience_request(&self) -> ExperienceRequest {
        ExperienceRequest {
            title: self.get("title").to_string(),
            company: self.get("company").to_string(),
            location: self.optional("location"),
            from: self.get("from").to_string(),
            to: self.optional("to").filter(|_| !self.to_disabled()),
            current: self.flag("current"),
            description: self.optional("description"),
        }
    }
}
