//! Property-based tests

mod form_proptest;
mod skills_proptest;
