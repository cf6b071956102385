//! Authentication service layer.
//!
//! This module contains the sign-in flow against the configured OAuth2 providers and the codec
//! for the encrypted session tokens issued once a sign-in completes.

pub mod callback;
pub mod login;
pub mod provider;
pub mod token;
