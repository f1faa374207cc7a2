//! Hosted authentication client for MindaGuard
//!
//! This crate defines the boundary between the app and its hosted identity
//! provider: the [`AuthBackend`] capability set (login, register, current
//! user, logout), a closed error taxonomy, and one concrete backend selected
//! at build time through cargo features.
//!
//! Two backends exist — a mobile-identity REST backend (`firebase` feature)
//! and a Postgres-backed auth-as-a-service backend (`supabase` feature).
//! They are alternates for the same capability set and are never compiled
//! together. Clients are constructed explicitly and handed to whichever
//! component needs them; there is no process-wide singleton.

#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(all(feature = "firebase", feature = "supabase"))]
compile_error!(
    "features `firebase` and `supabase` are mutually exclusive; enable exactly one auth backend"
);

pub mod backend;
#[cfg(feature = "firebase")]
pub mod firebase;
#[cfg(feature = "supabase")]
pub mod supabase;
pub mod test_utils;

pub use backend::{AuthBackend, BackendError, UserAccount};
#[cfg(feature = "firebase")]
pub use firebase::{FirebaseAuthClient, FirebaseConfig};
#[cfg(feature = "supabase")]
pub use supabase::{SupabaseAuthClient, SupabaseConfig};

/// Result type for auth backend operations
pub type Result<T> = std::result::Result<T, BackendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackendError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = BackendError::Unknown("boom".to_string());
        assert!(err.to_string().contains("boom"));
    }
}
