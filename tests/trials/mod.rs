//! Guarded-counter trial tests
