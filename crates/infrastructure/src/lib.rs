//! Tern DNS Infrastructure Layer
pub mod dns;
pub mod zones;
