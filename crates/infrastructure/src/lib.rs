//! Portare DNS Infrastructure Layer
pub mod dns;
pub mod repositories;
