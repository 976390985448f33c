//! Shared application domain modules for the offer service.

pub mod context;
pub mod domain;
