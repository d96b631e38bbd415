//! Networking modules for the processing-service REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the three REST calls the UI makes, and `types` defines the
//! submission wire schema those calls share.

pub mod api;
pub mod types;
