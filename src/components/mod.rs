//! Reusable UI components for the submission page.
//!
//! ARCHITECTURE
//! ============
//! Components render props or shared context; the page owns orchestration
//! (loading, submitting, polling) and hands results down.

pub mod pagination;
pub mod submission_card;
pub mod submission_form;
