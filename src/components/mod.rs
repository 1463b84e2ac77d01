//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome and access-control surfaces while
//! reading shared state from Leptos context providers.

pub mod admin_navbar;
pub mod footer;
pub mod guard;
pub mod navbar;
pub mod profile_gate;
pub mod stat_card;
pub mod user_dropdown;
