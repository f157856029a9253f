//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render gallery cards and navigation chrome. They receive the
//! gallery state signal from the page that owns it.

pub mod gallery_controls;
pub mod project_card;
