//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! A page owns route-scoped state and delegates rendering details to
//! `components`.

pub mod portfolio;
