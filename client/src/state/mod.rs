//! Client-side state for the portfolio gallery.
//!
//! DESIGN
//! ======
//! `projects` holds the read-only data contract; `gallery` holds everything
//! that changes while the page is open.

pub mod gallery;
pub mod projects;
