//! Browse module - the session facade used by every frontend
//!
//! This module ties the catalog, filter engine, selection store and comparison
//! session together behind one UI-agnostic type. The CLI commands and the
//! interactive shell both drive a `BrowseSession`; nothing outside this module
//! mutates selection or comparison state directly.

pub mod session;

pub use session::BrowseSession;
