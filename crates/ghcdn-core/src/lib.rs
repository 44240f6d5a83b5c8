//! Rewrite GitHub file links into CDN mirror links.
//!
//! [`link`] parses the source link, [`template`] fills mirror templates,
//! [`store`] keeps the user's custom templates in [`storage`], and [`app`]
//! ties them together into one state object a front end can drive.

pub mod app;
pub mod config;
pub mod error;
pub mod link;
pub mod logging;
pub mod present;
pub mod storage;
pub mod store;
pub mod template;

pub use error::Error;
