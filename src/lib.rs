//! PageSnap — snapshot the paragraph text of any web page.
//!
//! Two entry points share two leaf capabilities. The [`fetch`] module GETs
//! a URL and returns its body; the [`extract`] module pulls the text out of
//! every paragraph element. [`snapshot`] composes the two, and [`server`]
//! puts a form in front of them.

pub mod extract;
pub mod fetch;
pub mod server;
pub mod snapshot;
