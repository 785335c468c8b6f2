//! Progressive-enhancement interaction layer for server-rendered blog pages.
//!
//! Compiled to WebAssembly with the `hydrate` feature, this crate attaches to
//! markup the server already rendered: AJAX comment submission, like toggling,
//! search navigation with a debounced input hook, and transient toast notices.
//! Without `hydrate` it builds natively so every controller can be tested
//! against in-memory fakes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bootstrap`] | Finds page anchors and builds the controllers |
//! | [`controllers`] | Comment, like and search behavior plus busy-state guards |
//! | [`net`] | Request/response types and the [`net::api::HttpClient`] seam |
//! | [`notify`] | Supersede-on-new toast presenter |
//! | [`timer`] | Scheduler seam and the input debouncer |
//! | [`page`] | Element handle traits the controllers act through |
//! | [`config`] | Endpoints, selectors, copy and timings, with JSON overrides |
//! | [`util`] | HTML escaping, comment markup, injected stylesheet |
//! | [`consts`] | Defaults for everything in [`config`] |
//! | `dom` | (`hydrate`) start function and `web-sys` bindings |

pub mod bootstrap;
pub mod config;
pub mod consts;
pub mod controllers;
pub mod net;
pub mod notify;
pub mod page;
pub mod timer;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(test)]
mod testing;
