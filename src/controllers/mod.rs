//! Interaction controllers, one per page surface.
//!
//! DESIGN
//! ======
//! Each controller owns its element handles and runs one request lifecycle at
//! a time per element. Handlers return an outcome enum describing which path
//! was taken; the user-visible effects (DOM updates, toasts) have already been
//! applied by the time it is returned.

pub mod comment;
pub mod guard;
pub mod like;
pub mod search;
