//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session token and the route guard are kept as pure state modules so
//! their transitions can be unit tested without a browser; the `SessionGuard`
//! component wires them to the router.

pub mod guard;
pub mod session;
