//! neon-ui - Stores and view components for NEONBEATS
//!
//! Contains display types, stores, and pure view components. Views never
//! fetch data; the web crate wires stores and callbacks into them.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
