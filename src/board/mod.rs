//! Board store subsystem.
//!
//! This module holds the single source of truth for task board items:
//! creating records through the validated intake boundary, notifying
//! subscribed renderers with independent snapshots after every mutation,
//! and moving records between status lanes. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
