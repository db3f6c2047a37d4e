//! Gropius: in-memory task board core.
//!
//! This crate provides the state store and gesture protocol behind a
//! single-page task board: items are created through a validated input
//! boundary, grouped into status lanes, and moved between lanes by
//! drag-and-drop. Rendering is left to external collaborators that
//! subscribe to the store and re-derive their views from each snapshot.
//!
//! # Architecture
//!
//! Gropius follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`board`]: Item records, the observable board store, and orchestration
//! - [`transfer`]: Drag-and-drop payload encoding and gesture state machines
//! - [`validation`]: Declarative field constraint evaluation

pub mod board;
pub mod transfer;
pub mod validation;
