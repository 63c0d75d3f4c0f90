//! Inbound adapters that translate external requests into domain service
//! calls while keeping framework details at the edge.
//!
//! The game hub has a single transport: the REST adapter in [`http`].

pub mod http;
