//! API layer: handlers, DTOs, the middleware chain and the identity carrier.

pub mod dto;
pub mod handlers;
pub mod identity;
pub mod middleware;
