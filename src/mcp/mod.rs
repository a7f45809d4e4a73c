//! Model Context Protocol (MCP) shell in front of the analysis core.
//!
//! Speaks JSON-RPC 2.0 over stdio: `initialize`, `ping`, `tools/list`, and
//! `tools/call` are routed to the four contrast tools; notifications are
//! accepted and ignored. Structural argument validation (required fields,
//! enum membership, batch bounds) lives here so the core only ever sees
//! typed, range-checked values.
//!
//! The server holds no state beyond its tool registration table; every
//! call is an independent pure computation.

pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

pub use protocol::RpcError;
pub use server::McpServer;
