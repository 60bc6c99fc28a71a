//! Infrastructure adapters: HTTP transport, persisted client state,
//! telemetry bootstrap.

pub mod error;
pub mod http;
pub mod storage;
pub mod telemetry;
