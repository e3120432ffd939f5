//! Domain modules containing business logic.
//!
//! Each domain is a bounded context with its own types, errors, and
//! services. The only domain in this server is `tools`.

pub mod tools;
