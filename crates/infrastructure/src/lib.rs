//! DNSView Infrastructure Layer
pub mod repositories;
pub mod system;
