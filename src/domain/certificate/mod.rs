//! Certificate domain — TLS certificate/key pairs and their SNI host names.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{Certificate, CertificateQuery, CertificateRequest, Certificates};
