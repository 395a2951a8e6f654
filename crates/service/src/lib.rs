//! Service layer for the vehicles system.
//! - `car` holds the core orchestration: CRUD over stored cars plus
//!   read-time enrichment from the pricing and maps collaborators.
//! - `clients` holds the outbound HTTP ports and their reqwest implementations.
//! - `db` holds the SeaORM data access behind the repository port.

pub mod errors;
pub mod car;
pub mod clients;
pub mod db;
#[cfg(test)]
pub mod test_support;
