//! Stub reverse-geocoding service: maps a coordinate to a canned postal
//! address. No real geocoding happens; the pick is a deterministic function
//! of the coordinate so repeated reads agree.

pub mod repository;
pub mod routes;
pub mod startup;

pub use startup::run;
