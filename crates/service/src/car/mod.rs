pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{Car, CarDetails, Condition, Location};
pub use repository::{CarRepository, SeaOrmCarRepository};
pub use service::CarService;

/// Concrete service as wired at process start: SeaORM storage plus the two
/// reqwest collaborator clients.
pub type AppCarService =
    CarService<SeaOrmCarRepository, crate::clients::HttpPriceClient, crate::clients::HttpMapsClient>;
