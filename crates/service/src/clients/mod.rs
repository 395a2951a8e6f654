pub mod maps;
pub mod prices;

pub use maps::{HttpMapsClient, MapsClient};
pub use prices::{HttpPriceClient, PriceClient};
