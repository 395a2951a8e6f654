use std::sync::Arc;

use tracing::{info, instrument};

use crate::car::repository::CarRepository;
use crate::car::Car;
use crate::clients::{MapsClient, PriceClient};
use crate::errors::ServiceError;

/// Create, read, update and delete car records, gathering price and address
/// data from the collaborators when a single car is requested.
///
/// All collaborators are constructor-injected ports so the orchestration can
/// be exercised without a database or live HTTP services.
pub struct CarService<R, P, M> {
    repo: Arc<R>,
    pricing: Arc<P>,
    maps: Arc<M>,
}

impl<R, P, M> CarService<R, P, M>
where
    R: CarRepository,
    P: PriceClient,
    M: MapsClient,
{
    pub fn new(repo: Arc<R>, pricing: Arc<P>, maps: Arc<M>) -> Self {
        Self { repo, pricing, maps }
    }

    /// All stored cars, unenriched: no price, no address.
    pub async fn list(&self) -> Result<Vec<Car>, ServiceError> {
        let rows = self.repo.find_all().await?;
        rows.into_iter().map(Car::from_model).collect()
    }

    /// A single car with price and address merged in from the collaborators.
    /// Pricing is called first, maps second; either failure propagates.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Car, ServiceError> {
        let row = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::car_not_found(id))?;
        let mut car = Car::from_model(row)?;

        let quote = self.pricing.price_for(id).await?;
        car.price = Some(format!("{:.2}", quote.price));

        let address = self.maps.address_for(car.location.lat, car.location.lon).await?;
        car.location.address = Some(address.address);
        car.location.city = Some(address.city);
        car.location.state = Some(address.state);
        car.location.zip = Some(address.zip);

        Ok(car)
    }

    /// Create or update, based on whether the input carries an id.
    /// An update overwrites details and location only; condition and audit
    /// fields keep their stored values.
    pub async fn save(&self, input: Car) -> Result<Car, ServiceError> {
        if let Some(id) = input.id {
            let existing = self
                .repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ServiceError::car_not_found(id))?;
            let updated = self
                .repo
                .update(existing.id, &input.details, input.location.lat, input.location.lon)
                .await?;
            info!(id, "car_updated");
            return Car::from_model(updated);
        }
        let created = self.repo.insert(&input).await?;
        info!(id = created.id, "car_created");
        Car::from_model(created)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::car_not_found(id));
        }
        info!(id, "car_deleted");
        Ok(())
    }
}
