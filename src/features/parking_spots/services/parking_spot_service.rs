use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::parking_spots::dtos::ParkingSpotListDto;
use crate::features::parking_spots::models::{CreateParkingSpotInput, ParkingSpot};
use crate::features::parking_spots::repositories::ParkingSpotRepository;

/// Service for parking spot operations
pub struct ParkingSpotService {
    repository: Arc<dyn ParkingSpotRepository>,
}

impl ParkingSpotService {
    pub fn new(repository: Arc<dyn ParkingSpotRepository>) -> Self {
        Self { repository }
    }

    /// Create a parking spot; missing description and paid flag get their defaults
    pub async fn create(&self, input: CreateParkingSpotInput) -> Result<ParkingSpot> {
        let spot = self.repository.create(input).await?;
        tracing::info!("Parking spot created: id={}, name={}", spot.base.id, spot.name);
        Ok(spot)
    }

    /// List every parking spot
    pub async fn list(&self) -> Result<ParkingSpotListDto> {
        let parking_spots = self.repository.list_parking_spots().await?;
        Ok(ParkingSpotListDto { parking_spots })
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repository.delete(id).await?;
        tracing::info!("Parking spot deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::InMemoryParkingSpotRepository;

    fn service() -> ParkingSpotService {
        ParkingSpotService::new(Arc::new(InMemoryParkingSpotRepository::default()))
    }

    fn lot_a() -> CreateParkingSpotInput {
        CreateParkingSpotInput {
            name: "Lot A".to_string(),
            description: None,
            latitude: 45.0,
            longitude: -93.0,
            paid: None,
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let spot = service().create(lot_a()).await.unwrap();

        assert_eq!(spot.description, None);
        assert!(!spot.paid);
        assert!(Uuid::parse_str(&spot.base.id).is_ok());
        assert_eq!(spot.base.created_at, spot.base.updated_at);
    }

    #[tokio::test]
    async fn test_list_wraps_spots_in_container() {
        let service = service();
        let first = service.create(lot_a()).await.unwrap();
        let second = service
            .create(CreateParkingSpotInput {
                name: "Garage B".to_string(),
                description: Some("Underground".to_string()),
                paid: Some(true),
                ..lot_a()
            })
            .await
            .unwrap();

        let list = service.list().await.unwrap();
        assert_eq!(list.parking_spots, vec![first, second]);
    }

    #[tokio::test]
    async fn test_delete_missing_spot_is_not_found() {
        let err = service().delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_spot() {
        let service = service();
        let spot = service.create(lot_a()).await.unwrap();

        service
            .delete(Uuid::parse_str(&spot.base.id).unwrap())
            .await
            .unwrap();

        assert!(service.list().await.unwrap().parking_spots.is_empty());
    }
}
