use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::parking_spots::models::{
    CreateParkingSpotInput, ParkingSpot, ParkingSpotRow,
};
use crate::shared::models::BaseModel;
use crate::shared::validation::validated_record;

#[async_trait]
pub trait ParkingSpotRepository: Send + Sync {
    async fn create(&self, input: CreateParkingSpotInput) -> Result<ParkingSpot>;
    async fn list_parking_spots(&self) -> Result<Vec<ParkingSpot>>;
    /// Fails with `NotFound` when no spot has this id
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Map a stored record to the domain model, re-validating its shape
pub fn to_domain(row: ParkingSpotRow) -> Result<ParkingSpot> {
    validated_record(ParkingSpot {
        base: BaseModel::new(row.id, row.created_at, row.updated_at),
        name: row.name,
        description: row.description,
        latitude: row.latitude,
        longitude: row.longitude,
        paid: row.paid,
    })
}

pub struct PgParkingSpotRepository {
    pool: PgPool,
}

impl PgParkingSpotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParkingSpotRepository for PgParkingSpotRepository {
    async fn create(&self, input: CreateParkingSpotInput) -> Result<ParkingSpot> {
        let row = sqlx::query_as::<_, ParkingSpotRow>(
            r#"
            INSERT INTO parking_spots (name, description, latitude, longitude, paid)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, latitude, longitude, paid, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(input.paid.unwrap_or(false))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create parking spot: {:?}", e);
            AppError::Database(e)
        })?;

        to_domain(row)
    }

    async fn list_parking_spots(&self) -> Result<Vec<ParkingSpot>> {
        let rows = sqlx::query_as::<_, ParkingSpotRow>(
            r#"
            SELECT id, name, description, latitude, longitude, paid, created_at, updated_at
            FROM parking_spots
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list parking spots: {:?}", e);
            AppError::Database(e)
        })?;

        rows.into_iter().map(to_domain).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM parking_spots WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete parking spot: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Parking spot with id {} not found",
                id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validated;
    use chrono::Utc;

    fn row(latitude: f64, longitude: f64) -> ParkingSpotRow {
        let now = Utc::now();
        ParkingSpotRow {
            id: Uuid::new_v4(),
            name: "Lot A".to_string(),
            description: None,
            latitude,
            longitude,
            paid: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_to_domain_renders_iso_dates() {
        let record = row(45.0, -93.0);
        let id = record.id;

        let spot = to_domain(record).unwrap();

        assert_eq!(spot.base.id, id.to_string());
        assert_eq!(spot.base.created_at, spot.base.updated_at);
        assert_eq!(spot.description, None);
        assert!(!spot.paid);
    }

    #[test]
    fn test_to_domain_result_revalidates() {
        let spot = to_domain(row(-90.0, 180.0)).unwrap();
        assert!(validated(spot).is_ok());
    }

    #[test]
    fn test_to_domain_rejects_out_of_range_record() {
        let err = to_domain(row(91.0, 0.0)).unwrap_err();
        assert!(matches!(err, AppError::Internal(ref message) if message.contains("latitude")));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_create_list_delete(pool: PgPool) -> anyhow::Result<()> {
        let repo = PgParkingSpotRepository::new(pool);

        let created = repo
            .create(CreateParkingSpotInput {
                name: "Lot A".to_string(),
                description: None,
                latitude: 45.0,
                longitude: -93.0,
                paid: None,
            })
            .await?;
        assert_eq!(created.description, None);
        assert!(!created.paid);
        assert_eq!(created.base.created_at, created.base.updated_at);

        let spots = repo.list_parking_spots().await?;
        assert_eq!(spots, vec![created.clone()]);

        let id = Uuid::parse_str(&created.base.id)?;
        repo.delete(id).await?;
        assert!(repo.list_parking_spots().await?.is_empty());

        let err = repo.delete(id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        Ok(())
    }
}
