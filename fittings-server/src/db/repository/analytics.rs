//! Analytics read model
//!
//! Three grouped aggregations over `items`, run inside one read transaction so
//! the type, manufacturer and monthly numbers describe the same snapshot.

use super::RepoResult;
use shared::models::{AnalyticsSummary, FittingType, MonthlyCount};
use sqlx::{SqliteConnection, SqlitePool};

async fn count_by_type(conn: &mut SqliteConnection) -> RepoResult<Vec<(FittingType, i64)>> {
    let rows = sqlx::query_as::<_, (FittingType, i64)>(
        "SELECT type, COUNT(id) FROM items GROUP BY type",
    )
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

async fn count_by_manufacturer(conn: &mut SqliteConnection) -> RepoResult<Vec<(String, i64)>> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        "SELECT manufacturer, COUNT(id) FROM items GROUP BY manufacturer",
    )
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

async fn monthly_trend(conn: &mut SqliteConnection) -> RepoResult<Vec<MonthlyCount>> {
    let rows = sqlx::query_as::<_, MonthlyCount>(
        "SELECT strftime('%Y-%m', date_of_manufacture) AS month, COUNT(id) AS count FROM items GROUP BY month ORDER BY month",
    )
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

pub async fn summary(pool: &SqlitePool) -> RepoResult<AnalyticsSummary> {
    let mut tx = pool.begin().await?;

    let by_type = count_by_type(&mut tx).await?;
    let by_manufacturer = count_by_manufacturer(&mut tx).await?;
    let trend = monthly_trend(&mut tx).await?;

    tx.commit().await?;

    Ok(AnalyticsSummary::from_groups(by_type, by_manufacturer, trend))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::item;
    use chrono::NaiveDate;
    use shared::models::ItemCreate;

    async fn seed(pool: &SqlitePool, qr_id: &str, t: FittingType, maker: &str, date: &str) {
        item::create(
            pool,
            ItemCreate {
                qr_id: qr_id.into(),
                fitting_type: t,
                warranty: "1 year".into(),
                date_of_manufacture: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                manufacturer: maker.into(),
                status: "active".into(),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_empty_table() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let summary = summary(&pool).await.unwrap();

        assert_eq!(summary.type_count.len(), 4);
        assert_eq!(summary.total_items(), 0);
        assert!(summary.manufacturer_count.is_empty());
        assert!(summary.monthly_trend.is_empty());
    }

    #[tokio::test]
    async fn test_grouped_counts() {
        let pool = DbService::in_memory().await.unwrap().pool;
        seed(&pool, "A", FittingType::Liner, "Acme", "2024-01-15").await;
        seed(&pool, "B", FittingType::Liner, "Acme", "2024-01-20").await;
        seed(&pool, "C", FittingType::Sleeper, "Birla", "2024-02-01").await;

        let summary = summary(&pool).await.unwrap();

        assert_eq!(summary.type_count[&FittingType::Liner], 2);
        assert_eq!(summary.type_count[&FittingType::Sleeper], 1);
        assert_eq!(summary.type_count[&FittingType::RailPad], 0);
        assert_eq!(summary.type_count[&FittingType::ElasticRailClip], 0);
        assert_eq!(summary.total_items(), item::count(&pool).await.unwrap());

        assert_eq!(summary.manufacturer_count.len(), 2);
        assert_eq!(summary.manufacturer_count["Acme"], 2);
        assert_eq!(summary.manufacturer_count["Birla"], 1);

        assert_eq!(
            summary.monthly_trend,
            vec![
                MonthlyCount {
                    month: "2024-01".into(),
                    count: 2
                },
                MonthlyCount {
                    month: "2024-02".into(),
                    count: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_trend_sorted_across_years() {
        let pool = DbService::in_memory().await.unwrap().pool;
        seed(&pool, "A", FittingType::RailPad, "Acme", "2025-03-01").await;
        seed(&pool, "B", FittingType::RailPad, "Acme", "2023-12-31").await;
        seed(&pool, "C", FittingType::RailPad, "Acme", "2024-06-10").await;

        let months: Vec<String> = summary(&pool)
            .await
            .unwrap()
            .monthly_trend
            .into_iter()
            .map(|m| m.month)
            .collect();
        assert_eq!(months, ["2023-12", "2024-06", "2025-03"]);
    }
}
