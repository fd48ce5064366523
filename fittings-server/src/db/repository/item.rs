//! Item Repository

use super::{RepoError, RepoResult};
use shared::models::{Item, ItemCreate, ItemUpdate};
use sqlx::SqlitePool;

pub async fn find_by_qr_id(pool: &SqlitePool, qr_id: &str) -> RepoResult<Option<Item>> {
    let item = sqlx::query_as::<_, Item>(
        "SELECT id, qr_id, type, warranty, date_of_manufacture, manufacturer, status FROM items WHERE qr_id = ?",
    )
    .bind(qr_id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

/// One page in insertion order
pub async fn find_page(pool: &SqlitePool, skip: i64, limit: i64) -> RepoResult<Vec<Item>> {
    let items = sqlx::query_as::<_, Item>(
        "SELECT id, qr_id, type, warranty, date_of_manufacture, manufacturer, status FROM items ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Insert inside a transaction; nothing is written unless the insert succeeds
pub async fn create(pool: &SqlitePool, data: ItemCreate) -> RepoResult<Item> {
    let mut tx = pool.begin().await?;

    let item = sqlx::query_as::<_, Item>(
        "INSERT INTO items (qr_id, type, warranty, date_of_manufacture, manufacturer, status) VALUES (?, ?, ?, ?, ?, ?) RETURNING id, qr_id, type, warranty, date_of_manufacture, manufacturer, status",
    )
    .bind(&data.qr_id)
    .bind(data.fitting_type)
    .bind(&data.warranty)
    .bind(data.date_of_manufacture)
    .bind(&data.manufacturer)
    .bind(&data.status)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| RepoError::from_write(e, &data.qr_id))?;

    tx.commit().await?;
    Ok(item)
}

/// Apply a patch; absent fields keep their stored value
pub async fn update(pool: &SqlitePool, qr_id: &str, data: ItemUpdate) -> RepoResult<Item> {
    let item = sqlx::query_as::<_, Item>(
        "UPDATE items SET warranty = COALESCE(?1, warranty), manufacturer = COALESCE(?2, manufacturer), status = COALESCE(?3, status) WHERE qr_id = ?4 RETURNING id, qr_id, type, warranty, date_of_manufacture, manufacturer, status",
    )
    .bind(data.warranty)
    .bind(data.manufacturer)
    .bind(data.status)
    .bind(qr_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| RepoError::from_write(e, qr_id))?;

    item.ok_or_else(|| RepoError::NotFound(format!("Item {qr_id} not found")))
}

pub async fn delete(pool: &SqlitePool, qr_id: &str) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM items WHERE qr_id = ?")
        .bind(qr_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Item {qr_id} not found")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use chrono::NaiveDate;
    use shared::models::FittingType;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    fn new_item(qr_id: &str, fitting_type: FittingType, date: (i32, u32, u32)) -> ItemCreate {
        ItemCreate {
            qr_id: qr_id.to_string(),
            fitting_type,
            warranty: "2 years".to_string(),
            date_of_manufacture: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            manufacturer: "Acme Rail".to_string(),
            status: "active".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;
        let data = new_item("QR-001", FittingType::Liner, (2024, 1, 15));

        let created = create(&pool, data.clone()).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.qr_id, "QR-001");
        assert_eq!(created.fitting_type, FittingType::Liner);
        assert_eq!(created.date_of_manufacture, data.date_of_manufacture);

        let found = find_by_qr_id(&pool, "QR-001").await.unwrap().unwrap();
        assert_eq!(found, created);
        assert!(find_by_qr_id(&pool, "QR-404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_qr_id_is_classified() {
        let pool = test_pool().await;
        create(&pool, new_item("QR-DUP", FittingType::Sleeper, (2024, 3, 1)))
            .await
            .unwrap();

        let err = create(&pool, new_item("QR-DUP", FittingType::RailPad, (2024, 3, 2)))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(ref key) if key == "QR-DUP"));

        // The failed insert was rolled back and the original row kept
        assert_eq!(count(&pool).await.unwrap(), 1);
        let kept = find_by_qr_id(&pool, "QR-DUP").await.unwrap().unwrap();
        assert_eq!(kept.fitting_type, FittingType::Sleeper);
    }

    #[tokio::test]
    async fn test_check_constraint_rejects_unknown_type() {
        let pool = test_pool().await;
        let err = sqlx::query(
            "INSERT INTO items (qr_id, type, warranty, date_of_manufacture, manufacturer) \
             VALUES ('QR-X', 'bolt', '-', '2024-01-01', 'Acme')",
        )
        .execute(&pool)
        .await
        .unwrap_err();
        assert!(matches!(
            RepoError::from_write(err, "QR-X"),
            RepoError::Constraint(_)
        ));
    }

    #[tokio::test]
    async fn test_find_page_in_insertion_order() {
        let pool = test_pool().await;
        for i in 0..5 {
            create(
                &pool,
                new_item(&format!("QR-{i}"), FittingType::ElasticRailClip, (2024, 1, 1)),
            )
            .await
            .unwrap();
        }

        let page = find_page(&pool, 0, 2).await.unwrap();
        assert_eq!(
            page.iter().map(|i| i.qr_id.as_str()).collect::<Vec<_>>(),
            ["QR-0", "QR-1"]
        );

        let tail = find_page(&pool, 4, 2).await.unwrap();
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].qr_id, "QR-4");

        assert!(find_page(&pool, 10, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_only_touches_patched_fields() {
        let pool = test_pool().await;
        let created = create(&pool, new_item("QR-U", FittingType::RailPad, (2024, 2, 1)))
            .await
            .unwrap();

        let patch = ItemUpdate {
            status: Some("retired".into()),
            ..Default::default()
        };
        let updated = update(&pool, "QR-U", patch).await.unwrap();
        assert_eq!(updated.status, "retired");
        assert_eq!(
            Item {
                status: created.status.clone(),
                ..updated.clone()
            },
            created
        );

        // Empty patch returns the stored row unchanged
        let same = update(&pool, "QR-U", ItemUpdate::default()).await.unwrap();
        assert_eq!(same, updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let pool = test_pool().await;
        let err = update(&pool, "QR-404", ItemUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        create(&pool, new_item("QR-D", FittingType::Liner, (2024, 5, 5)))
            .await
            .unwrap();

        delete(&pool, "QR-D").await.unwrap();
        assert!(find_by_qr_id(&pool, "QR-D").await.unwrap().is_none());
        assert!(matches!(
            delete(&pool, "QR-D").await.unwrap_err(),
            RepoError::NotFound(_)
        ));
    }
}
