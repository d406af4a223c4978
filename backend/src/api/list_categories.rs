use common::category::CategoryRecord;
use sqlx::MySqlPool;

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
    parent_id: Option<i32>,
}

pub async fn get_all_categories(pool: &MySqlPool) -> anyhow::Result<Vec<CategoryRecord>> {
    let rows = sqlx::query_as::<_, CategoryRow>("SELECT id, name, parent_id FROM categories")
        .fetch_all(pool)
        .await?;
    let result = rows
        .into_iter()
        .map(|row| CategoryRecord {
            id: row.id,
            name: row.name,
            parent_id: row.parent_id,
        })
        .collect();
    Ok(result)
}
