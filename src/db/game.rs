use sqlx::{Pool, Postgres};

use crate::models::game::GameWithAdCount;

pub async fn list_games(pool: &Pool<Postgres>) -> Result<Vec<GameWithAdCount>, sqlx::Error> {
    let games = sqlx::query_as::<_, GameWithAdCount>(
        r#"
        SELECT
            g.id,
            g.name,
            g.banner_url,
            g.title,
            g.call_to_action,
            COUNT(a.id) AS ads
        FROM "game" g
        LEFT JOIN "ad" a ON a.game_id = g.id
        GROUP BY g.id
        ORDER BY g.name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(games)
}
