use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{
    ad::{Ad, AdContact, AdSummary, NewAd},
    error::ServerError,
};

pub async fn list_ads_for_game(
    pool: &Pool<Postgres>,
    game_id: Uuid,
) -> Result<Vec<AdSummary>, sqlx::Error> {
    let ads = sqlx::query_as::<_, AdSummary>(
        r#"
        SELECT
            id,
            name,
            years_playing,
            week_days,
            hours_start,
            hours_end,
            use_voice_channel
        FROM "ad"
        WHERE game_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(game_id)
    .fetch_all(pool)
    .await?;

    Ok(ads)
}

pub async fn create_ad(
    pool: &Pool<Postgres>,
    game_id: Uuid,
    new_ad: &NewAd,
) -> Result<Ad, sqlx::Error> {
    let id = Uuid::new_v4();
    let created_at = Utc::now();

    let ad = sqlx::query_as::<_, Ad>(
        r#"
        INSERT INTO "ad" (id, game_id, name, years_playing, week_days, hours_start, hours_end, use_voice_channel, discord, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, game_id, name, years_playing, week_days, hours_start, hours_end, use_voice_channel, discord, created_at
        "#,
    )
    .bind(id)
    .bind(game_id)
    .bind(&new_ad.name)
    .bind(new_ad.years_playing)
    .bind(&new_ad.week_days)
    .bind(new_ad.hours_start)
    .bind(new_ad.hours_end)
    .bind(new_ad.use_voice_channel)
    .bind(&new_ad.discord)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    Ok(ad)
}

pub async fn get_ad_contact(pool: &Pool<Postgres>, ad_id: Uuid) -> Result<String, ServerError> {
    let contact = sqlx::query_as::<_, AdContact>(
        r#"
        SELECT discord
        FROM "ad"
        WHERE id = $1
        "#,
    )
    .bind(ad_id)
    .fetch_optional(pool)
    .await?;

    match contact {
        Some(contact) => Ok(contact.discord),
        None => Err(ServerError::NotFound(format!(
            "Ad with id {} does not exist",
            ad_id
        ))),
    }
}
