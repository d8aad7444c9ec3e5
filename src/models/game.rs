use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub banner_url: String,
    pub title: String,
    pub call_to_action: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct AdCount {
    pub ads: i64,
}

/// Game as listed on `/games`, serialized with an `_count.ads` field.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct GameWithAdCount {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub game: Game,
    #[serde(rename = "_count")]
    #[sqlx(flatten)]
    pub count: AdCount,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn listed_game_serializes_with_ad_count() {
        let id = Uuid::new_v4();
        let listed = GameWithAdCount {
            game: Game {
                id,
                name: "Dota 2".into(),
                banner_url: "https://cdn.example.com/dota2.jpg".into(),
                title: "Dota 2".into(),
                call_to_action: "Find your duo".into(),
            },
            count: AdCount { ads: 4 },
        };

        let value = serde_json::to_value(&listed).unwrap();
        assert_eq!(
            value,
            json!({
                "id": id,
                "name": "Dota 2",
                "bannerUrl": "https://cdn.example.com/dota2.jpg",
                "title": "Dota 2",
                "callToAction": "Find your duo",
                "_count": { "ads": 4 },
            })
        );
    }
}
