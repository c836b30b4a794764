//! Server record shapes and their mapping onto the UI model.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::{Category, Comment, CommentId, Difficulty, Recipe, RecipeId, UserId};

pub const UNKNOWN_AUTHOR: &str = "Unknown";
pub const ANONYMOUS_REVIEWER: &str = "user";
pub const MISSING_TIMESTAMP: &str = "recently";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerAuthor {
    pub id: Option<UserId>,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerReview {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<CommentId>,
    #[serde(deserialize_with = "lenient_count")]
    pub rating: Option<u32>,
    pub comment: Option<String>,
    pub created_at: Option<String>,
    pub user: Option<ServerAuthor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerRecipe {
    pub id: RecipeId,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_count")]
    pub cook_time: Option<u32>,
    #[serde(deserialize_with = "lenient_count")]
    pub servings: Option<u32>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub average_rating: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub review_count: Option<u32>,
    #[serde(deserialize_with = "lenient_count")]
    pub like_count: Option<u32>,
    pub image: Option<String>,
    pub author: Option<ServerAuthor>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub reviews: Option<Vec<ServerReview>>,
}

/// Numbers may arrive as floats, numeric strings or `null`. Anything
/// unreadable becomes `None` instead of failing the record.
fn as_number(value: Option<Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_number(Option::<Value>::deserialize(deserializer)?))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = as_number(Option::<Value>::deserialize(deserializer)?);
    Ok(number.filter(|n| *n >= 0.0).map(|n| n.min(u32::MAX as f64) as u32))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Decodes one list element. Records without a usable `id` are dropped.
pub fn decode_record(value: Value) -> Option<ServerRecipe> {
    match serde_json::from_value::<ServerRecipe>(value) {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!("Skipping unreadable recipe record: {}", e);
            None
        }
    }
}

/// Decodes a list body record by record; one bad record does not sink the
/// rest.
pub fn decode_records(values: Vec<Value>) -> Vec<ServerRecipe> {
    values.into_iter().filter_map(decode_record).collect()
}

/// `MAIN_COURSE` -> `Main Course`.
pub fn display_label(raw: &str) -> String {
    raw.to_lowercase()
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn round_rating(average: Option<f64>) -> f64 {
    match average {
        Some(value) if value.is_finite() => (value * 10.0).round() / 10.0,
        _ => 0.0,
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub fn author_display_name(author: Option<&ServerAuthor>) -> String {
    author
        .and_then(|a| non_empty(&a.full_name).or_else(|| non_empty(&a.username)))
        .unwrap_or(UNKNOWN_AUTHOR)
        .to_string()
}

fn to_comment(review: ServerReview) -> Comment {
    let user = review.user.unwrap_or_default();
    Comment {
        id: review.id.unwrap_or_default(),
        author_id: user.id,
        author_username: user.username.filter(|u| !u.is_empty()).unwrap_or_else(|| ANONYMOUS_REVIEWER.to_string()),
        text: review.comment.unwrap_or_default(),
        timestamp: review.created_at.filter(|t| !t.is_empty()).unwrap_or_else(|| MISSING_TIMESTAMP.to_string()),
    }
}

/// Maps an API record to the UI shape. Never fails; absent fields get defaults.
pub fn to_recipe(server: ServerRecipe, default_image: &str) -> Recipe {
    let difficulty = server
        .difficulty
        .as_deref()
        .and_then(|raw| Difficulty::from_label(&display_label(raw)))
        .unwrap_or_default();
    let category = server
        .category
        .as_deref()
        .and_then(|raw| Category::from_label(&display_label(raw)))
        .unwrap_or_default();
    let reviews = server.reviews.unwrap_or_default();
    let review_count = server.review_count.unwrap_or(reviews.len() as u32);

    Recipe {
        id: server.id,
        title: server.title.unwrap_or_default(),
        description: server.description.unwrap_or_default(),
        cook_time: server.cook_time.unwrap_or_default(),
        servings: server.servings.unwrap_or_default(),
        difficulty,
        category,
        rating: round_rating(server.average_rating),
        review_count,
        like_count: server.like_count.unwrap_or_default(),
        image_url: server
            .image
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| default_image.to_string()),
        author_id: server.author.as_ref().and_then(|a| a.id),
        author_display_name: author_display_name(server.author.as_ref()),
        ingredients: server.ingredients.unwrap_or_default(),
        instructions: server.instructions.unwrap_or_default(),
        liked: false,
        comments: reviews.into_iter().map(to_comment).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_IMAGE_URL;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Recipe {
        let server: ServerRecipe = serde_json::from_value(value).unwrap();
        to_recipe(server, DEFAULT_IMAGE_URL)
    }

    #[rstest]
    #[case("MAIN_COURSE", "Main Course")]
    #[case("DESSERT", "Dessert")]
    #[case("EASY", "Easy")]
    #[case("some_NEW_value", "Some New Value")]
    fn labels_are_title_cased(#[case] raw: &str, #[case] label: &str) {
        assert_eq!(display_label(raw), label);
    }

    #[test]
    fn every_category_maps_to_its_label() {
        for category in Category::ALL {
            let label = display_label(category.server_value());
            assert_eq!(label, category.label());
            assert_eq!(Category::from_label(&label), Some(category));
        }
    }

    #[test]
    fn odd_numbers_fall_back_instead_of_failing() {
        let recipe = parse(json!({
            "id": 4,
            "cookTime": 12.5,
            "servings": "3",
            "averageRating": "4.26",
            "reviewCount": null,
            "likeCount": -2,
            "reviews": [{ "id": "x", "rating": 4.5, "comment": "Nice" }]
        }));
        assert_eq!(recipe.cook_time, 12);
        assert_eq!(recipe.servings, 3);
        assert_eq!(recipe.rating, 4.3);
        assert_eq!(recipe.review_count, 1);
        assert_eq!(recipe.like_count, 0);
        assert_eq!(recipe.comments[0].id, 0);
        assert_eq!(recipe.comments[0].text, "Nice");
    }

    #[test]
    fn records_without_id_are_skipped() {
        let records = decode_records(vec![
            json!({ "id": 1, "title": "Toast" }),
            json!({ "id": null, "title": "Ghost" }),
            json!("not a record"),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("Toast"));
    }

    #[test]
    fn missing_rating_is_zero() {
        let recipe = parse(json!({ "id": 1, "title": "Toast" }));
        assert_eq!(recipe.rating, 0.0);
    }

    #[rstest]
    #[case(4.26, 4.3)]
    #[case(3.0, 3.0)]
    #[case(4.449, 4.4)]
    fn rating_rounds_to_one_decimal(#[case] average: f64, #[case] rounded: f64) {
        assert_eq!(round_rating(Some(average)), rounded);
    }

    #[test]
    fn fills_defaults_for_sparse_record() {
        let recipe = parse(json!({ "id": 9 }));
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.category, Category::MainCourse);
        assert_eq!(recipe.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(recipe.author_display_name, UNKNOWN_AUTHOR);
        assert_eq!(recipe.author_id, None);
        assert!(recipe.comments.is_empty());
        assert!(!recipe.liked);
    }

    #[test]
    fn maps_full_record() {
        let recipe = parse(json!({
            "id": 3,
            "title": "Shakshuka",
            "description": "Eggs poached in tomato sauce",
            "cookTime": 25,
            "servings": 4,
            "difficulty": "MEDIUM",
            "category": "BREAKFAST",
            "averageRating": 4.67,
            "reviewCount": 7,
            "likeCount": 12,
            "image": "https://img.example.com/shakshuka.jpg",
            "author": { "id": 2, "username": "baker_mike", "fullName": "Baker Mike" },
            "ingredients": ["eggs", "tomatoes"],
            "instructions": ["simmer", "crack eggs"],
            "reviews": [
                { "id": 10, "rating": 5, "comment": "Great", "createdAt": "2025-11-30T10:00:00", "user": { "id": 1, "username": "chef_sarah" } },
                { "id": 11, "rating": 4, "comment": "Nice" }
            ]
        }));

        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.category, Category::Breakfast);
        assert_eq!(recipe.rating, 4.7);
        assert_eq!(recipe.review_count, 7);
        assert_eq!(recipe.like_count, 12);
        assert_eq!(recipe.author_id, Some(2));
        assert_eq!(recipe.author_display_name, "Baker Mike");
        assert_eq!(recipe.comments.len(), 2);
        assert_eq!(recipe.comments[0].author_username, "chef_sarah");
        assert_eq!(recipe.comments[0].author_id, Some(1));
        assert_eq!(recipe.comments[1].author_username, ANONYMOUS_REVIEWER);
        assert_eq!(recipe.comments[1].timestamp, MISSING_TIMESTAMP);
    }

    #[test]
    fn author_name_prefers_full_name_then_username() {
        let only_username = ServerAuthor { id: Some(1), username: Some("chef_sarah".into()), full_name: None };
        assert_eq!(author_display_name(Some(&only_username)), "chef_sarah");

        let blank_full_name = ServerAuthor { full_name: Some(String::new()), ..only_username.clone() };
        assert_eq!(author_display_name(Some(&blank_full_name)), "chef_sarah");

        assert_eq!(author_display_name(None), UNKNOWN_AUTHOR);
    }

    #[test]
    fn review_count_falls_back_to_review_list() {
        let recipe = parse(json!({ "id": 4, "reviews": [{ "comment": "a" }, { "comment": "b" }] }));
        assert_eq!(recipe.review_count, 2);
    }

    #[test]
    fn unknown_enum_values_use_defaults() {
        let recipe = parse(json!({ "id": 5, "difficulty": "EXTREME", "category": "DRINK" }));
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.category, Category::MainCourse);
    }
}
