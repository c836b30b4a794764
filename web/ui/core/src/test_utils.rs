//! Shared fixtures for unit tests.

use crate::adapter::{ServerAuthor, ServerRecipe};
use crate::config::DEFAULT_IMAGE_URL;
use crate::model::{Category, Comment, CommentId, Difficulty, Recipe, RecipeId, User, UserId};

pub fn sample_user() -> User {
    User {
        id: 1,
        username: "chef_sarah".to_string(),
        email: "sarah@example.com".to_string(),
        full_name: "Chef Sarah".to_string(),
        password: "SecurePass123!".to_string(),
    }
}

pub fn sample_recipe(id: RecipeId, title: &str, description: &str) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        description: description.to_string(),
        cook_time: 20,
        servings: 2,
        difficulty: Difficulty::Easy,
        category: Category::MainCourse,
        rating: 0.0,
        review_count: 0,
        like_count: 0,
        image_url: DEFAULT_IMAGE_URL.to_string(),
        author_id: None,
        author_display_name: "Unknown".to_string(),
        ingredients: vec!["salt".to_string()],
        instructions: vec!["cook".to_string()],
        liked: false,
        comments: Vec::new(),
    }
}

pub fn sample_comment(id: CommentId, author_id: Option<UserId>, text: &str) -> Comment {
    Comment {
        id,
        author_id,
        author_username: "someone".to_string(),
        text: text.to_string(),
        timestamp: "recently".to_string(),
    }
}

pub fn server_recipe(id: RecipeId, title: &str, description: &str, author_id: Option<UserId>) -> ServerRecipe {
    ServerRecipe {
        id,
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        cook_time: Some(20),
        servings: Some(2),
        difficulty: Some("EASY".to_string()),
        category: Some("MAIN_COURSE".to_string()),
        author: author_id.map(|id| ServerAuthor {
            id: Some(id),
            username: Some(format!("user_{}", id)),
            full_name: None,
        }),
        ..ServerRecipe::default()
    }
}
