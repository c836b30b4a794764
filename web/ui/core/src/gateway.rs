use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::adapter::{self, ServerRecipe};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Category, Difficulty, Recipe, RecipeDraft, RecipeId, UserId};
use crate::store::{DataStore, FetchState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: UserId,
}

/// Body sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    pub title: String,
    pub description: String,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRef>,
}

impl RecipePayload {
    pub fn from_draft(draft: &RecipeDraft, default_image: &str) -> Self {
        let image = draft.image.trim();
        Self {
            id: None,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            cook_time: draft.cook_time_minutes(),
            servings: draft.servings_count(),
            difficulty: draft.difficulty,
            category: draft.category,
            ingredients: draft.ingredient_lines(),
            instructions: draft.instruction_lines(),
            image: if image.is_empty() { default_image.to_string() } else { image.to_string() },
            author: None,
        }
    }

    pub fn with_id(mut self, id: RecipeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_author(mut self, author_id: UserId) -> Self {
        self.author = Some(AuthorRef { id: author_id });
        self
    }
}

/// Raw transport to the recipes API.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait RecipeApi {
    async fn list_recipes(&self) -> Result<Vec<ServerRecipe>>;
    async fn create_recipe(&self, payload: &RecipePayload) -> Result<()>;
    /// Raw response body; `Value::Null` when the server sent nothing usable.
    async fn update_recipe(&self, id: RecipeId, payload: &RecipePayload) -> Result<serde_json::Value>;
    /// Succeeds when the recipe is already gone.
    async fn delete_recipe(&self, id: RecipeId) -> Result<()>;
}

#[derive(Clone)]
pub struct HttpRecipeApi {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl HttpRecipeApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_base_url)
    }

    fn recipes_url(&self) -> String {
        format!("{}/api/recipes", self.base_url)
    }

    fn recipe_url(&self, id: RecipeId) -> String {
        format!("{}/api/recipes/{}", self.base_url, id)
    }

    /// Error whose message is the response body, or `HTTP <status>` when the
    /// body is empty.
    async fn body_error(response: reqwest::Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if body.trim().is_empty() {
            Error::Api(format!("HTTP {}", status.as_u16()))
        } else {
            Error::Api(body)
        }
    }
}

#[async_trait(?Send)]
impl RecipeApi for HttpRecipeApi {
    async fn list_recipes(&self) -> Result<Vec<ServerRecipe>> {
        let url = self.recipes_url();
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Http { status: response.status().as_u16() });
        }

        let body: serde_json::Value = response.json().await?;
        match body {
            serde_json::Value::Array(records) => Ok(adapter::decode_records(records)),
            other => {
                log::warn!("Expected a recipe array, got {}", other);
                Ok(Vec::new())
            }
        }
    }

    async fn create_recipe(&self, payload: &RecipePayload) -> Result<()> {
        let url = self.recipes_url();
        log::debug!("POST {} ({})", url, payload.title);

        let response = self.client.post(&url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(Self::body_error(response).await);
        }
        Ok(())
    }

    async fn update_recipe(&self, id: RecipeId, payload: &RecipePayload) -> Result<serde_json::Value> {
        let url = self.recipe_url(id);
        log::debug!("PUT {}", url);

        let response = self.client.put(&url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(Self::body_error(response).await);
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::Null))
    }

    async fn delete_recipe(&self, id: RecipeId) -> Result<()> {
        let url = self.recipe_url(id);
        log::debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            log::debug!("Recipe {} already deleted", id);
            return Ok(());
        }
        if !status.is_success() {
            return Err(Error::Http { status: status.as_u16() });
        }
        Ok(())
    }
}

/// Outbound calls plus the store bookkeeping that follows them. Every
/// successful mutation is followed by a full re-fetch.
#[derive(Clone)]
pub struct Gateway {
    api: Arc<dyn RecipeApi>,
    store: DataStore,
    default_image: Arc<str>,
}

impl Gateway {
    pub fn new(api: Arc<dyn RecipeApi>, store: DataStore, config: &Config) -> Self {
        Self {
            api,
            store,
            default_image: Arc::from(config.default_image_url.as_str()),
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Replaces the store's recipes with the server's list. Optimistic local
    /// state (likes, comments) does not survive this.
    pub async fn list(&self) -> Result<()> {
        self.store.fetch_state.set(FetchState::Loading);
        match self.api.list_recipes().await {
            Ok(records) => {
                let recipes: Vec<Recipe> = records
                    .into_iter()
                    .map(|record| adapter::to_recipe(record, &self.default_image))
                    .collect();
                log::debug!("Loaded {} recipes", recipes.len());
                self.store.replace_recipes(recipes);
                self.store.fetch_state.set(FetchState::Ready);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load recipes: {}", e);
                self.store.fetch_state.set(FetchState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Post-mutation refresh. A failure here only shows up in `fetch_state`;
    /// the mutation itself already succeeded.
    async fn refresh(&self) {
        let _ = self.list().await;
    }

    pub async fn create(&self, draft: &RecipeDraft, author_id: UserId) -> Result<()> {
        let payload = RecipePayload::from_draft(draft, &self.default_image).with_author(author_id);
        self.api.create_recipe(&payload).await?;
        self.refresh().await;
        Ok(())
    }

    /// Returns the server's view of the updated recipe. The list is
    /// re-fetched before the PUT body is read; when that body is not a
    /// recipe, the refreshed list entry stands in for it.
    pub async fn update(&self, id: RecipeId, draft: &RecipeDraft) -> Result<Recipe> {
        let payload = RecipePayload::from_draft(draft, &self.default_image).with_id(id);
        let body = self.api.update_recipe(id, &payload).await?;
        self.refresh().await;

        let record = match body {
            serde_json::Value::Object(_) => adapter::decode_record(body),
            _ => None,
        };
        match record {
            Some(record) => Ok(adapter::to_recipe(record, &self.default_image)),
            None => {
                log::warn!("PUT for recipe {} returned no record, using the list entry", id);
                self.store
                    .recipe(id)
                    .ok_or_else(|| Error::Json(format!("no record for recipe {} after update", id)))
            }
        }
    }

    pub async fn delete(&self, id: RecipeId) -> Result<()> {
        self.api.delete_recipe(id).await?;
        self.refresh().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_IMAGE_URL;
    use crate::storage::MemoryStorage;
    use crate::test_utils::server_recipe;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn gateway(api: MockRecipeApi) -> Gateway {
        let store = DataStore::new(Arc::new(MemoryStorage::new()));
        Gateway::new(Arc::new(api), store, &Config::default())
    }

    #[test]
    fn payload_coerces_bad_numbers() {
        let draft = RecipeDraft {
            title: " Pancakes ".into(),
            description: "Fluffy".into(),
            cook_time: "abc".into(),
            servings: "abc".into(),
            ingredients: vec!["flour".into(), " ".into()],
            image: "   ".into(),
            ..RecipeDraft::default()
        };
        let payload = RecipePayload::from_draft(&draft, DEFAULT_IMAGE_URL).with_author(7);
        assert_eq!(payload.title, "Pancakes");
        assert_eq!(payload.cook_time, 30);
        assert_eq!(payload.servings, 2);
        assert_eq!(payload.ingredients, vec!["flour".to_string()]);
        assert!(payload.instructions.is_empty());
        assert_eq!(payload.image, DEFAULT_IMAGE_URL);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["author"]["id"], 7);
        assert_eq!(json["cookTime"], 30);
        assert_eq!(json["category"], "MAIN_COURSE");
        assert!(json.get("id").is_none());
    }

    #[tokio::test]
    async fn list_failure_sets_fetch_state() {
        let mut api = MockRecipeApi::new();
        api.expect_list_recipes().returning(|| Err(Error::Http { status: 503 }));
        let gateway = gateway(api);

        let result = gateway.list().await;
        assert_eq!(result, Err(Error::Http { status: 503 }));
        assert_eq!(gateway.store().fetch_state.get_cloned(), FetchState::Failed("HTTP 503".into()));
    }

    #[tokio::test]
    async fn create_refetches_instead_of_trusting_response() {
        let mut api = MockRecipeApi::new();
        api.expect_create_recipe()
            .withf(|payload| payload.author == Some(AuthorRef { id: 1 }) && payload.cook_time == 30)
            .times(1)
            .returning(|_| Ok(()));
        api.expect_list_recipes()
            .times(1)
            .returning(|| Ok(vec![server_recipe(5, "Pancakes", "Fluffy", Some(1))]));
        let gateway = gateway(api);

        let draft = RecipeDraft {
            title: "Pancakes".into(),
            description: "Fluffy".into(),
            cook_time: "abc".into(),
            ..RecipeDraft::default()
        };
        gateway.create(&draft, 1).await.unwrap();
        assert_eq!(gateway.store().recipe(5).map(|r| r.title), Some("Pancakes".to_string()));
    }

    #[tokio::test]
    async fn mutation_survives_failed_refresh() {
        let mut api = MockRecipeApi::new();
        api.expect_delete_recipe().with(eq(4)).returning(|_| Ok(()));
        api.expect_list_recipes().returning(|| Err(Error::Network("offline".into())));
        let gateway = gateway(api);

        assert!(gateway.delete(4).await.is_ok());
        assert!(matches!(gateway.store().fetch_state.get_cloned(), FetchState::Failed(_)));
    }

    #[tokio::test]
    async fn update_returns_put_response() {
        let mut api = MockRecipeApi::new();
        api.expect_update_recipe()
            .withf(|id, payload| *id == 2 && payload.id == Some(2))
            .returning(|_, _| Ok(serde_json::to_value(server_recipe(2, "From PUT", "fresh", Some(1))).unwrap()));
        api.expect_list_recipes()
            .returning(|| Ok(vec![server_recipe(2, "From list", "stale", Some(1))]));
        let gateway = gateway(api);

        let draft = RecipeDraft {
            title: "From PUT".into(),
            description: "fresh".into(),
            ..RecipeDraft::default()
        };
        let updated = gateway.update(2, &draft).await.unwrap();
        assert_eq!(updated.title, "From PUT");
        assert_eq!(gateway.store().recipe(2).unwrap().title, "From list");
    }

    #[tokio::test]
    async fn update_without_body_falls_back_to_refreshed_list() {
        let mut api = MockRecipeApi::new();
        api.expect_update_recipe().times(1).returning(|_, _| Ok(serde_json::Value::Null));
        api.expect_list_recipes()
            .times(1)
            .returning(|| Ok(vec![server_recipe(2, "From list", "saved", Some(1))]));
        let gateway = gateway(api);

        let draft = RecipeDraft {
            title: "From list".into(),
            description: "saved".into(),
            ..RecipeDraft::default()
        };
        let updated = gateway.update(2, &draft).await.unwrap();
        assert_eq!(updated.title, "From list");
        assert_eq!(gateway.store().fetch_state.get_cloned(), FetchState::Ready);
    }
}
