use std::sync::Arc;

use flavorshare_core::config::{Config, DEFAULT_IMAGE_URL};
use flavorshare_core::gateway::{Gateway, HttpRecipeApi, RecipeApi, RecipePayload};
use flavorshare_core::model::{Category, RecipeDraft};
use flavorshare_core::storage::MemoryStorage;
use flavorshare_core::store::{DataStore, FetchState};
use flavorshare_core::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> Gateway {
    let config = Config::default().with_api_base_url(&server.uri()).unwrap();
    let store = DataStore::new(Arc::new(MemoryStorage::new()));
    Gateway::new(Arc::new(HttpRecipeApi::from_config(&config)), store, &config)
}

async fn mount_list(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn draft(title: &str) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        description: "Simple and quick".to_string(),
        cook_time: "abc".to_string(),
        servings: "abc".to_string(),
        category: Category::Breakfast,
        ingredients: vec!["2 eggs".to_string(), "".to_string()],
        instructions: vec!["Whisk".to_string(), "  ".to_string(), "Fry".to_string()],
        ..RecipeDraft::default()
    }
}

#[test_log::test(tokio::test)]
async fn list_maps_records_into_store() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        json!([
            {
                "id": 1,
                "title": "Scrambled Eggs",
                "description": "Creamy",
                "cookTime": 10,
                "servings": 1,
                "difficulty": "EASY",
                "category": "BREAKFAST",
                "averageRating": 4.25,
                "reviewCount": 3,
                "author": { "id": 1, "username": "chef_sarah", "fullName": "Chef Sarah" }
            },
            { "id": 2, "title": "Mystery", "description": "No metadata" }
        ]),
    )
    .await;

    let gateway = gateway_for(&server);
    gateway.list().await.unwrap();

    let store = gateway.store();
    assert_eq!(store.fetch_state.get_cloned(), FetchState::Ready);
    let first = store.recipe(1).unwrap();
    assert_eq!(first.category, Category::Breakfast);
    assert_eq!(first.rating, 4.3);
    assert_eq!(first.author_display_name, "Chef Sarah");
    let second = store.recipe(2).unwrap();
    assert_eq!(second.rating, 0.0);
    assert_eq!(second.image_url, DEFAULT_IMAGE_URL);
}

#[test_log::test(tokio::test)]
async fn list_keeps_good_records_next_to_odd_ones() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        json!([
            { "id": 1, "title": "Toast" },
            { "id": 2, "title": "Risotto", "cookTime": 12.5, "servings": "4", "reviewCount": null },
            { "id": null, "title": "Ghost" }
        ]),
    )
    .await;

    let gateway = gateway_for(&server);
    gateway.list().await.unwrap();

    let store = gateway.store();
    assert_eq!(store.fetch_state.get_cloned(), FetchState::Ready);
    assert_eq!(store.recipes.lock_ref().len(), 2);
    let risotto = store.recipe(2).unwrap();
    assert_eq!(risotto.cook_time, 12);
    assert_eq!(risotto.servings, 4);
    assert_eq!(risotto.review_count, 0);
}

#[test_log::test(tokio::test)]
async fn list_error_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    assert_eq!(gateway.list().await, Err(Error::Http { status: 500 }));
    assert_eq!(gateway.store().fetch_state.get_cloned(), FetchState::Failed("HTTP 500".to_string()));
}

#[test_log::test(tokio::test)]
async fn non_array_list_is_empty() {
    let server = MockServer::start().await;
    mount_list(&server, json!({ "message": "maintenance" })).await;

    let api = HttpRecipeApi::new(&server.uri());
    assert!(api.list_recipes().await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn create_posts_coerced_body_then_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes"))
        .and(body_partial_json(json!({
            "title": "Omelette",
            "cookTime": 30,
            "servings": 2,
            "category": "BREAKFAST",
            "difficulty": "EASY",
            "ingredients": ["2 eggs"],
            "instructions": ["Whisk", "Fry"],
            "image": DEFAULT_IMAGE_URL,
            "author": { "id": 1 }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 99, "title": "ignored" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 7, "title": "Omelette", "description": "Simple and quick" }])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    gateway.create(&draft("Omelette"), 1).await.unwrap();

    let store = gateway.store();
    assert!(store.recipe(99).is_none());
    assert_eq!(store.recipe(7).map(|r| r.cook_time), Some(0));
}

#[test_log::test(tokio::test)]
async fn create_error_uses_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid author ID"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let err = gateway.create(&draft("Omelette"), 42).await.unwrap_err();
    assert_eq!(err, Error::Api("Invalid author ID".to_string()));
}

#[test_log::test(tokio::test)]
async fn create_error_without_body_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let api = HttpRecipeApi::new(&server.uri());
    let payload = RecipePayload::from_draft(&draft("Omelette"), DEFAULT_IMAGE_URL);
    assert_eq!(api.create_recipe(&payload).await, Err(Error::Api("HTTP 502".to_string())));
}

#[test_log::test(tokio::test)]
async fn update_puts_full_record_and_returns_response() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/recipes/5"))
        .and(body_partial_json(json!({ "id": 5, "title": "Omelette Deluxe" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "title": "Omelette Deluxe",
            "description": "Simple and quick",
            "category": "BREAKFAST",
            "averageRating": 5.0
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_list(&server, json!([{ "id": 5, "title": "Omelette" }])).await;

    let gateway = gateway_for(&server);
    let updated = gateway.update(5, &draft("Omelette Deluxe")).await.unwrap();
    assert_eq!(updated.title, "Omelette Deluxe");
    assert_eq!(updated.rating, 5.0);
    assert_eq!(gateway.store().recipe(5).unwrap().title, "Omelette");
}

#[test_log::test(tokio::test)]
async fn update_with_empty_body_still_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/recipes/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 5, "title": "Omelette Deluxe" }])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let updated = gateway.update(5, &draft("Omelette Deluxe")).await.unwrap();
    assert_eq!(updated.title, "Omelette Deluxe");
    assert_eq!(gateway.store().fetch_state.get_cloned(), FetchState::Ready);
}

#[test_log::test(tokio::test)]
async fn delete_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/3"))
        .respond_with(ResponseTemplate::new(204))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_list(&server, json!([])).await;

    let gateway = gateway_for(&server);
    assert_eq!(gateway.delete(3).await, Ok(()));
    assert_eq!(gateway.delete(3).await, Ok(()));
}

#[test_log::test(tokio::test)]
async fn delete_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let api = HttpRecipeApi::new(&server.uri());
    assert_eq!(api.delete_recipe(3).await, Err(Error::Http { status: 500 }));
}
