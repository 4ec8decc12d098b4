//! HTTP-level tests: the real router served on an ephemeral port,
//! exercised with a plain HTTP client so status codes and envelope
//! shapes are checked exactly as a caller sees them.

use recipedia::api;
use recipedia::store::RecipeStore;
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_server() -> String {
    let store = Arc::new(RecipeStore::in_memory());
    let app = api::app(store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn pasta() -> Value {
    json!({
        "title": "Pasta",
        "author": "Nonna",
        "cuisine": "Italian",
        "prepTime": "30 mins",
        "difficulty": "Easy",
        "image": "http://x/y.jpg",
        "ingredients": ["flour", "eggs"],
        "instructions": "Boil and mix"
    })
}

#[tokio::test]
async fn create_returns_201_with_envelope() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/recipes"))
        .json(&pasta())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Recipe created successfully");
    assert_eq!(body["data"]["title"], "Pasta");
    assert_eq!(body["data"]["likes"], 0);
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn create_with_bad_enum_returns_400() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let mut draft = pasta();
    draft["cuisine"] = json!("French");
    let response = client
        .post(format!("{base}/api/recipes"))
        .json(&draft)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "`French` is not a valid cuisine");

    // The store was not mutated.
    let list: Value = client
        .get(format!("{base}/api/recipes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn create_with_missing_fields_names_them_all() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/recipes"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Please add a title"));
    assert!(message.contains("Please add an author"));
    assert!(message.contains("Please add instructions"));
}

#[tokio::test]
async fn list_filters_by_cuisine_newest_first() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for (title, cuisine) in [
        ("Carbonara", "Italian"),
        ("Ramen", "Japanese"),
        ("Lasagna", "Italian"),
    ] {
        let mut draft = pasta();
        draft["title"] = json!(title);
        draft["cuisine"] = json!(cuisine);
        client
            .post(format!("{base}/api/recipes"))
            .json(&draft)
            .send()
            .await
            .unwrap();
    }

    let body: Value = client
        .get(format!("{base}/api/recipes?cuisine=Italian"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["title"], "Lasagna");
    assert_eq!(body["data"][1]["title"], "Carbonara");

    // cuisine=All behaves exactly like no filter.
    let all: Value = client
        .get(format!("{base}/api/recipes?cuisine=All"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all["count"], 3);
}

#[tokio::test]
async fn list_with_unknown_cuisine_returns_400() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{base}/api/recipes?cuisine=Martian"))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "`Martian` is not a valid cuisine");
}

#[tokio::test]
async fn get_unknown_id_returns_404_envelope() {
    let base = spawn_server().await;

    let response = reqwest::get(format!(
        "{base}/api/recipes/00000000-0000-0000-0000-000000000000"
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Recipe not found");
}

#[tokio::test]
async fn update_replaces_fields_but_not_likes() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/api/recipes"))
        .json(&pasta())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    client
        .patch(format!("{base}/api/recipes/{id}/like"))
        .send()
        .await
        .unwrap();

    let mut draft = pasta();
    draft["title"] = json!("Better Pasta");
    let response = client
        .put(format!("{base}/api/recipes/{id}"))
        .json(&draft)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Recipe updated successfully");
    assert_eq!(body["data"]["title"], "Better Pasta");
    assert_eq!(body["data"]["likes"], 1);
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!(
            "{base}/api/recipes/00000000-0000-0000-0000-000000000000"
        ))
        .json(&pasta())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn delete_returns_empty_data_and_later_get_is_404() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/api/recipes"))
        .json(&pasta())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = client
        .delete(format!("{base}/api/recipes/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!({}));
    assert_eq!(body["message"], "Recipe deleted successfully");

    let get = reqwest::get(format!("{base}/api/recipes/{id}")).await.unwrap();
    assert_eq!(get.status(), 404);
}

#[tokio::test]
async fn like_unknown_id_returns_404() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .patch(format!(
            "{base}/api/recipes/00000000-0000-0000-0000-000000000000/like"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn concurrent_likes_all_land() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/api/recipes"))
        .json(&pasta())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let likes = 20;
    let mut handles = Vec::new();
    for _ in 0..likes {
        let client = client.clone();
        let url = format!("{base}/api/recipes/{id}/like");
        handles.push(tokio::spawn(async move {
            let response = client.patch(url).send().await.unwrap();
            assert_eq!(response.status(), 200);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let body: Value = reqwest::get(format!("{base}/api/recipes/{id}"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["likes"], likes);
}

#[tokio::test]
async fn unmatched_route_returns_404_envelope() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{base}/api/nope")).await.unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn root_serves_status_payload() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Active");
    assert_eq!(body["endpoints"]["recipes"], "/api/recipes");
}
