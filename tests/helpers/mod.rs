#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use nutrimeal::{
    AppState,
    config::{
        Config, DatabaseConfig, ImgurConfig, ObservabilityConfig, ServerConfig, SessionConfig,
    },
    image_host::{ImageHost, UploadedImage},
};
use nutrimeal_recipe::{Ingredient, NutritionInfo, RecipeInput};
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "nutrimeal-test-boundary";

/// Records every call instead of talking to a real image host.
#[derive(Default)]
pub struct FakeImageHost {
    pub uploads: Mutex<Vec<String>>,
    pub deletes: Mutex<Vec<String>>,
    pub fail_delete: bool,
}

#[async_trait]
impl ImageHost for FakeImageHost {
    async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> nutrimeal_shared::Result<UploadedImage> {
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(filename.to_owned());
        let n = uploads.len();

        Ok(UploadedImage {
            link: format!("https://images.test/{n}-{}b.png", bytes.len()),
            delete_hash: format!("hash-{n}"),
        })
    }

    async fn delete(&self, delete_hash: &str) -> nutrimeal_shared::Result<()> {
        self.deletes.lock().unwrap().push(delete_hash.to_owned());

        if self.fail_delete {
            return Err(nutrimeal_shared::Error::Server("image host is down".to_owned()));
        }

        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: nutrimeal_shared::State,
    pub images: Arc<FakeImageHost>,
    _dir: TempDir,
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_secs: 10,
            environment: "development".to_string(),
            cors_origins: vec![],
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 5,
        },
        session: SessionConfig::default(),
        imgur: ImgurConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    setup_test_app_with(FakeImageHost::default()).await
}

pub async fn setup_test_app_with(images: FakeImageHost) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let pool = nutrimeal::db::create_pool(&format!("sqlite:{}", path.display()), 5).await?;
    nutrimeal::db::run_migrations(&pool).await?;

    let state = nutrimeal_shared::State::single(pool);
    let images = Arc::new(images);
    let router = nutrimeal::routes::router(AppState::new(
        test_config(),
        state.clone(),
        images.clone(),
    ));

    Ok(TestApp {
        router,
        state,
        images,
        _dir: dir,
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn json(&self, method: Method, uri: &str, body: Value) -> TestResponse {
        self.send(json_request(method, uri, body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn sign_up(&self, email: &str, name: &str) -> String {
        let res = self
            .json(
                Method::POST,
                "/api/auth/signup",
                serde_json::json!({"email": email, "name": name, "picture": ""}),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);

        res.body["_id"].as_str().unwrap().to_owned()
    }

    pub async fn create_recipes(&self, count: usize) -> anyhow::Result<()> {
        let command = nutrimeal_recipe::Command(self.state.clone());
        for i in 1..=count {
            command.create(recipe(&format!("Recipe {i}"), "lunch")).await?;
        }

        Ok(())
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub enum FormPart<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        data: Vec<u8>,
    },
}

pub fn multipart_request(method: Method, uri: &str, parts: Vec<FormPart<'_>>) -> Request<Body> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            FormPart::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            FormPart::File {
                name,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(&data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn recipe(name: &str, category: &str) -> RecipeInput {
    RecipeInput {
        name: name.to_owned(),
        ingredients: vec![Ingredient {
            name: "rice".to_owned(),
            amount: "100g".to_owned(),
        }],
        instructions: "Cook it.".to_owned(),
        nutrition_info: NutritionInfo {
            calories: 400,
            protein: 20,
            carbs: 50,
            fat: 10,
        },
        category: category.to_owned(),
        preparation_time: "20 min".to_owned(),
        difficulty: "easy".to_owned(),
        ..Default::default()
    }
}
