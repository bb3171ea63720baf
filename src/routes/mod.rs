use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use sqlx::SqlitePool;
use tower_http::timeout::TimeoutLayer;

use crate::{config::Config, image_host::ImageHost};

mod auth;
mod community;
mod food_logs;
mod goals;
mod health;
mod meal_plans;
mod recipes;
mod users;

/// Multipart bodies carry images up to 5 MiB plus form overhead.
const BODY_LIMIT: usize = 8 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_command: nutrimeal_user::Command,
    pub user_query: nutrimeal_user::Query,
    pub goal_command: nutrimeal_goal::Command,
    pub goal_query: nutrimeal_goal::Query,
    pub recipe_query: nutrimeal_recipe::Query,
    pub meal_plan_command: nutrimeal_mealplan::Command,
    pub meal_plan_query: nutrimeal_mealplan::Query,
    pub food_log_command: nutrimeal_foodlog::Command,
    pub food_log_query: nutrimeal_foodlog::Query,
    pub community_command: nutrimeal_community::Command,
    pub community_query: nutrimeal_community::Query,
    pub image_host: Arc<dyn ImageHost>,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(
        config: Config,
        state: nutrimeal_shared::State,
        image_host: Arc<dyn ImageHost>,
    ) -> Self {
        Self {
            config,
            user_command: nutrimeal_user::Command(state.clone()),
            user_query: nutrimeal_user::Query(state.clone()),
            goal_command: nutrimeal_goal::Command(state.clone()),
            goal_query: nutrimeal_goal::Query(state.clone()),
            recipe_query: nutrimeal_recipe::Query(state.clone()),
            meal_plan_command: nutrimeal_mealplan::Command(state.clone()),
            meal_plan_query: nutrimeal_mealplan::Query(state.clone()),
            food_log_command: nutrimeal_foodlog::Command(state.clone()),
            food_log_query: nutrimeal_foodlog::Query(state.clone()),
            community_command: nutrimeal_community::Command(state.clone()),
            community_query: nutrimeal_community::Query(state.clone()),
            image_host,
            pool: state.read_db,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    let timeout = Duration::from_secs(app_state.config.server.request_timeout_secs);

    let api = Router::new()
        .route("/auth/signin", post(auth::sign_in))
        .route("/auth/signup", post(auth::sign_up))
        .route("/auth/signout", post(auth::sign_out))
        .route("/users", post(users::create))
        .route("/users/email", get(users::by_email))
        .route("/users/{id}", get(users::get).put(users::update))
        .route("/users/{id}/picture", put(users::update_picture))
        .route("/health-goals", post(goals::create))
        .route("/health-goals/user/{user_id}", get(goals::by_user))
        .route(
            "/health-goals/{user_id}",
            get(goals::get).put(goals::update),
        )
        .route("/recipes", get(recipes::list))
        .route("/recipes/category", get(recipes::by_category))
        .route("/recipes/{id}", get(recipes::get))
        .route("/meal-plans", post(meal_plans::generate))
        .route("/meal-plans/user/{user_id}", get(meal_plans::by_user))
        .route("/food-logs", post(food_logs::create))
        .route("/food-logs/user/{user_id}", get(food_logs::by_user))
        .route(
            "/community/posts",
            get(community::list).post(community::create),
        )
        .route(
            "/community/posts/{post_id}",
            axum::routing::delete(community::delete),
        )
        .route("/community/posts/{post_id}/like", post(community::like));

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TimeoutLayer::new(timeout))
        .with_state(app_state)
}
