mod food_log;
mod health_goal;
mod meal_plan;
mod post;
mod post_like;
mod recipe;
mod session;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "nutrimeal",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        session::CreateTable,
        session::CreateIdx1,
        health_goal::CreateTable,
        health_goal::CreateIdx1,
        recipe::CreateTable,
        recipe::CreateUk1,
        recipe::CreateIdx1,
        meal_plan::CreateTable,
        meal_plan::CreateUk1,
        meal_plan::CreateUk2,
        food_log::CreateTable,
        food_log::CreateUk1,
        food_log::CreateIdx1,
        post::CreateTable,
        post::CreateIdx1,
        post_like::CreateTable
    ]
);
