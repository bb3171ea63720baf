use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    Name,
    Picture,
    Height,
    Birthday,
    DeleteHash,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Session {
    Table,
    Id,
    UserId,
    ExpiresAt,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum HealthGoal {
    Table,
    Id,
    UserId,
    TargetWeight,
    CurrentWeight,
    ActivityLevel,
    DietaryPreferences,
    WeeklyGoal,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    RecipeId,
    Name,
    Ingredients,
    Instructions,
    Calories,
    Protein,
    Carbs,
    Fat,
    Category,
    Tips,
    PreparationTime,
    Difficulty,
    Allergens,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    PlanId,
    UserId,
    Date,
    Breakfast,
    Lunch,
    Dinner,
    BreakfastRecipeId,
    LunchRecipeId,
    DinnerRecipeId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum FoodLog {
    Table,
    Id,
    LogId,
    UserId,
    FoodName,
    FoodId,
    Calories,
    Protein,
    Carbs,
    Fat,
    MealTime,
    Date,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Post {
    Table,
    Id,
    Content,
    Image,
    ImageType,
    AuthorId,
    AuthorName,
    AuthorPicture,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum PostLike {
    Table,
    PostId,
    UserId,
    CreatedAt,
}
