use nutrimeal_recipe::RecipeSummary;
use nutrimeal_shared::Error;
use rand::seq::SliceRandom;

use crate::Meals;

/// Breakfast, lunch and dinner.
pub const MEALS_PER_PLAN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub meals: Meals,
    pub recipe_ids: [i64; MEALS_PER_PLAN],
}

/// Draws three distinct recipes without replacement, in slot order.
pub fn select_meals<R: rand::Rng + ?Sized>(
    mut recipes: Vec<RecipeSummary>,
    rng: &mut R,
) -> nutrimeal_shared::Result<Selection> {
    if recipes.len() < MEALS_PER_PLAN {
        return Err(Error::InsufficientRecipes {
            required: MEALS_PER_PLAN,
            current: recipes.len(),
        });
    }

    recipes.shuffle(rng);
    recipes.truncate(MEALS_PER_PLAN);

    let recipe_ids = [
        recipes[0].recipe_id,
        recipes[1].recipe_id,
        recipes[2].recipe_id,
    ];
    let mut names = recipes.into_iter().map(|r| r.name);

    Ok(Selection {
        meals: Meals {
            breakfast: names.next().unwrap_or_default(),
            lunch: names.next().unwrap_or_default(),
            dinner: names.next().unwrap_or_default(),
        },
        recipe_ids,
    })
}
