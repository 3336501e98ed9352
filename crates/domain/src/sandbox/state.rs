//! Sandbox dataset and its operations

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::records::{
    Comment, CommentDraft, Ingredient, IngredientDraft, IngredientPatch, LocalUser, MealPlanEntry,
    MealSlot, ProfileUpdate, RecipeDraft, RecipePatch, SandboxRecipe, ShoppingItem, UserComment,
};
use crate::error::{DomainError, DomainResult};
use crate::id::generate_id;

/// Storage key the whole dataset is persisted under.
pub const SANDBOX_STORAGE_KEY: &str = "planeats-storage";

/// Category filters that match everything.
pub const ALL_CATEGORIES: [&str; 2] = ["todos", "todas"];

/// Category given to shopping items added without one.
pub const DEFAULT_SHOPPING_CATEGORY: &str = "outros";

const MAX_RATING: f64 = 5.0;

/// The complete sandbox snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SandboxState {
    /// Local profile, if logged in.
    pub user: Option<LocalUser>,
    /// Local pantry.
    pub ingredients: Vec<Ingredient>,
    /// Local recipes.
    pub recipes: Vec<SandboxRecipe>,
    /// Ids of favourite recipes.
    pub favorite_recipes: Vec<String>,
    /// Standalone comments.
    pub user_comments: Vec<UserComment>,
    /// Shopping list.
    pub shopping_items: Vec<ShoppingItem>,
    /// Planned meals.
    pub meal_plan: Vec<MealPlanEntry>,
}

impl Default for SandboxState {
    fn default() -> Self {
        Self {
            user: None,
            ingredients: Vec::new(),
            recipes: seed_recipes(),
            favorite_recipes: Vec::new(),
            user_comments: Vec::new(),
            shopping_items: Vec::new(),
            meal_plan: Vec::new(),
        }
    }
}

fn is_all(category: &str) -> bool {
    ALL_CATEGORIES.contains(&category)
}

fn check_rating(rating: f64) -> DomainResult<()> {
    if (0.0..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(DomainError::InvalidInput(format!(
            "rating must be between 0 and {MAX_RATING}, got {rating}"
        )))
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn seed_recipes() -> Vec<SandboxRecipe> {
    // 2024-01-15 and 2024-01-10, midnight UTC.
    let created = |secs| DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default();

    vec![
        SandboxRecipe {
            id: "1".to_string(),
            title: "Arroz de Frango".to_string(),
            description: "Um prato completo de arroz com frango e legumes.".to_string(),
            image: "/images/recipes/arroz-frango.jpg".to_string(),
            time: "40 min".to_string(),
            difficulty: "Médio".to_string(),
            rating: 4.8,
            reviews: 124,
            ingredients: lines(&[
                "2 xícaras de arroz",
                "500g de frango",
                "1 cebola",
                "2 tomates",
                "Temperos a gosto",
            ]),
            instructions: lines(&[
                "Tempere o frango e deixe marinar por 30 minutos",
                "Refogue a cebola e o alho em uma panela",
                "Adicione o frango e deixe dourar",
                "Acrescente o arroz e misture bem",
                "Adicione água quente e deixe cozinhar por 20 minutos",
            ]),
            category: "Almoço".to_string(),
            is_favorite: false,
            is_own: true,
            author: "Maria Silva".to_string(),
            created_at: created(1_705_276_800),
            comments: Vec::new(),
        },
        SandboxRecipe {
            id: "2".to_string(),
            title: "Salada de Tomate com Queijo".to_string(),
            description: "Uma salada fresca e rápida de preparar.".to_string(),
            image: "/images/recipes/salada-tomate.jpg".to_string(),
            time: "10 min".to_string(),
            difficulty: "Fácil".to_string(),
            rating: 4.5,
            reviews: 87,
            ingredients: lines(&[
                "3 tomates grandes",
                "200g de queijo mussarela",
                "Manjericão fresco",
                "Azeite",
                "Sal e pimenta",
            ]),
            instructions: lines(&[
                "Corte os tomates em fatias grossas",
                "Corte o queijo em fatias",
                "Intercale tomate e queijo no prato",
                "Tempere com sal, pimenta e azeite",
                "Finalize com manjericão fresco",
            ]),
            category: "Salada".to_string(),
            is_favorite: false,
            is_own: false,
            author: "João Santos".to_string(),
            created_at: created(1_704_844_800),
            comments: Vec::new(),
        },
    ]
}

impl SandboxState {
    // --- profile ---

    /// Stores the demo profile for `email`. Always succeeds.
    pub fn login(&mut self, email: &str) -> &LocalUser {
        self.user.insert(LocalUser {
            id: "1".to_string(),
            name: "Maria Silva".to_string(),
            email: email.to_string(),
            avatar: "/images/users/avatar1.jpg".to_string(),
            is_logged_in: true,
        })
    }

    /// Stores a fresh profile. Always succeeds.
    pub fn register(&mut self, name: &str, email: &str) -> &LocalUser {
        self.user.insert(LocalUser {
            id: generate_id(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: "/images/users/default-avatar.jpg".to_string(),
            is_logged_in: true,
        })
    }

    /// Drops the local profile.
    pub fn logout(&mut self) {
        self.user = None;
    }

    /// Applies `update` to the stored profile.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when nobody is logged in.
    pub fn update_user(&mut self, update: ProfileUpdate) -> DomainResult<&LocalUser> {
        let user = self
            .user
            .as_mut()
            .ok_or_else(|| DomainError::not_found("user", "current"))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        Ok(&*user)
    }

    // --- ingredients ---

    /// Appends an ingredient stamped with a new id and `now`.
    pub fn add_ingredient(&mut self, draft: IngredientDraft, now: DateTime<Utc>) -> &Ingredient {
        self.ingredients.push(Ingredient {
            id: generate_id(),
            name: draft.name,
            quantity: draft.quantity,
            category: draft.category,
            expiry_date: draft.expiry_date,
            added_date: now,
        });
        &self.ingredients[self.ingredients.len() - 1]
    }

    /// Applies `patch` to the ingredient `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn update_ingredient(&mut self, id: &str, patch: IngredientPatch) -> DomainResult<&Ingredient> {
        let item = self
            .ingredients
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| DomainError::not_found("ingredient", id))?;
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(quantity) = patch.quantity {
            item.quantity = quantity;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if patch.expiry_date.is_some() {
            item.expiry_date = patch.expiry_date;
        }
        Ok(&*item)
    }

    /// Removes the ingredient `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn delete_ingredient(&mut self, id: &str) -> DomainResult<Ingredient> {
        let index = self
            .ingredients
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| DomainError::not_found("ingredient", id))?;
        Ok(self.ingredients.remove(index))
    }

    /// Ingredients in `category`; `todos`/`todas` match everything.
    #[must_use]
    pub fn ingredients_by_category(&self, category: &str) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| is_all(category) || i.category == category)
            .collect()
    }

    // --- recipes ---

    /// Appends a recipe owned by the local user, unrated and uncommented.
    pub fn add_recipe(&mut self, draft: RecipeDraft, now: DateTime<Utc>) -> &SandboxRecipe {
        self.recipes.push(SandboxRecipe {
            id: generate_id(),
            title: draft.title,
            description: draft.description,
            image: draft.image,
            time: draft.time,
            difficulty: draft.difficulty,
            rating: 0.0,
            reviews: 0,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            category: draft.category,
            is_favorite: false,
            is_own: true,
            author: draft.author,
            created_at: now,
            comments: Vec::new(),
        });
        &self.recipes[self.recipes.len() - 1]
    }

    fn recipe_mut(&mut self, id: &str) -> DomainResult<&mut SandboxRecipe> {
        self.recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::not_found("recipe", id))
    }

    /// Returns the recipe `id`.
    #[must_use]
    pub fn recipe(&self, id: &str) -> Option<&SandboxRecipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Applies `patch` to the recipe `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn update_recipe(&mut self, id: &str, patch: RecipePatch) -> DomainResult<&SandboxRecipe> {
        let recipe = self.recipe_mut(id)?;
        if let Some(title) = patch.title {
            recipe.title = title;
        }
        if let Some(description) = patch.description {
            recipe.description = description;
        }
        if let Some(time) = patch.time {
            recipe.time = time;
        }
        if let Some(difficulty) = patch.difficulty {
            recipe.difficulty = difficulty;
        }
        if let Some(category) = patch.category {
            recipe.category = category;
        }
        if let Some(ingredients) = patch.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = patch.instructions {
            recipe.instructions = instructions;
        }
        Ok(&*recipe)
    }

    /// Removes the recipe `id` together with its favourite mark and meal plans.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn delete_recipe(&mut self, id: &str) -> DomainResult<SandboxRecipe> {
        let index = self
            .recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DomainError::not_found("recipe", id))?;
        self.favorite_recipes.retain(|fav| fav != id);
        self.meal_plan.retain(|entry| entry.recipe_id != id);
        Ok(self.recipes.remove(index))
    }

    /// Flips the favourite mark of `recipe_id` and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn toggle_favorite(&mut self, recipe_id: &str) -> DomainResult<bool> {
        let recipe = self.recipe_mut(recipe_id)?;
        recipe.is_favorite = !recipe.is_favorite;
        let favorite = recipe.is_favorite;

        if favorite {
            self.favorite_recipes.push(recipe_id.to_string());
        } else {
            self.favorite_recipes.retain(|fav| fav != recipe_id);
        }
        Ok(favorite)
    }

    /// Appends a review to `recipe_id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown recipe and `InvalidInput` for a
    /// rating outside `0..=5`.
    pub fn add_comment(
        &mut self,
        recipe_id: &str,
        draft: CommentDraft,
        now: DateTime<Utc>,
    ) -> DomainResult<&Comment> {
        check_rating(draft.rating)?;
        let recipe = self.recipe_mut(recipe_id)?;
        recipe.comments.push(Comment {
            id: generate_id(),
            author: draft.author,
            avatar: draft.avatar,
            content: draft.content,
            rating: draft.rating,
            created_at: now,
            replies: Vec::new(),
        });
        Ok(&recipe.comments[recipe.comments.len() - 1])
    }

    /// Folds `rating` into the running mean of `recipe_id`; returns the new mean.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown recipe and `InvalidInput` for a
    /// rating outside `0..=5`.
    pub fn rate_recipe(&mut self, recipe_id: &str, rating: f64) -> DomainResult<f64> {
        check_rating(rating)?;
        let recipe = self.recipe_mut(recipe_id)?;
        let reviews = recipe.reviews + 1;
        recipe.rating = recipe
            .rating
            .mul_add(f64::from(recipe.reviews), rating)
            / f64::from(reviews);
        recipe.reviews = reviews;
        Ok(recipe.rating)
    }

    /// Recipes in `category`; `todos`/`todas` match everything.
    #[must_use]
    pub fn recipes_by_category(&self, category: &str) -> Vec<&SandboxRecipe> {
        self.recipes
            .iter()
            .filter(|r| is_all(category) || r.category == category)
            .collect()
    }

    /// Case-insensitive search over title, description and ingredient lines.
    #[must_use]
    pub fn search_recipes(&self, query: &str) -> Vec<&SandboxRecipe> {
        let needle = query.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
                    || r.ingredients
                        .iter()
                        .any(|i| i.to_lowercase().contains(&needle))
            })
            .collect()
    }

    // --- standalone comments ---

    /// Appends a comment under a caller-chosen id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a rating outside `0..=5`.
    pub fn add_user_comment(
        &mut self,
        id: &str,
        content: &str,
        rating: f64,
        now: DateTime<Utc>,
    ) -> DomainResult<&UserComment> {
        check_rating(rating)?;
        self.user_comments.push(UserComment {
            id: id.to_string(),
            content: content.to_string(),
            rating,
            created_at: now,
        });
        Ok(&self.user_comments[self.user_comments.len() - 1])
    }

    /// Rewrites the comment `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id and `InvalidInput` for a rating
    /// outside `0..=5`.
    pub fn update_user_comment(
        &mut self,
        id: &str,
        content: &str,
        rating: f64,
    ) -> DomainResult<&UserComment> {
        check_rating(rating)?;
        let comment = self
            .user_comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("comment", id))?;
        comment.content = content.to_string();
        comment.rating = rating;
        Ok(&*comment)
    }

    /// Removes the comment `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn delete_user_comment(&mut self, id: &str) -> DomainResult<UserComment> {
        let index = self
            .user_comments
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("comment", id))?;
        Ok(self.user_comments.remove(index))
    }

    // --- shopping list ---

    /// Appends an unticked item dated `today`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the name or quantity is blank.
    pub fn add_shopping_item(
        &mut self,
        name: &str,
        quantity: &str,
        category: Option<&str>,
        today: NaiveDate,
    ) -> DomainResult<&ShoppingItem> {
        if name.trim().is_empty() || quantity.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "shopping items need a name and a quantity".to_string(),
            ));
        }
        self.shopping_items.push(ShoppingItem {
            id: generate_id(),
            name: name.trim().to_string(),
            quantity: quantity.trim().to_string(),
            category: category.unwrap_or(DEFAULT_SHOPPING_CATEGORY).to_string(),
            completed: false,
            added_date: today,
        });
        Ok(&self.shopping_items[self.shopping_items.len() - 1])
    }

    /// Flips the ticked state of `id` and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn toggle_shopping_item(&mut self, id: &str) -> DomainResult<bool> {
        let item = self
            .shopping_items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| DomainError::not_found("shopping item", id))?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    /// Removes the item `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn remove_shopping_item(&mut self, id: &str) -> DomainResult<ShoppingItem> {
        let index = self
            .shopping_items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| DomainError::not_found("shopping item", id))?;
        Ok(self.shopping_items.remove(index))
    }

    /// Drops every ticked item and returns how many were removed.
    pub fn clear_completed_shopping(&mut self) -> usize {
        let before = self.shopping_items.len();
        self.shopping_items.retain(|i| !i.completed);
        before - self.shopping_items.len()
    }

    // --- meal plan ---

    /// Plans `recipe_id` for `slot` on `date`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown recipe.
    pub fn plan_meal(
        &mut self,
        date: NaiveDate,
        slot: MealSlot,
        recipe_id: &str,
    ) -> DomainResult<&MealPlanEntry> {
        if self.recipe(recipe_id).is_none() {
            return Err(DomainError::not_found("recipe", recipe_id));
        }
        self.meal_plan
            .retain(|entry| !(entry.date == date && entry.slot == slot));
        self.meal_plan.push(MealPlanEntry {
            id: generate_id(),
            date,
            slot,
            recipe_id: recipe_id.to_string(),
        });
        Ok(&self.meal_plan[self.meal_plan.len() - 1])
    }

    /// Removes the plan entry `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn unplan_meal(&mut self, id: &str) -> DomainResult<MealPlanEntry> {
        let index = self
            .meal_plan
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DomainError::not_found("meal plan entry", id))?;
        Ok(self.meal_plan.remove(index))
    }

    /// Entries planned for `date`, breakfast first.
    #[must_use]
    pub fn meal_plan_for(&self, date: NaiveDate) -> Vec<&MealPlanEntry> {
        let mut entries: Vec<_> = self.meal_plan.iter().filter(|e| e.date == date).collect();
        entries.sort_by_key(|e| e.slot);
        entries
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn draft(name: &str, category: &str) -> IngredientDraft {
        IngredientDraft {
            name: name.to_string(),
            quantity: "1".to_string(),
            category: category.to_string(),
            expiry_date: None,
        }
    }

    #[test]
    fn test_default_is_seeded() {
        let state = SandboxState::default();
        assert_eq!(state.recipes.len(), 2);
        assert_eq!(state.recipes[0].title, "Arroz de Frango");
        assert!(state.user.is_none());
    }

    #[test]
    fn test_missing_fields_restore_defaults() {
        let state: SandboxState = serde_json::from_str(r#"{"favoriteRecipes":["2"]}"#).unwrap();
        assert_eq!(state.recipes.len(), 2);
        assert_eq!(state.favorite_recipes, vec!["2".to_string()]);
    }

    #[test]
    fn test_login_and_update_profile() {
        let mut state = SandboxState::default();
        assert!(state.update_user(ProfileUpdate::default()).is_err());

        state.login("maria@example.com");
        let user = state
            .update_user(ProfileUpdate {
                name: Some("Maria".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(user.name, "Maria");
        assert_eq!(user.email, "maria@example.com");

        state.logout();
        assert!(state.user.is_none());
    }

    #[test]
    fn test_ingredients_by_category() {
        let now = Utc::now();
        let mut state = SandboxState::default();
        state.add_ingredient(draft("Leite", "laticinios"), now);
        state.add_ingredient(draft("Maçã", "frutas"), now);

        assert_eq!(state.ingredients_by_category("frutas").len(), 1);
        assert_eq!(state.ingredients_by_category("todos").len(), 2);
        assert_eq!(state.ingredients_by_category("todas").len(), 2);
    }

    #[test]
    fn test_update_and_delete_ingredient() {
        let mut state = SandboxState::default();
        let id = state.add_ingredient(draft("Leite", "laticinios"), Utc::now()).id.clone();

        let updated = state
            .update_ingredient(
                &id,
                IngredientPatch {
                    quantity: Some("2L".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.quantity, "2L");
        assert_eq!(updated.name, "Leite");

        state.delete_ingredient(&id).unwrap();
        assert!(state.ingredients.is_empty());
        assert_eq!(
            state.delete_ingredient(&id),
            Err(DomainError::not_found("ingredient", id))
        );
    }

    #[test]
    fn test_delete_recipe_drops_favorite_and_plans() {
        let mut state = SandboxState::default();
        assert!(state.toggle_favorite("1").unwrap());
        state.plan_meal(day(1), MealSlot::Lunch, "1").unwrap();

        state.delete_recipe("1").unwrap();
        assert!(state.favorite_recipes.is_empty());
        assert!(state.meal_plan.is_empty());
        assert!(state.recipe("1").is_none());
    }

    #[test]
    fn test_toggle_favorite_twice() {
        let mut state = SandboxState::default();
        assert!(state.toggle_favorite("2").unwrap());
        assert_eq!(state.favorite_recipes, vec!["2".to_string()]);
        assert!(!state.toggle_favorite("2").unwrap());
        assert!(state.favorite_recipes.is_empty());
        assert!(!state.recipe("2").unwrap().is_favorite);
    }

    #[test]
    fn test_rating_is_running_mean() {
        let mut state = SandboxState::default();
        let id = state
            .add_recipe(
                RecipeDraft {
                    title: "Sopa".to_string(),
                    ..Default::default()
                },
                Utc::now(),
            )
            .id
            .clone();

        assert!((state.rate_recipe(&id, 4.0).unwrap() - 4.0).abs() < f64::EPSILON);
        assert!((state.rate_recipe(&id, 2.0).unwrap() - 3.0).abs() < f64::EPSILON);
        assert_eq!(state.recipe(&id).unwrap().reviews, 2);
        assert!(state.rate_recipe(&id, 7.0).is_err());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let state = SandboxState::default();
        let by_title: Vec<_> = state.search_recipes("SALADA").iter().map(|r| r.id.clone()).collect();
        assert_eq!(by_title, vec!["2".to_string()]);

        let by_ingredient = state.search_recipes("frango");
        assert_eq!(by_ingredient.len(), 1);
        assert_eq!(state.search_recipes("tomate").len(), 2);
        assert_eq!(state.recipes_by_category("todas").len(), 2);
        assert_eq!(state.recipes_by_category("Salada").len(), 1);
    }

    #[test]
    fn test_comments() {
        let now = Utc::now();
        let mut state = SandboxState::default();
        state
            .add_comment(
                "1",
                CommentDraft {
                    author: "Ana".to_string(),
                    content: "Delicioso".to_string(),
                    rating: 5.0,
                    ..Default::default()
                },
                now,
            )
            .unwrap();
        assert_eq!(state.recipe("1").unwrap().comments.len(), 1);

        state.add_user_comment("c1", "Bom", 4.0, now).unwrap();
        let updated = state.update_user_comment("c1", "Muito bom", 5.0).unwrap();
        assert_eq!(updated.content, "Muito bom");
        state.delete_user_comment("c1").unwrap();
        assert!(state.user_comments.is_empty());
    }

    #[test]
    fn test_shopping_list() {
        let mut state = SandboxState::default();
        assert!(state.add_shopping_item(" ", "1L", None, day(2)).is_err());

        let milk = state.add_shopping_item("Leite", "1L", None, day(2)).unwrap().clone();
        assert_eq!(milk.category, DEFAULT_SHOPPING_CATEGORY);
        let bread = state
            .add_shopping_item("Pão", "1 unidade", Some("cereais"), day(2))
            .unwrap()
            .id
            .clone();

        assert!(state.toggle_shopping_item(&bread).unwrap());
        assert_eq!(state.clear_completed_shopping(), 1);
        assert_eq!(state.shopping_items, vec![milk.clone()]);

        state.remove_shopping_item(&milk.id).unwrap();
        assert!(state.shopping_items.is_empty());
    }

    #[test]
    fn test_meal_plan_replaces_slot() {
        let mut state = SandboxState::default();
        state.plan_meal(day(3), MealSlot::Dinner, "1").unwrap();
        state.plan_meal(day(3), MealSlot::Breakfast, "2").unwrap();
        state.plan_meal(day(3), MealSlot::Dinner, "2").unwrap();
        state.plan_meal(day(4), MealSlot::Lunch, "1").unwrap();

        let plan = state.meal_plan_for(day(3));
        let slots: Vec<_> = plan.iter().map(|e| (e.slot, e.recipe_id.as_str())).collect();
        assert_eq!(
            slots,
            vec![(MealSlot::Breakfast, "2"), (MealSlot::Dinner, "2")]
        );

        let id = plan[0].id.clone();
        assert!(state.plan_meal(day(3), MealSlot::Snack, "missing").is_err());

        state.unplan_meal(&id).unwrap();
        assert_eq!(state.meal_plan_for(day(3)).len(), 1);
    }

    #[test]
    fn test_snapshot_uses_camel_case_keys() {
        let value = serde_json::to_value(SandboxState::default()).unwrap();
        assert!(value.get("favoriteRecipes").is_some());
        assert!(value.get("shoppingItems").is_some());
        assert!(value["recipes"][0].get("isFavorite").is_some());
    }
}
