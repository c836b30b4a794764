//! Views computed from the store on every change; nothing here is cached.

use crate::model::{CategoryFilter, Comment, Recipe, RecipeId, User};

pub fn matches_search(recipe: &Recipe, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || recipe.title.to_lowercase().contains(&term)
        || recipe.description.to_lowercase().contains(&term)
}

pub fn filter_recipes(recipes: &[Recipe], term: &str, category: CategoryFilter) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| matches_search(r, term) && category.matches(r.category))
        .cloned()
        .collect()
}

/// A comment together with the recipe it was left on.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthoredComment {
    pub comment: Comment,
    pub recipe_id: RecipeId,
    pub recipe_title: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileStats {
    pub recipes: Vec<Recipe>,
    pub comments: Vec<AuthoredComment>,
    pub liked: Vec<Recipe>,
    pub total_likes: u32,
}

impl ProfileStats {
    pub fn compute(recipes: &[Recipe], user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self::default();
        };

        let owned: Vec<Recipe> = recipes.iter().filter(|r| r.is_owned_by(user)).cloned().collect();
        let comments = recipes
            .iter()
            .flat_map(|r| {
                r.comments
                    .iter()
                    .filter(|c| c.author_id == Some(user.id))
                    .map(move |c| AuthoredComment {
                        comment: c.clone(),
                        recipe_id: r.id,
                        recipe_title: r.title.clone(),
                    })
            })
            .collect();
        let liked = recipes.iter().filter(|r| r.liked).cloned().collect();
        let total_likes = owned.iter().map(|r| r.like_count).sum();

        Self { recipes: owned, comments, liked, total_likes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::test_utils::{sample_comment, sample_recipe, sample_user};
    use pretty_assertions::assert_eq;

    fn catalogue() -> Vec<Recipe> {
        let mut soup = sample_recipe(3, "Egg Drop Soup", "Silky broth");
        soup.category = Category::Soup;
        let mut salad = sample_recipe(4, "Garden Salad", "Topped with a boiled EGG");
        salad.category = Category::Salad;
        vec![
            sample_recipe(1, "Omelette", "Fluffy eggs"),
            sample_recipe(2, "Pancakes", "Sweet breakfast"),
            soup,
            salad,
        ]
    }

    fn ids(recipes: &[Recipe]) -> Vec<RecipeId> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let found = filter_recipes(&catalogue(), "egg", CategoryFilter::All);
        assert_eq!(ids(&found), vec![1, 3, 4]);
    }

    #[test]
    fn category_narrows_search() {
        let found = filter_recipes(&catalogue(), "egg", CategoryFilter::Only(Category::Soup));
        assert_eq!(ids(&found), vec![3]);
    }

    #[test]
    fn blank_search_keeps_everything() {
        assert_eq!(filter_recipes(&catalogue(), "   ", CategoryFilter::All).len(), 4);
    }

    #[test]
    fn profile_aggregates_for_user() {
        let user = sample_user();
        let mut recipes = catalogue();
        recipes[0].author_id = Some(user.id);
        recipes[0].like_count = 3;
        recipes[2].author_id = Some(user.id);
        recipes[2].like_count = 4;
        recipes[1].liked = true;
        recipes[3].comments = vec![sample_comment(20, Some(user.id), "Lovely"), sample_comment(21, Some(99), "Meh")];

        let stats = ProfileStats::compute(&recipes, Some(&user));
        assert_eq!(ids(&stats.recipes), vec![1, 3]);
        assert_eq!(ids(&stats.liked), vec![2]);
        assert_eq!(stats.total_likes, 7);
        assert_eq!(stats.comments.len(), 1);
        assert_eq!(stats.comments[0].recipe_id, 4);
        assert_eq!(stats.comments[0].recipe_title, "Garden Salad");
    }

    #[test]
    fn no_user_means_empty_profile() {
        assert_eq!(ProfileStats::compute(&catalogue(), None), ProfileStats::default());
    }
}
