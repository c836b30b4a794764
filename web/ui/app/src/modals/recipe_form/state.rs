use std::sync::Arc;

use flavorshare_core::model::{Category, Difficulty, RecipeDraft, RecipeId};
use futures_signals::signal::Mutable;
use futures_signals::signal_vec::MutableVec;

use crate::app::App;
use crate::components::form::LineList;

/// Reactive mirror of a `RecipeDraft`. `editing` is the id under edit, or
/// `None` when adding.
pub struct RecipeFormState {
    pub app: Arc<App>,
    pub editing: Option<RecipeId>,
    pub title: Mutable<String>,
    pub description: Mutable<String>,
    pub cook_time: Mutable<String>,
    pub servings: Mutable<String>,
    pub difficulty: Mutable<Difficulty>,
    pub category: Mutable<Category>,
    pub ingredients: MutableVec<Mutable<String>>,
    pub instructions: MutableVec<Mutable<String>>,
    pub image: Mutable<String>,
}

impl RecipeFormState {
    pub fn new(app: Arc<App>, editing: Option<RecipeId>, draft: RecipeDraft) -> Arc<Self> {
        Arc::new(Self {
            app,
            editing,
            title: Mutable::new(draft.title),
            description: Mutable::new(draft.description),
            cook_time: Mutable::new(draft.cook_time),
            servings: Mutable::new(draft.servings),
            difficulty: Mutable::new(draft.difficulty),
            category: Mutable::new(draft.category),
            ingredients: LineList::from_lines(&draft.ingredients),
            instructions: LineList::from_lines(&draft.instructions),
            image: Mutable::new(draft.image),
        })
    }

    pub fn draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.get_cloned(),
            description: self.description.get_cloned(),
            cook_time: self.cook_time.get_cloned(),
            servings: self.servings.get_cloned(),
            difficulty: self.difficulty.get(),
            category: self.category.get(),
            ingredients: LineList::to_lines(&self.ingredients),
            instructions: LineList::to_lines(&self.instructions),
            image: self.image.get_cloned(),
        }
    }

    pub fn close(&self) {
        match self.editing {
            Some(_) => self.app.controller.cancel_edit(),
            None => self.app.controller.close_add_recipe(),
        }
    }
}
