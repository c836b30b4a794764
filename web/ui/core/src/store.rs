use std::sync::Arc;

use futures_signals::signal::Mutable;

use crate::error::Result;
use crate::model::{Recipe, RecipeId, User};
use crate::storage::KeyValueStorage;

pub const CURRENT_USER_KEY: &str = "currentUser";

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready,
    Failed(String),
}

/// Client-side source of truth for rendering: the recipe list as last
/// fetched (plus optimistic local edits) and the signed-in user.
#[derive(Clone)]
pub struct DataStore {
    pub recipes: Mutable<Vec<Recipe>>,
    pub current_user: Mutable<Option<User>>,
    pub fetch_state: Mutable<FetchState>,
    storage: Arc<dyn KeyValueStorage>,
}

impl DataStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            recipes: Mutable::new(Vec::new()),
            current_user: Mutable::new(None),
            fetch_state: Mutable::new(FetchState::Loading),
            storage,
        }
    }

    /// Full replacement; whatever was held before is discarded.
    pub fn replace_recipes(&self, recipes: Vec<Recipe>) {
        self.recipes.set(recipes);
    }

    pub fn recipe(&self, id: RecipeId) -> Option<Recipe> {
        self.recipes.lock_ref().iter().find(|r| r.id == id).cloned()
    }

    /// Applies `edit` to the recipe with `id` in place and returns the result.
    pub fn modify_recipe(&self, id: RecipeId, edit: impl FnOnce(&mut Recipe)) -> Option<Recipe> {
        let mut recipes = self.recipes.lock_mut();
        let recipe = recipes.iter_mut().find(|r| r.id == id)?;
        edit(recipe);
        Some(recipe.clone())
    }

    pub fn current_user(&self) -> Option<User> {
        self.current_user.get_cloned()
    }

    /// Loads the persisted user, dropping the entry if it no longer parses.
    pub fn restore_user(&self) -> Option<User> {
        let raw = match self.storage.get(CURRENT_USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Could not read stored user: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                log::debug!("Restored session for {}", user.username);
                self.current_user.set(Some(user.clone()));
                Some(user)
            }
            Err(e) => {
                log::warn!("Discarding unreadable stored user: {}", e);
                if let Err(e) = self.storage.remove(CURRENT_USER_KEY) {
                    log::warn!("Could not clear stored user: {}", e);
                }
                None
            }
        }
    }

    pub fn sign_in(&self, user: User) -> Result<()> {
        let serialized = serde_json::to_string(&user)?;
        self.storage.set(CURRENT_USER_KEY, &serialized)?;
        self.current_user.set(Some(user));
        Ok(())
    }

    pub fn sign_out(&self) -> Result<()> {
        self.current_user.set(None);
        self.storage.remove(CURRENT_USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::test_utils::{sample_recipe, sample_user};
    use pretty_assertions::assert_eq;

    fn store() -> (DataStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (DataStore::new(storage.clone()), storage)
    }

    #[test]
    fn sign_in_persists_and_restores() {
        let (store, storage) = store();
        let user = sample_user();
        store.sign_in(user.clone()).unwrap();
        assert!(storage.get(CURRENT_USER_KEY).unwrap().is_some());

        let reloaded = DataStore::new(storage);
        assert_eq!(reloaded.current_user(), None);
        assert_eq!(reloaded.restore_user(), Some(user.clone()));
        assert_eq!(reloaded.current_user(), Some(user));
    }

    #[test]
    fn sign_out_clears_entry() {
        let (store, storage) = store();
        store.sign_in(sample_user()).unwrap();
        store.sign_out().unwrap();
        assert_eq!(store.current_user(), None);
        assert_eq!(storage.get(CURRENT_USER_KEY).unwrap(), None);
    }

    #[test]
    fn corrupt_entry_is_dropped() {
        let (store, storage) = store();
        storage.set(CURRENT_USER_KEY, "{not json").unwrap();
        assert_eq!(store.restore_user(), None);
        assert_eq!(storage.get(CURRENT_USER_KEY).unwrap(), None);
    }

    #[test]
    fn replace_discards_previous_recipes() {
        let (store, _) = store();
        store.replace_recipes(vec![sample_recipe(1, "Omelette", "Eggs"), sample_recipe(2, "Soup", "Hot")]);
        store.replace_recipes(vec![sample_recipe(3, "Salad", "Green")]);
        let ids: Vec<_> = store.recipes.lock_ref().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn modify_recipe_returns_updated_copy() {
        let (store, _) = store();
        store.replace_recipes(vec![sample_recipe(1, "Omelette", "Eggs")]);
        let updated = store.modify_recipe(1, |r| r.liked = true).unwrap();
        assert!(updated.liked);
        assert!(store.recipe(1).unwrap().liked);
        assert!(store.modify_recipe(99, |r| r.liked = true).is_none());
    }
}
