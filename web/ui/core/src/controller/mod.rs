//! Screen and modal state plus the user actions that drive the gateway.

mod derived;
mod view;


use std::sync::Arc;

use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal};

use crate::auth::{AuthService, Delay, LoginForm, SignupForm, UserRepository};
use crate::config::Config;
use crate::gateway::{Gateway, RecipeApi};
use crate::model::{CategoryFilter, Comment, Recipe, RecipeDraft, RecipeId, User};
use crate::storage::KeyValueStorage;
use crate::store::DataStore;

pub use derived::{filter_recipes, matches_search, AuthoredComment, ProfileStats};
pub use view::{Alert, AlertKind, AuthMode, EditSession, View};

/// Counts in-flight operations. `busy` stays raised until the last guard is
/// dropped.
struct BusyCounter {
    in_flight: Mutable<u32>,
    busy: Mutable<bool>,
}

impl BusyCounter {
    fn new(busy: Mutable<bool>) -> Self {
        Self { in_flight: Mutable::new(0), busy }
    }

    fn raise(&self) -> BusyGuard<'_> {
        let mut count = self.in_flight.lock_mut();
        *count += 1;
        self.busy.set_neq(true);
        BusyGuard(self)
    }
}

struct BusyGuard<'a>(&'a BusyCounter);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut count = self.0.in_flight.lock_mut();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.0.busy.set_neq(false);
        }
    }
}

pub struct Controller {
    pub store: DataStore,
    gateway: Gateway,
    auth: AuthService,
    pub view: Mutable<View>,
    /// Snapshot shown by the detail view. Follows the PUT response after an
    /// edit even when the refreshed list disagrees.
    pub selected: Mutable<Option<Recipe>>,
    pub search_term: Mutable<String>,
    pub category: Mutable<CategoryFilter>,
    pub auth_modal: Mutable<Option<AuthMode>>,
    pub add_recipe_open: Mutable<bool>,
    pub editing: Mutable<Option<EditSession>>,
    pub busy: Mutable<bool>,
    busy_counter: BusyCounter,
    pub alert: Mutable<Option<Alert>>,
}

impl Controller {
    pub fn new(
        config: &Config,
        api: Arc<dyn RecipeApi>,
        users: Arc<dyn UserRepository>,
        storage: Arc<dyn KeyValueStorage>,
        delay: Arc<dyn Delay>,
    ) -> Arc<Self> {
        let store = DataStore::new(storage);
        let busy = Mutable::new(false);
        Arc::new(Self {
            gateway: Gateway::new(api, store.clone(), config),
            auth: AuthService::new(users, delay, config),
            store,
            view: Mutable::new(View::Home),
            selected: Mutable::new(None),
            search_term: Mutable::new(String::new()),
            category: Mutable::new(CategoryFilter::All),
            auth_modal: Mutable::new(None),
            add_recipe_open: Mutable::new(false),
            editing: Mutable::new(None),
            busy_counter: BusyCounter::new(busy.clone()),
            busy,
            alert: Mutable::new(None),
        })
    }

    /// Restores the persisted session and loads the recipe list.
    pub async fn init(&self) {
        self.store.restore_user();
        self.refresh().await;
    }

    /// Re-fetches the list; failures land in `store.fetch_state`.
    pub async fn refresh(&self) {
        let _ = self.gateway.list().await;
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.current_user()
    }

    fn report(&self, alert: Alert) {
        match alert.kind {
            AlertKind::Error => log::warn!("{}", alert.message),
            AlertKind::Success => log::info!("{}", alert.message),
        }
        self.alert.set(Some(alert));
    }

    pub fn dismiss_alert(&self) {
        self.alert.set(None);
    }

    /// Current user, or opens the login modal and returns `None`.
    fn require_user(&self) -> Option<User> {
        let user = self.current_user();
        if user.is_none() {
            self.open_auth(AuthMode::Login);
        }
        user
    }

    // Navigation

    pub fn select_recipe(&self, id: RecipeId) {
        match self.store.recipe(id) {
            Some(recipe) => {
                self.selected.set(Some(recipe));
                self.view.set_neq(View::Detail(id));
            }
            None => log::debug!("Recipe {} is not loaded", id),
        }
    }

    pub fn back(&self) {
        self.selected.set(None);
        self.view.set_neq(View::Home);
    }

    pub fn show_home(&self) {
        self.back();
    }

    pub fn show_profile(&self) {
        if self.require_user().is_some() {
            self.selected.set(None);
            self.view.set_neq(View::Profile);
        }
    }

    // Modals

    pub fn open_auth(&self, mode: AuthMode) {
        self.auth_modal.set(Some(mode));
    }

    pub fn toggle_auth_mode(&self) {
        let mut modal = self.auth_modal.lock_mut();
        if let Some(mode) = *modal {
            *modal = Some(mode.toggled());
        }
    }

    pub fn close_auth(&self) {
        self.auth_modal.set(None);
    }

    pub fn open_add_recipe(&self) {
        if self.require_user().is_some() {
            self.add_recipe_open.set_neq(true);
        }
    }

    pub fn close_add_recipe(&self) {
        self.add_recipe_open.set_neq(false);
    }

    pub fn begin_edit(&self, id: RecipeId) {
        let Some(user) = self.require_user() else {
            return;
        };
        let recipe = self.store.recipe(id).or_else(|| self.selected.get_cloned().filter(|r| r.id == id));
        match recipe {
            Some(recipe) if recipe.is_owned_by(&user) => {
                self.editing.set(Some(EditSession { id, draft: RecipeDraft::from_recipe(&recipe) }));
            }
            _ => self.report(Alert::error("You can only edit your own recipes")),
        }
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
    }

    // Client-only recipe state

    pub fn toggle_like(&self, id: RecipeId) {
        if self.require_user().is_none() {
            return;
        }
        self.store.modify_recipe(id, |r| r.liked = !r.liked);
        if let Some(selected) = self.selected.lock_mut().as_mut().filter(|r| r.id == id) {
            selected.liked = !selected.liked;
        }
    }

    /// Prepends a local comment. Returns `false` when nothing was added.
    pub fn add_comment(&self, id: RecipeId, text: &str) -> bool {
        let Some(user) = self.require_user() else {
            return false;
        };
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        let comment = Comment {
            id: chrono::Utc::now().timestamp_millis(),
            author_id: Some(user.id),
            author_username: user.username,
            text: text.to_string(),
            timestamp: "now".to_string(),
        };
        self.store.modify_recipe(id, |r| r.comments.insert(0, comment.clone()));
        if let Some(selected) = self.selected.lock_mut().as_mut().filter(|r| r.id == id) {
            selected.comments.insert(0, comment);
        }
        true
    }

    // Mutations

    pub async fn create_recipe(&self, draft: &RecipeDraft) -> bool {
        let Some(user) = self.require_user() else {
            return false;
        };
        if !draft.has_required_fields() {
            self.report(Alert::error("Please fill in title and description"));
            return false;
        }

        let _busy = self.busy_counter.raise();
        match self.gateway.create(draft, user.id).await {
            Ok(()) => {
                self.close_add_recipe();
                self.report(Alert::success("Recipe created successfully!"));
                true
            }
            Err(e) => {
                self.report(Alert::error(format!("Failed to create recipe: {}", e)));
                false
            }
        }
    }

    pub async fn update_recipe(&self, id: RecipeId, draft: &RecipeDraft) -> bool {
        if self.require_user().is_none() {
            return false;
        }
        if !draft.has_required_fields() {
            self.report(Alert::error("Please fill in title and description"));
            return false;
        }

        let _busy = self.busy_counter.raise();
        match self.gateway.update(id, draft).await {
            Ok(updated) => {
                {
                    let mut selected = self.selected.lock_mut();
                    if selected.as_ref().is_some_and(|r| r.id == updated.id) {
                        *selected = Some(updated);
                    }
                }
                self.cancel_edit();
                self.report(Alert::success("Recipe updated successfully!"));
                true
            }
            Err(e) => {
                self.report(Alert::error(format!("Failed to update recipe: {}", e)));
                false
            }
        }
    }

    /// Deletes an owned recipe. Confirmation is the caller's job.
    pub async fn delete_recipe(&self, id: RecipeId) -> bool {
        let Some(user) = self.current_user() else {
            self.report(Alert::error("Please log in to delete recipes"));
            self.open_auth(AuthMode::Login);
            return false;
        };
        let owned = self
            .store
            .recipe(id)
            .or_else(|| self.selected.get_cloned().filter(|r| r.id == id))
            .is_some_and(|r| r.is_owned_by(&user));
        if !owned {
            self.report(Alert::error("You can only delete your own recipes"));
            return false;
        }

        let _busy = self.busy_counter.raise();
        match self.gateway.delete(id).await {
            Ok(()) => {
                let showing_deleted = self.selected.lock_ref().as_ref().is_some_and(|r| r.id == id);
                if showing_deleted {
                    self.back();
                }
                self.report(Alert::success("Recipe deleted successfully!"));
                true
            }
            Err(e) => {
                self.report(Alert::error(format!("Failed to delete recipe: {}", e)));
                false
            }
        }
    }

    // Session

    pub async fn login(&self, form: &LoginForm) -> bool {
        let _busy = self.busy_counter.raise();
        let result = self.auth.login(form).await;
        self.finish_auth(result)
    }

    pub async fn signup(&self, form: &SignupForm) -> bool {
        // Validation errors surface before the busy indicator.
        if let Err(e) = AuthService::validate_signup(form) {
            self.report(Alert::error(e.to_string()));
            return false;
        }
        let _busy = self.busy_counter.raise();
        let result = self.auth.signup(form).await;
        self.finish_auth(result)
    }

    fn finish_auth(&self, result: crate::Result<User>) -> bool {
        let user = match result {
            Ok(user) => user,
            Err(e) => {
                self.report(Alert::error(e.to_string()));
                return false;
            }
        };
        if let Err(e) = self.store.sign_in(user) {
            self.report(Alert::error(format!("Could not save session: {}", e)));
            return false;
        }
        self.close_auth();
        true
    }

    pub fn logout(&self) {
        if let Err(e) = self.store.sign_out() {
            log::warn!("Could not clear stored session: {}", e);
        }
        self.back();
    }

    // Derived signals

    pub fn filtered_recipes_signal(&self) -> impl Signal<Item = Vec<Recipe>> {
        map_ref! {
            let recipes = self.store.recipes.signal_cloned(),
            let term = self.search_term.signal_cloned(),
            let category = self.category.signal() =>
            filter_recipes(recipes, term, *category)
        }
    }

    pub fn profile_signal(&self) -> impl Signal<Item = ProfileStats> {
        map_ref! {
            let recipes = self.store.recipes.signal_cloned(),
            let user = self.store.current_user.signal_cloned() =>
            ProfileStats::compute(recipes, user.as_ref())
        }
    }

    pub fn is_authenticated_signal(&self) -> impl Signal<Item = bool> {
        self.store.current_user.signal_ref(Option::is_some)
    }

    /// Whether the signed-in user owns the recipe in the detail view.
    pub fn owns_selected_signal(&self) -> impl Signal<Item = bool> {
        map_ref! {
            let selected = self.selected.signal_cloned(),
            let user = self.store.current_user.signal_cloned() =>
            match (selected, user) {
                (Some(recipe), Some(user)) => recipe.is_owned_by(user),
                _ => false,
            }
        }
    }
}
