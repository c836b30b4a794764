use serde::{Deserialize, Serialize};

pub type RecipeId = i64;
pub type UserId = i64;
pub type CommentId = i64;

pub const DEFAULT_COOK_TIME: u32 = 30;
pub const DEFAULT_SERVINGS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn server_value(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }

    pub fn from_server_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.server_value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    MainCourse,
    Dessert,
    Healthy,
    Breakfast,
    Snack,
    Appetizer,
    Soup,
    Salad,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::MainCourse,
        Category::Dessert,
        Category::Healthy,
        Category::Breakfast,
        Category::Snack,
        Category::Appetizer,
        Category::Soup,
        Category::Salad,
    ];

    pub fn server_value(self) -> &'static str {
        match self {
            Category::MainCourse => "MAIN_COURSE",
            Category::Dessert => "DESSERT",
            Category::Healthy => "HEALTHY",
            Category::Breakfast => "BREAKFAST",
            Category::Snack => "SNACK",
            Category::Appetizer => "APPETIZER",
            Category::Soup => "SOUP",
            Category::Salad => "SALAD",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::MainCourse => "Main Course",
            Category::Dessert => "Dessert",
            Category::Healthy => "Healthy",
            Category::Breakfast => "Breakfast",
            Category::Snack => "Snack",
            Category::Appetizer => "Appetizer",
            Category::Soup => "Soup",
            Category::Salad => "Salad",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn from_server_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.server_value() == value)
    }
}

/// Category selector on the home page. `All` never appears on a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Form value used by the category `<select>`.
    pub fn value(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.server_value(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        Category::from_server_value(value).map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected.label() == category.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub author_id: Option<UserId>,
    pub author_username: String,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub category: Category,
    pub rating: f64,
    pub review_count: u32,
    pub like_count: u32,
    pub image_url: String,
    pub author_id: Option<UserId>,
    pub author_display_name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Client-side only; lost on the next list refresh.
    pub liked: bool,
    /// Newest first.
    pub comments: Vec<Comment>,
}

impl Recipe {
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.author_id == Some(user.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    // Plaintext, prototype roster only.
    pub password: String,
}

/// Editable form model behind the add and edit recipe modals.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: String,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            cook_time: String::new(),
            servings: String::new(),
            difficulty: Difficulty::default(),
            category: Category::default(),
            ingredients: vec![String::new()],
            instructions: vec![String::new()],
            image: String::new(),
        }
    }
}

impl RecipeDraft {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let lines = |items: &[String]| {
            if items.is_empty() {
                vec![String::new()]
            } else {
                items.to_vec()
            }
        };

        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            cook_time: recipe.cook_time.to_string(),
            servings: recipe.servings.to_string(),
            difficulty: recipe.difficulty,
            category: recipe.category,
            ingredients: lines(&recipe.ingredients),
            instructions: lines(&recipe.instructions),
            image: recipe.image_url.clone(),
        }
    }

    pub fn has_required_fields(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    pub fn cook_time_minutes(&self) -> u32 {
        coerce_count(&self.cook_time, DEFAULT_COOK_TIME)
    }

    pub fn servings_count(&self) -> u32 {
        coerce_count(&self.servings, DEFAULT_SERVINGS)
    }

    pub fn ingredient_lines(&self) -> Vec<String> {
        non_blank(&self.ingredients)
    }

    pub fn instruction_lines(&self) -> Vec<String> {
        non_blank(&self.instructions)
    }
}

/// Leading-integer parse of a form field. Anything that does not start with a
/// positive whole number falls back to `default`.
pub fn coerce_count(raw: &str, default: u32) -> u32 {
    let digits: String = raw.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => default,
        Ok(value) => value,
    }
}

fn non_blank(lines: &[String]) -> Vec<String> {
    lines.iter().filter(|line| !line.trim().is_empty()).cloned().collect()
}
