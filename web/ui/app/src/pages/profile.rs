use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use flavorshare_core::controller::{AuthoredComment, ProfileStats};
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, SignalExt};

use crate::app::App;
use crate::components::recipe_card::RecipeCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Recipes,
    Comments,
    Liked,
}

impl ProfileTab {
    const ALL: [ProfileTab; 3] = [ProfileTab::Recipes, ProfileTab::Comments, ProfileTab::Liked];

    fn label(self) -> &'static str {
        match self {
            ProfileTab::Recipes => "My Recipes",
            ProfileTab::Comments => "My Comments",
            ProfileTab::Liked => "Liked Recipes",
        }
    }
}

pub struct ProfilePage;

impl ProfilePage {
    pub fn render(app: Arc<App>) -> Dom {
        let tab = Mutable::new(ProfileTab::Recipes);
        let controller = app.controller.clone();

        html!("section", {
            .class(["space-y-6"])
            .child_signal(controller.store.current_user.signal_cloned().map(|user| {
                user.map(|user| html!("div", {
                    .class(["card", "bg-base-100", "shadow", "p-6"])
                    .children(&mut [
                        html!("h1", {
                            .class(["text-3xl", "font-bold"])
                            .text(&user.full_name)
                        }),
                        html!("p", {
                            .class(["text-stone-500"])
                            .text(&format!("@{} · {}", user.username, user.email))
                        }),
                    ])
                }))
            }))
            .child_signal(controller.profile_signal().map(|stats| Some(render_stats(&stats))))
            .child(html!("div", {
                .class(["tabs", "tabs-boxed"])
                .children(ProfileTab::ALL.into_iter().map(|option| {
                    html!("a", {
                        .class(["tab"])
                        .class_signal("tab-active", tab.signal().map(move |current| current == option))
                        .text(option.label())
                        .event(clone!(tab => move |_: events::Click| {
                            tab.set_neq(option);
                        }))
                    })
                }))
            }))
            .child_signal(map_ref! {
                let stats = controller.profile_signal(),
                let current = tab.signal() =>
                Some(render_tab(app.clone(), stats, *current))
            })
        })
    }
}

fn render_stats(stats: &ProfileStats) -> Dom {
    let stat = |title: &str, value: usize| {
        html!("div", {
            .class(["stat"])
            .children(&mut [
                html!("div", { .class(["stat-title"]).text(title) }),
                html!("div", { .class(["stat-value"]).text(&value.to_string()) }),
            ])
        })
    };

    html!("div", {
        .class(["stats", "stats-vertical", "md:stats-horizontal", "shadow", "w-full"])
        .children(&mut [
            stat("Recipes", stats.recipes.len()),
            stat("Comments", stats.comments.len()),
            stat("Liked", stats.liked.len()),
            stat("Likes received", stats.total_likes as usize),
        ])
    })
}

fn render_tab(app: Arc<App>, stats: &ProfileStats, tab: ProfileTab) -> Dom {
    let empty = |text: &str| {
        html!("p", {
            .class(["text-center", "text-stone-500", "py-12"])
            .text(text)
        })
    };

    match tab {
        ProfileTab::Recipes if stats.recipes.is_empty() => empty("You haven't shared any recipes yet."),
        ProfileTab::Liked if stats.liked.is_empty() => empty("You haven't liked any recipes yet."),
        ProfileTab::Comments if stats.comments.is_empty() => empty("You haven't commented on any recipes yet."),
        ProfileTab::Recipes | ProfileTab::Liked => {
            let recipes = if tab == ProfileTab::Recipes { &stats.recipes } else { &stats.liked };
            html!("div", {
                .class(["grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-6"])
                .children(recipes.iter().cloned().map(|recipe| RecipeCard::render(app.clone(), recipe)))
            })
        }
        ProfileTab::Comments => html!("div", {
            .class(["space-y-3"])
            .children(stats.comments.iter().map(|authored| render_authored_comment(app.clone(), authored)))
        }),
    }
}

fn render_authored_comment(app: Arc<App>, authored: &AuthoredComment) -> Dom {
    let recipe_id = authored.recipe_id;

    html!("div", {
        .class(["card", "bg-base-100", "shadow-sm", "p-4", "cursor-pointer"])
        .event(move |_: events::Click| {
            app.controller.select_recipe(recipe_id);
        })
        .children(&mut [
            html!("p", {
                .class(["text-sm", "text-stone-500"])
                .text(&format!("On {} · {}", authored.recipe_title, authored.comment.timestamp))
            }),
            html!("p", {
                .class(["mt-1"])
                .text(&authored.comment.text)
            }),
        ])
    })
}
