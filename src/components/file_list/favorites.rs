use leptos::prelude::*;
use leptos_icons::Icon;

use super::context::use_list;
use crate::components::icons as ic;
use crate::core::path::favorite_target;

stylance::import_crate_style!(css, "src/components/file_list/file_list.module.css");

/// Favorited keys; a directory opens itself, a file opens its parent.
#[component]
pub fn FavoritesPanel() -> impl IntoView {
    let list = use_list();

    view! {
        <aside class=css::favorites aria-label="Favorites">
            <div class=css::favoritesHeader>"Favorites"</div>
            <Show
                when=move || list.favorites.with(|f| !f.is_empty())
                fallback=|| view! { <div class=css::favoritesEmpty>"No favorites yet"</div> }
            >
                <For
                    each=move || list.favorites.get()
                    key=|key| key.clone()
                    children=move |key| {
                        let icon = if key.ends_with('/') { ic::FOLDER } else { ic::FILE };
                        let target = favorite_target(&key);
                        view! {
                            <button
                                class=css::favorite
                                title=key.clone()
                                on:click=move |_| list.change_root(target.clone())
                            >
                                <Icon icon=icon />
                                <span class=css::favoriteKey>{key.clone()}</span>
                            </button>
                        }
                    }
                />
            </Show>
        </aside>
    }
}
