pub mod state;
pub mod view_model;

use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::routes::routes::{category_detail_path, edit_category_path, NEW_CATEGORY_PATH};
use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use state::{count_label, LoadStatus};
use view_model::{CategoryListDeps, CategoryListViewModel};

/// Anything inside this container counts as "inside the menu"
const DROPDOWN_SELECTOR: &str = ".dropdown-container";

fn is_inside_dropdown(ev: &leptos::ev::MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(DROPDOWN_SELECTOR).ok().flatten())
        .is_some()
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let vm = CategoryListViewModel::new(CategoryListDeps::browser(use_notices()));
    let status = Memo::new(move |_| vm.state.with(|s| s.status.clone()));

    Effect::new(move |_| {
        vm.load_once();
    });

    // Pointer down anywhere outside a menu closes the open one
    let outside_click = window_event_listener(leptos::ev::mousedown, move |ev| {
        if !is_inside_dropdown(&ev) {
            vm.close_menu();
        }
    });
    on_cleanup(move || outside_click.remove());

    view! {
        <div class="page categories">
            {move || match status.get() {
                LoadStatus::Loading => view! {
                    <div class="page__placeholder">"Loading categories..."</div>
                }.into_any(),
                LoadStatus::Failed(message) => view! {
                    <div class="page__placeholder page__placeholder--error">{message}</div>
                }.into_any(),
                LoadStatus::Loaded => view! { <CategoryGrid vm=vm /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CategoryGrid(vm: CategoryListViewModel) -> impl IntoView {
    let state = vm.state;
    let empty = Memo::new(move |_| state.with(|s| s.empty_state()));

    view! {
        <div class="categories__header">
            <div>
                <h1 class="page__title">"Categories"</h1>
                <p class="categories__summary">{move || state.with(|s| s.summary())}</p>
            </div>
            <a class="btn btn--primary" href=NEW_CATEGORY_PATH>
                {icon("plus")}
                " Add Category"
            </a>
        </div>

        <div class="categories__toolbar">
            <div class="search-box">
                {icon("search")}
                <input
                    type="text"
                    class="search-box__input"
                    placeholder="Search categories..."
                    prop:value=move || state.with(|s| s.search_query.clone())
                    on:input=move |ev| vm.set_search(event_target_value(&ev))
                />
            </div>
            <Badge>{move || count_label(state.with(|s| s.visible_count()))}</Badge>
        </div>

        {move || match empty.get() {
            Some(empty) => view! {
                <div class="empty-state">
                    <div class="empty-state__icon">{icon("folder-open")}</div>
                    <h3 class="empty-state__title">{empty.title}</h3>
                    <p class="empty-state__message">{empty.message}</p>
                    {empty.offer_create.then(|| view! {
                        <a class="btn btn--primary" href=NEW_CATEGORY_PATH>
                            {icon("plus")}
                            " Create First Category"
                        </a>
                    })}
                </div>
            }.into_any(),
            None => view! { <></> }.into_any(),
        }}

        <div class="categories__grid">
            <For
                each=move || state.with(|s| s.filtered.clone())
                key=|category| category.id.clone()
                children=move |category| view! { <CategoryCard vm=vm category=category /> }
            />
        </div>
    }
}

#[component]
fn CategoryCard(vm: CategoryListViewModel, category: Category) -> impl IntoView {
    let id = StoredValue::new(category.id.clone());
    let is_open = Memo::new(move |_| vm.state.with(|s| id.with_value(|id| s.menu.is_open(id))));
    let image_failed = RwSignal::new(false);
    let image_url = category.image_url().map(str::to_string);
    let has_image = image_url.is_some();
    let title = category.title.clone();

    view! {
        <div class="category-card">
            <a class="category-card__media" href=category_detail_path(&category.id)>
                {match image_url {
                    Some(url) => view! {
                        <img
                            class="category-card__image"
                            class:hidden=move || image_failed.get()
                            src=url
                            alt=title
                            on:error=move |_| image_failed.set(true)
                        />
                    }.into_any(),
                    None => view! { <></> }.into_any(),
                }}
                <div
                    class="category-card__placeholder"
                    class:hidden=move || has_image && !image_failed.get()
                >
                    {icon("image")}
                </div>
            </a>

            <div class="category-card__body">
                <div>
                    <h3 class="category-card__title">{category.title.clone()}</h3>
                    <p class="category-card__kind">"Category"</p>
                </div>
                <div class="dropdown-container">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| id.with_value(|id| vm.toggle_menu(id))
                        attr:aria-label="Category actions"
                    >
                        {icon("more-vertical")}
                    </Button>
                    <Show when=move || is_open.get()>
                        <div class="dropdown-menu">
                            <a
                                class="dropdown-menu__item"
                                href=move || id.with_value(|id| edit_category_path(id))
                                on:click=move |_| vm.close_menu()
                            >
                                {icon("edit")}
                                " Edit"
                            </a>
                            <hr class="dropdown-menu__divider" />
                            <button
                                class="dropdown-menu__item dropdown-menu__item--danger"
                                on:click=move |_| vm.delete_command(id.get_value())
                            >
                                {icon("trash")}
                                " Delete"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
