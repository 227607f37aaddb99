use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_category::ui::list::CategoriesPage;
use crate::system::signup::ui::SignupPage;

// Screens owned by other parts of the admin; we only link to them.
pub const NEW_CATEGORY_PATH: &str = "/new_categories";
pub const LOGIN_PATH: &str = "/login";

pub fn edit_category_path(id: &str) -> String {
    format!("/edit_categories/{}", urlencoding::encode(id))
}

pub fn category_detail_path(id: &str) -> String {
    format!("/subcategoriesbyid/{}", urlencoding::encode(id))
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page__placeholder">
            <h1>"Page not found"</h1>
            <a href="/categories">"Back to categories"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CategoriesPage />
                    <Route path=path!("/categories") view=CategoriesPage />
                    <Route path=path!("/register") view=SignupPage />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_paths_encode_ids() {
        assert_eq!(edit_category_path("64f1"), "/edit_categories/64f1");
        assert_eq!(category_detail_path("64f1"), "/subcategoriesbyid/64f1");
        assert_eq!(edit_category_path("a b"), "/edit_categories/a%20b");
    }
}
