use crate::routes::routes::AppRoutes;
use crate::shared::notice::{NoticeHost, NoticeService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Notices are shared by every screen
    provide_context(NoticeService::new());

    view! {
        <AppRoutes />
        <NoticeHost />
    }
}
