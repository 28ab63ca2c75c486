use crate::domain::a005_daily_record::ui::sheet::DailyCollectionSheet;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <div class="page__empty">"Page not found."</div> }>
                    <Route path=path!("/") view=DailyCollectionSheet />
                    <Route path=path!("/daily") view=DailyCollectionSheet />
                </Routes>
            </main>
        </Router>
    }
}
