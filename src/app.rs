use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::features::kanban::KanbanBoard;

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::load();

    provide_context(config.clone());

    view! {
        <main class="app">
            <KanbanBoard config=config />
        </main>
    }
}
