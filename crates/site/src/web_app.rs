use control_catalog::{ControlCatalog, DemoPage};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Control Kit" />
        <Meta name="description" content="Button, checkbox, and radio controls with their story catalog." />

        <Router>
            <div class="site-root">
                <nav class="site-nav">
                    <A href="/">"Demo"</A>
                    <A href="/catalog">"Catalog"</A>
                </nav>
                <Routes>
                    <Route path="" view=DemoPage />
                    <Route path="/catalog" view=CatalogEntry />
                    <Route path="/catalog/:story" view=CatalogStoryRoute />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
pub fn CatalogEntry() -> impl IntoView {
    view! { <ControlCatalog /> }
}

#[component]
fn CatalogStoryRoute() -> impl IntoView {
    let params = use_params_map();
    let story_id = move || params.with(|map| map.get("story").cloned());

    move || match story_id() {
        Some(story_id) => view! { <ControlCatalog story_id /> }.into_view(),
        None => view! { <ControlCatalog /> }.into_view(),
    }
}
