use crate::navigation::Navigation;
use crate::theme::Theme;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = Theme::configured();

    view! {
        <Router fallback=|| view! { <p>"Page not found"</p> }.into_view()>
            <Navigation theme />
            <main>
                <Routes>
                    <Route path="" view=HomePage />
                    <Route path="/posts" view=PostsPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <h1>"Home"</h1>
    }
}

#[component]
fn PostsPage() -> impl IntoView {
    view! {
        <Title text="Posts" />
        <h1>"Posts"</h1>
    }
}
