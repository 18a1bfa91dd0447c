//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::students::StudentsPage;
use crate::state::display::DisplayConfig;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the display configuration and mounts the student directory.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(DisplayConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/roster-ui.css"/>
        <Title text="Students"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StudentsPage/>
            </Routes>
        </Router>
    }
}
