mod about;
mod avatar;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod homepage;
mod nav;
mod projects;
mod reveal;
mod skills;
mod theme;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{PORTFOLIO, SITE_ICON};
use footer::Footer;
use header::Header;
use homepage::HomePage;
use theme::provide_theme;
use toast::{provide_toasts, ToastRegion};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PORTFOLIO.personal.description.clone() />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href=SITE_ICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();
    provide_toasts();

    // the gateway is only ever called from the browser
    #[cfg(feature = "hydrate")]
    provide_context(crate::contact::gateway::init(browser_delay()));

    view! {
        <Title formatter=|title| format!("{} - {title}", PORTFOLIO.personal.name) />

        <Router>
            <div class=move || {
                format!(
                    "{} min-h-screen bg-white text-secondary-900 dark:bg-secondary-900 dark:text-white transition-colors duration-300",
                    theme.theme.get().class(),
                )
            }>
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <ToastRegion />
            </div>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
fn browser_delay() -> crate::contact::Delay {
    use futures::{channel::oneshot, FutureExt};
    use std::{sync::Arc, time::Duration};

    Arc::new(|duration: Duration| {
        let (tx, rx) = oneshot::channel::<()>();
        set_timeout(
            move || {
                _ = tx.send(());
            },
            duration,
        );
        async move {
            _ = rx.await;
        }
        .boxed_local()
    })
}
