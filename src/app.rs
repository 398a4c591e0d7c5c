use std::sync::Arc;

use leptos::{either::Either, prelude::*};

use crate::capability::Capability;
use crate::config::SiteConfig;
use crate::pages::DefaultHomeView;
use crate::render::to_html;

/// Home view shared through leptos context. `App` provides it; `HomePage`
/// falls back to the default site when nothing was provided.
#[derive(Clone)]
pub struct SharedHome(pub Arc<dyn Capability>);

impl SharedHome {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self(Arc::new(DefaultHomeView::from_config(config)))
    }
}

/// What `HomePage` puts in the DOM: the rendered page, or the failure shown
/// in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeMarkup {
    Page(String),
    Failed(String),
}

impl HomeMarkup {
    pub fn render(home: &SharedHome) -> Self {
        match home.0.render() {
            Ok(tree) => HomeMarkup::Page(to_html(&tree)),
            Err(err) => {
                let message = format!("{err:#}");
                tracing::error!(error = %message, "home view failed to render");
                HomeMarkup::Failed(message)
            }
        }
    }
}

fn current_home() -> SharedHome {
    use_context::<SharedHome>().unwrap_or_else(|| SharedHome::from_config(&SiteConfig::default()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    match HomeMarkup::render(&current_home()) {
        HomeMarkup::Page(html) => Either::Left(view! { <div class="contents" inner_html=html /> }),
        HomeMarkup::Failed(message) => {
            Either::Right(view! { <p class="home-error">{message}</p> })
        }
    }
}

#[component]
pub fn App(#[prop(optional)] home: Option<SharedHome>) -> impl IntoView {
    if let Some(home) = home {
        provide_context(home);
    }
    view! { <HomePage /> }
}
