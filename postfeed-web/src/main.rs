use dioxus::prelude::*;
use postfeed_core::{FeedClient, FeedConfig, FeedController};
use tracing::error;

mod components;
mod feed;

use components::{CreatePostForm, FilterBar, PostList};
use feed::Feed;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    launch(App);
}

/// Config pointing at the origin the page was served from.
fn page_config() -> FeedConfig {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    match origin.as_deref().map(FeedConfig::from_origin) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            error!("Falling back to default API URL: {}", e);
            FeedConfig::default()
        }
        None => FeedConfig::default(),
    }
}

#[component]
fn App() -> Element {
    let feed = use_context_provider(|| {
        Feed::new(FeedController::new(FeedClient::new(page_config())))
    });
    let privacy = use_signal(String::new);

    // Initial load is unfiltered, whatever the select shows.
    use_hook(|| feed.load(None));

    rsx! {
        link { rel: "stylesheet", href: MAIN_CSS },
        div { class: "container",
            h1 { "Posts" },
            CreatePostForm { privacy },
            FilterBar { privacy },
            PostList {}
        }
    }
}
