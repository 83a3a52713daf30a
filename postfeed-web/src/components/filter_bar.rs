use crate::feed::Feed;
use dioxus::prelude::*;

pub const PRIVACY_OPTIONS: [(&str, &str); 4] = [
    ("", "All"),
    ("public", "Public"),
    ("friends", "Friends"),
    ("private", "Private"),
];

#[component]
pub fn FilterBar(privacy: Signal<String>) -> Element {
    let feed = use_context::<Feed>();
    let mut privacy = privacy;

    rsx! {
        div { class: "filter-bar",
            select {
                id: "privacy",
                value: "{privacy}",
                onchange: move |e| privacy.set(e.value()),
                for (value, label) in PRIVACY_OPTIONS {
                    option { value, "{label}" }
                }
            }
            button {
                id: "loadPosts",
                onclick: move |_| feed.load(Some(privacy.read().clone())),
                "Load posts"
            }
        }
    }
}
