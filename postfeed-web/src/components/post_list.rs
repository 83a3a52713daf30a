use crate::feed::Feed;
use dioxus::prelude::*;
use postfeed_core::{FeedView, MediaKind, PostBlock, NO_POSTS_PLACEHOLDER};

#[component]
pub fn PostList() -> Element {
    let feed = use_context::<Feed>();
    let view = feed.view.read();

    let content = match &*view {
        FeedView::Idle => rsx! {},
        FeedView::Empty => rsx! { "{NO_POSTS_PLACEHOLDER}" },
        FeedView::Posts(blocks) => rsx! {
            for block in blocks.iter() {
                PostCard { key: "{block.element_id}", block: block.clone() }
            }
        },
    };

    rsx! {
        div { id: "posts", {content} }
    }
}

#[component]
fn PostCard(block: PostBlock) -> Element {
    let feed = use_context::<Feed>();
    let post_id = block.post_id.clone();

    let media = match &block.media {
        Some(media) if media.kind == MediaKind::Video => rsx! {
            video { src: "{media.src}", controls: true }
        },
        Some(media) => rsx! {
            img { src: "{media.src}" }
        },
        None => rsx! {},
    };

    rsx! {
        div { id: "{block.element_id}", class: "post",
            h2 { "{block.heading}" }
            p { "{block.privacy_label}" }
            p { "{block.created_label}" }
            {media}
            button {
                class: "delete",
                onclick: move |_| feed.delete(post_id.clone()),
                "Delete"
            }
        }
    }
}
