use crate::feed::Feed;
use anyhow::{anyhow, Result};
use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use gloo_file::{futures::read_as_bytes, Blob};
use postfeed_core::{MediaUpload, NewPost};
use tracing::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

/// New post form. After a successful submit the feed reloads with the
/// filter currently selected in `privacy`.
#[component]
pub fn CreatePostForm(privacy: Signal<String>) -> Element {
    let feed = use_context::<Feed>();
    let mut content = use_signal(String::new);
    let mut post_privacy = use_signal(|| "public".to_string());
    let mut media = use_signal(|| None::<MediaUpload>);

    let on_file_change = move |evt: Event<FormData>| {
        let Some(input) = file_input(&evt) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            media.set(None);
            return;
        };
        spawn_local(async move {
            match read_upload(file).await {
                Ok(upload) => media.set(Some(upload)),
                Err(err) => error!("Error reading media file: {:?}", err),
            }
        });
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let post = NewPost {
            content: content.read().clone(),
            privacy: post_privacy.read().clone(),
            media: media.read().clone(),
        };
        let filter = privacy.read().clone();
        feed.create(post, Some(filter), move || {
            content.set(String::new());
            media.set(None);
        });
    };

    rsx! {
        form { id: "createPost", class: "create-post", onsubmit: submit,
            textarea {
                name: "content",
                value: "{content}",
                oninput: move |e| content.set(e.value())
            }
            select {
                name: "privacy",
                value: "{post_privacy}",
                onchange: move |e| post_privacy.set(e.value()),
                option { value: "public", "Public" }
                option { value: "friends", "Friends" }
                option { value: "private", "Private" }
            }
            input {
                r#type: "file",
                name: "media_file",
                accept: "image/*,video/*",
                onchange: on_file_change
            }
            button { r#type: "submit", "Post" }
        }
    }
}

fn file_input(evt: &Event<FormData>) -> Option<HtmlInputElement> {
    evt.try_as_web_event()?
        .target()?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

async fn read_upload(file: web_sys::File) -> Result<MediaUpload> {
    let file_name = file.name();
    if file_name.is_empty() {
        return Err(anyhow!("selected file has no name"));
    }
    let blob = Blob::from(file);
    let bytes = read_as_bytes(&blob).await?;
    Ok(MediaUpload { file_name, bytes })
}
