use dioxus::prelude::*;
use postfeed_core::{CreateOutcome, FeedController, FeedView, NewPost, PostId};
use wasm_bindgen_futures::spawn_local;

/// Shared handle given to components through context. Every operation runs
/// on the controller and then publishes its view to `view`.
#[derive(Clone)]
pub struct Feed {
    controller: FeedController,
    pub view: Signal<FeedView>,
}

impl Feed {
    pub fn new(controller: FeedController) -> Self {
        let view = Signal::new(controller.view());
        Self { controller, view }
    }

    pub fn load(&self, privacy: Option<String>) {
        let controller = self.controller.clone();
        let mut view = self.view;
        spawn_local(async move {
            controller.load_feed(privacy.as_deref()).await;
            view.set(controller.view());
        });
    }

    pub fn delete(&self, post_id: PostId) {
        let controller = self.controller.clone();
        let mut view = self.view;
        spawn_local(async move {
            controller.delete_post(&post_id).await;
            view.set(controller.view());
        });
    }

    /// Submit `post`, then reload with `privacy`. `on_created` runs only when
    /// the server accepted the post.
    pub fn create(
        &self,
        post: NewPost,
        privacy: Option<String>,
        on_created: impl FnOnce() + 'static,
    ) {
        let controller = self.controller.clone();
        let mut view = self.view;
        spawn_local(async move {
            let outcome = controller.create_post(post, privacy.as_deref()).await;
            view.set(controller.view());
            if outcome == CreateOutcome::Created {
                on_created();
            }
        });
    }
}
