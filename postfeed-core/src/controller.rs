//! The feed controller: load, render, delete and create posts.
//!
//! Every operation is best effort. Failures are logged and leave the current
//! view untouched; nothing is retried and no error reaches the caller.

use crate::client::FeedClient;
use crate::models::{NewPost, Post, PostId};
use crate::view::{element_id, FeedView};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info};

/// Sequence number of a load request. A response never replaces a view
/// built from a newer request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadToken(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    view: FeedView,
    issued: u64,
    applied: LoadToken,
}

impl FeedState {
    pub fn view(&self) -> &FeedView {
        &self.view
    }

    pub fn begin_load(&mut self) -> LoadToken {
        self.issued += 1;
        LoadToken(self.issued)
    }

    /// Replace the view with `posts` unless a newer load has already been
    /// applied. A newer load that is still in flight, or that failed, does
    /// not block an older one.
    pub fn complete_load(&mut self, token: LoadToken, posts: &[Post]) -> bool {
        if token < self.applied {
            return false;
        }
        self.view = FeedView::render(posts);
        self.applied = token;
        true
    }

    pub fn remove_post(&mut self, post_id: &PostId) -> bool {
        self.view.remove(&element_id(post_id))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was applied while this one was in flight.
    Stale,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    /// The server accepted the delete but no block with the post's element id
    /// was on screen.
    NotRendered,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Failed,
}

/// Cheap to clone; clones share the same state. Meant for a single-threaded
/// event loop, state is never borrowed across an await point.
#[derive(Clone, Debug)]
pub struct FeedController {
    client: FeedClient,
    state: Rc<RefCell<FeedState>>,
}

impl FeedController {
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            state: Rc::new(RefCell::new(FeedState::default())),
        }
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> FeedView {
        self.state.borrow().view().clone()
    }

    pub async fn load_feed(&self, privacy: Option<&str>) -> LoadOutcome {
        let token = self.state.borrow_mut().begin_load();

        let posts = match self.client.fetch_posts(privacy).await {
            Ok(posts) => posts,
            Err(e) => {
                error!("Error fetching posts: {}", e);
                return LoadOutcome::Failed;
            }
        };

        if self.state.borrow_mut().complete_load(token, &posts) {
            LoadOutcome::Applied
        } else {
            debug!("Discarding stale feed response {:?}", token);
            LoadOutcome::Stale
        }
    }

    /// Replace the view directly with `posts`, superseding any load in flight.
    pub fn render_feed(&self, posts: &[Post]) {
        let mut state = self.state.borrow_mut();
        let token = state.begin_load();
        state.complete_load(token, posts);
    }

    pub async fn delete_post(&self, post_id: &PostId) -> DeleteOutcome {
        let reply = match self.client.delete_post(post_id).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Error deleting post: {}", e);
                return DeleteOutcome::Failed;
            }
        };
        info!("{}", reply.message);

        if self.state.borrow_mut().remove_post(post_id) {
            DeleteOutcome::Removed
        } else {
            debug!("No rendered block for post {}", post_id);
            DeleteOutcome::NotRendered
        }
    }

    /// Submit a new post and reload the feed with `privacy` on success.
    pub async fn create_post(&self, post: NewPost, privacy: Option<&str>) -> CreateOutcome {
        match self.client.create_post(post).await {
            Ok(reply) => info!("{}", reply.message),
            Err(e) => {
                error!("Error creating post: {}", e);
                return CreateOutcome::Failed;
            }
        }
        self.load_feed(privacy).await;
        CreateOutcome::Created
    }
}
