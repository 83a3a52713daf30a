//! Render model for the feed container.
//!
//! The container is described by a single [`FeedView`] value that is rebuilt
//! from scratch for every successful fetch. Frontends draw it; they never
//! patch it in place.

use crate::media::MediaPreview;
use crate::models::{Post, PostId};

pub const NO_POSTS_PLACEHOLDER: &str = "No posts available.";

/// Identifier assigned to the rendered block of a post.
pub fn element_id(post_id: &PostId) -> String {
    format!("post_{post_id}")
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostBlock {
    pub post_id: PostId,
    pub element_id: String,
    pub heading: String,
    pub privacy_label: String,
    pub created_label: String,
    pub media: Option<MediaPreview>,
}

impl PostBlock {
    pub fn from_post(post: &Post) -> Self {
        let media = post
            .media_data
            .as_deref()
            .and_then(|data| MediaPreview::decode(data, post.media_type.as_deref()));
        Self {
            post_id: post.id.clone(),
            element_id: element_id(&post.id),
            heading: post.content.clone(),
            privacy_label: format!("Privacy: {}", post.privacy),
            created_label: format!("Created at: {}", post.created_at),
            media,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FeedView {
    /// Nothing has been loaded yet.
    #[default]
    Idle,
    /// The last fetch returned no posts.
    Empty,
    Posts(Vec<PostBlock>),
}

impl FeedView {
    pub fn render(posts: &[Post]) -> Self {
        if posts.is_empty() {
            return FeedView::Empty;
        }
        FeedView::Posts(posts.iter().map(PostBlock::from_post).collect())
    }

    pub fn blocks(&self) -> &[PostBlock] {
        match self {
            FeedView::Posts(blocks) => blocks,
            FeedView::Idle | FeedView::Empty => &[],
        }
    }

    /// Placeholder text shown instead of blocks, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FeedView::Empty => Some(NO_POSTS_PLACEHOLDER),
            FeedView::Idle | FeedView::Posts(_) => None,
        }
    }

    pub fn find(&self, element_id: &str) -> Option<&PostBlock> {
        self.blocks().iter().find(|b| b.element_id == element_id)
    }

    /// Drop the block rendered under `element_id`. Returns whether one was
    /// found. Removing the last block leaves an empty container, not the
    /// placeholder.
    pub fn remove(&mut self, element_id: &str) -> bool {
        let FeedView::Posts(blocks) = self else {
            return false;
        };
        let before = blocks.len();
        blocks.retain(|b| b.element_id != element_id);
        before != blocks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    fn post(id: i64, content: &str, media_data: Option<&str>) -> Post {
        Post {
            id: PostId::Int(id),
            content: content.to_string(),
            privacy: "public".to_string(),
            created_at: format!("2023-07-0{id} 12:00:00"),
            media_data: media_data.map(str::to_string),
            media_type: None,
        }
    }

    #[test]
    fn empty_list_shows_placeholder_only() {
        let view = FeedView::render(&[]);
        assert_eq!(view, FeedView::Empty);
        assert_eq!(view.placeholder(), Some("No posts available."));
        assert!(view.blocks().is_empty());
    }

    #[test]
    fn blocks_follow_server_order_verbatim() {
        let posts = vec![post(3, "third", None), post(1, "first", None), post(2, "second", None)];
        let view = FeedView::render(&posts);

        assert_eq!(view.placeholder(), None);
        let blocks = view.blocks();
        assert_eq!(blocks.len(), 3);
        let headings: Vec<_> = blocks.iter().map(|b| b.heading.as_str()).collect();
        assert_eq!(headings, vec!["third", "first", "second"]);
        assert_eq!(blocks[0].element_id, "post_3");
        assert_eq!(blocks[0].privacy_label, "Privacy: public");
        assert_eq!(blocks[0].created_label, "Created at: 2023-07-03 12:00:00");
    }

    #[test]
    fn media_preview_only_when_payload_present() {
        let posts = vec![post(1, "with", Some("/9j/4AAQ")), post(2, "without", None)];
        let view = FeedView::render(&posts);
        let blocks = view.blocks();

        let media = blocks[0].media.as_ref().unwrap();
        assert_eq!(media.kind, MediaKind::Image);
        assert_eq!(media.src, "data:image/jpeg;base64,/9j/4AAQ");
        assert!(blocks[1].media.is_none());
    }

    #[test]
    fn text_ids_get_derived_element_ids() {
        let mut p = post(1, "x", None);
        p.id = PostId::Text("abc".to_string());
        assert_eq!(PostBlock::from_post(&p).element_id, "post_abc");
    }

    #[test]
    fn remove_reports_whether_block_existed() {
        let mut view = FeedView::render(&[post(1, "a", None), post(2, "b", None)]);
        assert!(view.remove("post_1"));
        assert!(!view.remove("post_1"));
        assert_eq!(view.blocks().len(), 1);
        assert!(view.find("post_2").is_some());

        let mut empty = FeedView::Empty;
        assert!(!empty.remove("post_2"));
    }
}
