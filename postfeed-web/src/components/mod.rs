mod create_post;
mod filter_bar;
mod post_list;

pub use create_post::CreatePostForm;
pub use filter_bar::FilterBar;
pub use post_list::PostList;
