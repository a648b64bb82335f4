//! Domain entities - the core business objects.

mod user;

mod post;

pub use post::{NewPost, Post, PostStatus};
pub use user::User;
