pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub use delete::delete_review;
pub use get::{get_review_by_id, list_reviews_by_username, list_reviews_for_title};
pub use post::create_review;
pub use put::update_review;
