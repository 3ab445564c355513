pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub use delete::delete_title;
pub use get::{get_title_by_id, list_titles};
pub use post::create_title;
pub use put::update_title;
