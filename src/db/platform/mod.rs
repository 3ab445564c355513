pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub use delete::delete_platform;
pub use get::{get_platform_by_id, list_platforms};
pub use post::create_platform;
pub use put::update_platform;
