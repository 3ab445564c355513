pub mod get;
pub mod post;

pub use get::get_user_by_username;
pub use post::create_user;
