pub mod platform;
pub mod review;
pub mod title;
pub mod user;

pub use platform::Platform;
pub use review::Review;
pub use title::Title;
pub use user::User;
