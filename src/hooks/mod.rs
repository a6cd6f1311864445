pub mod use_random_user;
pub mod use_appreciation;

pub use use_random_user::{use_random_user, FetchState};
pub use use_appreciation::use_appreciation;
