// External API clients

pub mod random_user;
