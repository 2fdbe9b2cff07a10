pub mod articles;
pub mod categories;
pub mod comments;
pub mod media;
pub mod users;
