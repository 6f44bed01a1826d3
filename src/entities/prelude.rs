pub use super::channels::Entity as Channels;
pub use super::posts::Entity as Posts;
pub use super::publications::Entity as Publications;
