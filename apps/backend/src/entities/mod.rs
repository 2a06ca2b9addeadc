pub mod articles;

pub use articles::Entity as Articles;
pub use articles::Model as Article;
