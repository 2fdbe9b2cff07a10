pub mod articles;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod media;

pub use articles::{ArticleDto, ArticleImageDto, CategorySummaryDto, ImageRemovalDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, MessageDto, TokenSubject, UserDto};
pub use categories::CategoryDto;
pub use comments::{CommentArticleDto, CommentDto};
pub use media::StoredImageDto;
