mod list;
mod service;

pub use list::ListArticleCommentsQuery;
pub use service::CommentQueryService;
