mod approve;
mod create;
mod delete;
mod service;

pub use approve::ApproveCommentCommand;
pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use service::CommentCommandService;
