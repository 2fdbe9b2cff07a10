use std::collections::HashMap;

use super::CommentQueryService;
use crate::{
    application::{
        authorization::require_admin,
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
    },
    domain::article::ArticleId,
};

pub struct ListArticleCommentsQuery {
    pub article_id: i64,
}

impl CommentQueryService {
    /// Moderation view: every comment, newest first, with its article's title.
    pub async fn list_all_comments(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<CommentDto>> {
        require_admin(actor)?;

        let comments = self.comment_repo.list_all().await?;
        let mut article_ids: Vec<ArticleId> = comments.iter().map(|c| c.article_id).collect();
        article_ids.sort_by_key(|id| id.0);
        article_ids.dedup();

        let articles: HashMap<ArticleId, _> = self
            .article_repo
            .find_by_ids(&article_ids)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(comments
            .into_iter()
            .map(|comment| {
                let article = articles.get(&comment.article_id);
                CommentDto::from(comment).with_article(article)
            })
            .collect())
    }

    /// Public view of one article's thread: approved comments only, newest first.
    pub async fn list_article_comments(
        &self,
        query: ListArticleCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::new(query.article_id)?;
        let comments = self
            .comment_repo
            .list_for_article(article_id, true)
            .await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
