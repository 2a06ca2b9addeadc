//! SeaORM adapter for the articles repository.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::articles;

pub mod dto;

pub use dto::{ArticleCreate, ArticleSummaryRow};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// All rows projected to summaries, newest date first. Rows sharing a date
/// keep insertion order.
pub async fn list_summaries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ArticleSummaryRow>, sea_orm::DbErr> {
    articles::Entity::find()
        .select_only()
        .columns([
            articles::Column::Id,
            articles::Column::Title,
            articles::Column::Description,
            articles::Column::Date,
            articles::Column::Author,
        ])
        .order_by_desc(articles::Column::Date)
        .order_by_asc(articles::Column::Id)
        .into_model::<ArticleSummaryRow>()
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<articles::Model>, sea_orm::DbErr> {
    articles::Entity::find_by_id(id).one(conn).await
}

pub async fn create_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ArticleCreate,
) -> Result<articles::Model, sea_orm::DbErr> {
    let active = articles::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        description: Set(dto.description),
        content: Set(dto.content),
        date: Set(dto.date),
        author: Set(dto.author),
    };

    active.insert(conn).await
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    articles::Entity::find().count(conn).await
}
