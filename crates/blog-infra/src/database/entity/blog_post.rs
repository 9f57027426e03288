//! BlogPost entity for SeaORM.
//!
//! This is the only place that knows the column layout of `blog_posts`.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::{NotSet, Set};

use blog_core::domain::{BlogPost, NewBlogPost};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub creation_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from a `blog_posts` row to the domain entity.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            creation_date: model.creation_date.into(),
        }
    }
}

/// Conversion from a new post to an insertable row. The id is left to the sequence.
impl From<NewBlogPost> for ActiveModel {
    fn from(post: NewBlogPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            content: Set(post.content),
            creation_date: Set(post.creation_date.into()),
        }
    }
}
