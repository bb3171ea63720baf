use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Serialize, Serializer};
use sqlx::{prelude::FromRow, types::Json};

/// Largest image accepted inline with a post.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub picture: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_image"
    )]
    pub image: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    #[serde(serialize_with = "nutrimeal_shared::serialize_timestamp")]
    pub created_at: i64,
    pub likes: i64,
    pub liked_by: Vec<String>,
    pub author: Author,
}

fn serialize_image<S: Serializer>(image: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
    match image {
        Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PostRow {
    pub id: String,
    pub content: String,
    pub image: Option<Vec<u8>>,
    pub image_type: Option<String>,
    pub author_id: String,
    pub author_name: String,
    pub author_picture: String,
    pub created_at: i64,
    pub likes: i64,
    pub liked_by: Json<Vec<String>>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            image: row.image,
            image_type: row.image_type,
            created_at: row.created_at,
            likes: row.likes,
            liked_by: row.liked_by.0,
            author: Author {
                id: row.author_id,
                name: row.author_name,
                picture: row.author_picture,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageInput {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

/// Fields of a new post as read from the multipart form; absent author fields stay `None`.
#[derive(Debug, Clone, Default)]
pub struct CreatePostInput {
    pub content: String,
    pub author_id: Option<String>,
    pub author_name: Option<String>,
    pub author_picture: Option<String>,
    pub image: Option<ImageInput>,
}
