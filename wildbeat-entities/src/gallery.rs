use crate::{id::Id, time::Timestamp};

/// Category filter value that matches every image.
pub const ALL_CATEGORIES: &str = "all";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub id         : Id,
    pub title      : Option<String>,
    pub image_url  : String,
    pub category   : Option<String>,
    pub alt_text   : Option<String>,
    pub created_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGalleryImage {
    pub title     : Option<String>,
    pub image_url : String,
    pub category  : Option<String>,
    pub alt_text  : Option<String>,
}
