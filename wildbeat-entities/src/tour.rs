use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub id          : Id,
    pub title       : String,
    pub description : Option<String>,
    pub price       : f64,
    pub duration    : Option<String>,
    pub group_size  : Option<String>,
    pub location    : Option<String>,
    pub highlights  : Vec<String>,
    pub image_url   : Option<String>,
    pub rating      : f64,
    pub created_at  : Timestamp,
}

/// A tour that has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewTour {
    pub title       : String,
    pub description : Option<String>,
    pub price       : f64,
    pub duration    : Option<String>,
    pub group_size  : Option<String>,
    pub location    : Option<String>,
    pub highlights  : Vec<String>,
    pub image_url   : Option<String>,
    pub rating      : f64,
}
