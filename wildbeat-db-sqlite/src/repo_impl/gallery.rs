use super::*;

impl_repo! {
    GalleryRepo {
        read {
            fn gallery_images_newest_first(&self, category: Option<&str>) -> Result<Vec<GalleryImage>>;
            fn count_gallery_images(&self) -> Result<usize>;
        }
        write {
            fn create_gallery_image(&self, image: &NewGalleryImage) -> Result<Id>;
        }
    }
}

fn create_gallery_image(conn: &mut SqliteConnection, image: &NewGalleryImage) -> Result<Id> {
    let NewGalleryImage {
        title,
        image_url,
        category,
        alt_text,
    } = image;
    let model = models::NewGalleryImage {
        title: title.as_deref(),
        image_url,
        category: category.as_deref(),
        alt_text: alt_text.as_deref(),
        created_at: Timestamp::now().as_millis(),
    };
    diesel::insert_into(schema::gallery::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_inserted_id(conn)
}

fn gallery_images_newest_first(
    conn: &mut SqliteConnection,
    category: Option<&str>,
) -> Result<Vec<GalleryImage>> {
    use schema::gallery::dsl;
    let mut query = dsl::gallery
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .into_boxed();
    if let Some(category) = category {
        query = query.filter(dsl::category.eq(category));
    }
    Ok(query
        .load::<models::GalleryImageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_gallery_images(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::gallery::dsl;
    Ok(dsl::gallery
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
