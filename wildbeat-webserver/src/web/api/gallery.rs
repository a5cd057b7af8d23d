use super::*;

#[get("/gallery?<category>")]
pub fn get_gallery(
    db: &State<Connections>,
    category: Option<&str>,
) -> Result<Vec<json::GalleryImage>> {
    let images = usecases::gallery_images(&db.shared()?, category)?;
    Ok(Json(images.into_iter().map(Into::into).collect()))
}

#[post("/gallery", data = "<image>")]
pub fn post_gallery_image(
    db: &State<Connections>,
    image: JsonResult<json::NewGalleryImage>,
) -> Result<json::Created> {
    let image = from_json::new_gallery_image(image?.into_inner());
    let id = usecases::add_gallery_image(&db.exclusive()?, image)?;
    Ok(created(id, "Photo uploaded successfully"))
}
