use super::prelude::*;
use crate::util::validate::AutoCorrect;

pub fn add_gallery_image<R: GalleryRepo>(repo: &R, image: NewGalleryImage) -> Result<Id> {
    let image = image.auto_correct();
    if image.image_url.is_empty() {
        return Err(Error::ImageUrl);
    }
    Ok(repo.create_gallery_image(&image)?)
}

pub fn gallery_images<R: GalleryRepo>(repo: &R, category: Option<&str>) -> Result<Vec<GalleryImage>> {
    let category = category
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES));
    Ok(repo.gallery_images_newest_first(category)?)
}
