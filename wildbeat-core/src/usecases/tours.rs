use super::{not_found_as, prelude::*};

pub fn get_tour<R: TourRepo>(repo: &R, id: Id) -> Result<Tour> {
    repo.get_tour(id).map_err(|err| not_found_as(err, Error::TourNotFound))
}

pub fn all_tours<R: TourRepo>(repo: &R) -> Result<Vec<Tour>> {
    Ok(repo.all_tours()?)
}

pub fn create_tour<R: TourRepo>(repo: &R, tour: NewTour) -> Result<Id> {
    if tour.title.trim().is_empty() {
        return Err(Error::Title);
    }
    if !(tour.price.is_finite() && tour.price > 0.0) {
        return Err(Error::Price);
    }
    Ok(repo.create_tour(&tour)?)
}
