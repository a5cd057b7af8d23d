use super::*;

#[get("/tours")]
pub fn get_tours(db: &State<Connections>) -> Result<Vec<json::Tour>> {
    let tours = usecases::all_tours(&db.shared()?)?;
    Ok(Json(tours.into_iter().map(Into::into).collect()))
}

#[get("/tours/<id>")]
pub fn get_tour(db: &State<Connections>, id: Id) -> Result<json::Tour> {
    let tour = usecases::get_tour(&db.shared()?, id)?;
    Ok(Json(tour.into()))
}
