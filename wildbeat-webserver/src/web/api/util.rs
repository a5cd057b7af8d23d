use super::*;

pub const API_NAME: &str = "Wildbeat Safari API";

const ENDPOINTS: &[&str] = &[
    "auth",
    "tours",
    "bookings",
    "reviews",
    "gallery",
    "donations",
    "payments",
    "support-page",
];

#[get("/")]
pub fn get_api(version: &State<Version>) -> Json<json::ApiInfo> {
    Json(json::ApiInfo {
        message: API_NAME.to_owned(),
        version: version.0.to_owned(),
        endpoints: ENDPOINTS.iter().map(|e| (*e).to_owned()).collect(),
    })
}

#[get("/health")]
pub fn get_health() -> Json<json::Health> {
    Json(json::Health {
        status: "OK".to_owned(),
        message: format!("{API_NAME} is running!"),
    })
}
