use super::*;

#[post("/auth/signup", data = "<signup>")]
pub fn post_signup(
    db: &State<Connections>,
    cfg: &State<Cfg>,
    signup: JsonResult<json::Signup>,
) -> Result<json::Created> {
    let (new_user, admin_code) = from_json::try_signup(signup?.into_inner())?;
    let (id, role) = flows::signup(
        db,
        new_user,
        admin_code.as_deref(),
        cfg.admin_signup_code.as_deref(),
    )?;
    let msg = match role {
        Role::Admin => "Admin account created successfully",
        Role::Guest => "User created successfully",
    };
    Ok(created(id, msg))
}

#[post("/auth/login", data = "<login>")]
pub fn post_login(
    db: &State<Connections>,
    cfg: &State<Cfg>,
    login: JsonResult<json::Credentials>,
) -> Result<json::LoginResponse> {
    let login = login?.into_inner();
    let email = login
        .email
        .parse::<EmailAddress>()
        .map_err(|_| ParameterError::Credentials)?;
    let credentials = usecases::Credentials {
        email: &email,
        password: &login.password,
    };
    let (token, user) = flows::login(db, &credentials, cfg.session_lifetime)?;
    Ok(Json(json::LoginResponse {
        token: token.to_string(),
        user: user.into(),
    }))
}

#[post("/auth/logout")]
pub fn post_logout(db: &State<Connections>, auth: Auth) -> Result<json::Message> {
    let token = auth.token()?;
    flows::logout(db, &token)?;
    Ok(message("Logged out successfully"))
}

#[get("/auth/me")]
pub fn get_current_user(db: &State<Connections>, auth: Auth) -> Result<json::User> {
    let user = auth.user(db)?;
    Ok(Json(user.into()))
}
