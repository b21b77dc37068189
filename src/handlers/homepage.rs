use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    db::NewProfile,
    extractors::{IsHtmx, MaybeUser},
    names,
    rejections::{AppError, ResultExt},
    utils, views,
    views::homepage as homepage_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/register", get(register_page).post(register_post))
        .route("/login", get(login_page).post(login_post))
        .route("/logout", post(logout_post))
}

async fn homepage(MaybeUser(user): MaybeUser, IsHtmx(is_htmx): IsHtmx) -> axum::response::Response {
    // Logged-in visitors skip the landing page.
    if user.is_some() {
        return Redirect::to(names::CATEGORIES_URL).into_response();
    }

    views::render(is_htmx, "Welcome", homepage_views::landing()).into_response()
}

async fn register_page(IsHtmx(is_htmx): IsHtmx) -> maud::Markup {
    views::render(
        is_htmx,
        "Register",
        homepage_views::register(homepage_views::RegisterState::NoError),
    )
}

#[derive(Deserialize)]
struct RegisterPost {
    username: String,
    password: String,
    first_name: String,
    last_name: String,
    email: String,
    #[serde(default)]
    date_of_birth: String,
    #[serde(default = "default_gender")]
    gender: String,
}

fn default_gender() -> String {
    "Do not show".to_string()
}

async fn register_post(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Form(body): Form<RegisterPost>,
) -> Result<axum::response::Response, AppError> {
    if body.username.trim().is_empty() || body.password.is_empty() {
        let page = views::render(
            is_htmx,
            "Register",
            homepage_views::register(homepage_views::RegisterState::EmptyFields),
        );
        return Ok(page.into_response());
    }

    let date_of_birth = if body.date_of_birth.is_empty() {
        None
    } else {
        Some(body.date_of_birth.as_str())
    };

    let profile = NewProfile {
        first_name: &body.first_name,
        last_name: &body.last_name,
        email: &body.email,
        date_of_birth,
        gender: &body.gender,
    };

    match state
        .db
        .create_user(body.username.trim(), &body.password, profile)
        .await
    {
        Ok(_) => Ok(Redirect::to(names::LOGIN_URL).into_response()),
        Err(e) if e.to_string().contains("already taken") => {
            tracing::warn!("duplicate username attempted: {}", body.username);
            let page = views::render(
                is_htmx,
                "Register",
                homepage_views::register(homepage_views::RegisterState::UsernameTaken),
            );
            Ok(page.into_response())
        }
        Err(e) => {
            tracing::error!("could not create user: {e}");
            Err(AppError::Internal("could not create user"))
        }
    }
}

async fn login_page(IsHtmx(is_htmx): IsHtmx) -> maud::Markup {
    views::render(
        is_htmx,
        "Login",
        homepage_views::login(homepage_views::LoginState::NoError),
    )
}

#[derive(Deserialize)]
struct LoginPost {
    username: String,
    password: String,
}

async fn login_post(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Form(body): Form<LoginPost>,
) -> Result<axum::response::Response, AppError> {
    let valid = state
        .db
        .verify_user_password(&body.username, &body.password)
        .await
        .reject("could not verify password")?;

    if !valid {
        let page = views::render(
            is_htmx,
            "Login",
            homepage_views::login(homepage_views::LoginState::InvalidCredentials),
        );
        return Ok(page.into_response());
    }

    let user = state
        .db
        .find_user_by_username(&body.username)
        .await
        .reject("could not get user")?
        .ok_or(AppError::NotFound)?;

    let session = state
        .db
        .create_user_session(user.id)
        .await
        .reject("could not create session")?;

    let cookie = utils::cookie(
        names::USER_SESSION_COOKIE_NAME,
        &session,
        state.secure_cookies,
    );
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie.parse().unwrap());

    Ok((headers, Redirect::to(names::CATEGORIES_URL)).into_response())
}

async fn logout_post(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<axum::response::Response, AppError> {
    if let Some(session) = jar.get(names::USER_SESSION_COOKIE_NAME) {
        state
            .db
            .delete_user_session(session.value())
            .await
            .reject("could not delete session")?;
    }

    let cookie = utils::clear_cookie(names::USER_SESSION_COOKIE_NAME, state.secure_cookies);
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie.parse().unwrap());

    Ok((headers, Redirect::to(names::HOME_URL)).into_response())
}
