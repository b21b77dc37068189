use axum::{
    extract::{Path, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::{
    db::NewProfile,
    extractors::{AuthGuard, IsHtmx},
    names,
    rejections::{AppError, ResultExt},
    utils, views,
    views::account as account_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile/{user_id}", get(profile_details))
        .route("/profile/{user_id}/edit", get(profile_edit_page).post(profile_edit_post))
        .route("/profile/{user_id}/delete", post(profile_delete_post))
        .route("/change-password", get(change_password_page).post(change_password_post))
}

async fn profile_details(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(user_id): Path<i64>,
) -> Result<maud::Markup, AppError> {
    let profile = state
        .db
        .get_profile(user_id)
        .await
        .reject("could not get profile")?
        .ok_or(AppError::NotFound)?;

    let is_owner = user.id == user_id;

    Ok(views::render(
        is_htmx,
        "Profile",
        account_views::profile_details(&profile, is_owner),
    ))
}

async fn profile_edit_page(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(user_id): Path<i64>,
) -> Result<maud::Markup, AppError> {
    if user.id != user_id {
        return Err(AppError::Forbidden);
    }

    let profile = state
        .db
        .get_profile(user_id)
        .await
        .reject("could not get profile")?
        .ok_or(AppError::NotFound)?;

    Ok(views::render(
        is_htmx,
        "Edit Profile",
        account_views::profile_edit(&profile),
    ))
}

#[derive(Deserialize)]
struct ProfileEditPost {
    first_name: String,
    last_name: String,
    email: String,
    #[serde(default)]
    date_of_birth: String,
    #[serde(default)]
    gender: String,
}

async fn profile_edit_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(body): Form<ProfileEditPost>,
) -> Result<axum::response::Response, AppError> {
    if user.id != user_id {
        return Err(AppError::Forbidden);
    }

    let date_of_birth = if body.date_of_birth.is_empty() {
        None
    } else {
        Some(body.date_of_birth.as_str())
    };

    state
        .db
        .update_profile(
            user_id,
            NewProfile {
                first_name: &body.first_name,
                last_name: &body.last_name,
                email: &body.email,
                date_of_birth,
                gender: &body.gender,
            },
        )
        .await
        .reject("could not update profile")?;

    Ok(Redirect::to(&names::profile_url(user_id)).into_response())
}

async fn profile_delete_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<axum::response::Response, AppError> {
    if user.id != user_id {
        return Err(AppError::Forbidden);
    }

    state
        .db
        .delete_user(user_id)
        .await
        .reject("could not delete user")?;

    let cookie = utils::clear_cookie(names::USER_SESSION_COOKIE_NAME, state.secure_cookies);
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie.parse().unwrap());

    Ok((headers, Redirect::to(names::HOME_URL)).into_response())
}

async fn change_password_page(
    AuthGuard(_user): AuthGuard,
    IsHtmx(is_htmx): IsHtmx,
) -> maud::Markup {
    views::render(
        is_htmx,
        "Change Password",
        account_views::change_password(account_views::ChangePasswordState::NoError),
    )
}

#[derive(Deserialize)]
struct ChangePasswordPost {
    current_password: String,
    new_password: String,
}

async fn change_password_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Form(body): Form<ChangePasswordPost>,
) -> Result<axum::response::Response, AppError> {
    if body.new_password.is_empty() {
        let page = views::render(
            is_htmx,
            "Change Password",
            account_views::change_password(account_views::ChangePasswordState::EmptyFields),
        );
        return Ok(page.into_response());
    }

    let changed = state
        .db
        .change_password(user.id, &body.current_password, &body.new_password)
        .await
        .reject("could not change password")?;

    let pw_state = if changed {
        account_views::ChangePasswordState::Success
    } else {
        account_views::ChangePasswordState::IncorrectPassword
    };

    let page = views::render(
        is_htmx,
        "Change Password",
        account_views::change_password(pw_state),
    );
    Ok(page.into_response())
}
