//! Category/course/test/question browsing and authoring.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    db::{Course, Db, QuestionFields, ANSWER_LABELS},
    extractors::{AuthGuard, IsHtmx},
    names,
    rejections::{AppError, ResultExt},
    views,
    views::catalog as catalog_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}", get(list_courses))
        .route("/course/{course_id}", get(course_details))
        .route("/tests/{course_id}", get(list_tests))
        .route("/create_course", get(create_course_page).post(create_course_post))
        .route("/user_courses", get(user_courses))
        .route("/edit_course/{course_id}", get(edit_course_page).post(edit_course_post))
        .route("/delete_course/{course_id}", post(delete_course_post))
        .route("/user_tests/{course_id}", get(user_tests))
        .route("/create_test/{course_id}", get(create_test_page).post(create_test_post))
        .route("/edit_test/{test_id}", get(edit_test_page).post(edit_test_post))
        .route("/delete_test/{test_id}", post(delete_test_post))
        .route("/user_questions/{test_id}", get(user_questions))
        .route(
            "/create_question/{test_id}",
            get(create_question_page).post(create_question_post),
        )
        .route(
            "/edit_question/{question_id}",
            get(edit_question_page).post(edit_question_post),
        )
        .route("/delete_question/{question_id}", post(delete_question_post))
        .route("/show_question/{question_id}", get(show_question))
}

// --- Ownership checks ---

async fn require_course_owner(db: &Db, course_id: i64, user_id: i64) -> Result<Course, AppError> {
    let course = db
        .get_course(course_id)
        .await
        .reject("could not get course")?
        .ok_or(AppError::NotFound)?;

    if course.user_id != user_id {
        return Err(AppError::Forbidden);
    }
    Ok(course)
}

async fn require_test_owner(db: &Db, test_id: i64, user_id: i64) -> Result<Course, AppError> {
    let course = db
        .course_of_test(test_id)
        .await
        .reject("could not get course of test")?
        .ok_or(AppError::NotFound)?;

    if course.user_id != user_id {
        return Err(AppError::Forbidden);
    }
    Ok(course)
}

async fn require_question_owner(
    db: &Db,
    question_id: i64,
    user_id: i64,
) -> Result<Course, AppError> {
    let course = db
        .course_of_question(question_id)
        .await
        .reject("could not get course of question")?
        .ok_or(AppError::NotFound)?;

    if course.user_id != user_id {
        return Err(AppError::Forbidden);
    }
    Ok(course)
}

// --- Browsing (public) ---

async fn list_categories(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Markup, AppError> {
    let categories = state
        .db
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(views::render(
        is_htmx,
        "Categories",
        catalog_views::categories(&categories),
    ))
}

async fn list_courses(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(category_id): Path<i64>,
) -> Result<Markup, AppError> {
    let category = state
        .db
        .get_category(category_id)
        .await
        .reject("could not get category")?
        .ok_or(AppError::NotFound)?;

    let courses = state
        .db
        .courses_by_category(category_id)
        .await
        .reject("could not get courses")?;

    Ok(views::render(
        is_htmx,
        &category.title,
        catalog_views::courses(&category, &courses),
    ))
}

async fn course_details(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(course_id): Path<i64>,
) -> Result<Markup, AppError> {
    let course = state
        .db
        .get_course(course_id)
        .await
        .reject("could not get course")?
        .ok_or(AppError::NotFound)?;

    Ok(views::render(
        is_htmx,
        &course.title,
        catalog_views::course_details(&course),
    ))
}

async fn list_tests(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(course_id): Path<i64>,
) -> Result<Markup, AppError> {
    let course = state
        .db
        .get_course(course_id)
        .await
        .reject("could not get course")?
        .ok_or(AppError::NotFound)?;

    let tests = state
        .db
        .tests_by_course(course_id)
        .await
        .reject("could not get tests")?;

    Ok(views::render(
        is_htmx,
        &course.title,
        catalog_views::tests(&course, &tests),
    ))
}

// --- Course authoring ---

#[derive(Deserialize)]
struct CoursePost {
    title: String,
    description: String,
    #[serde(default)]
    category_id: i64,
}

async fn create_course_page(
    AuthGuard(_user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Markup, AppError> {
    let categories = state
        .db
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(views::render(
        is_htmx,
        "Create Course",
        catalog_views::course_form(&categories, None),
    ))
}

async fn create_course_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Form(body): Form<CoursePost>,
) -> Result<axum::response::Response, AppError> {
    if body.title.trim().is_empty() {
        return Err(AppError::Input("course title must not be empty"));
    }

    state
        .db
        .create_course(body.title.trim(), &body.description, body.category_id, user.id)
        .await
        .reject("could not create course")?;

    Ok(Redirect::to(names::CATEGORIES_URL).into_response())
}

async fn user_courses(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Markup, AppError> {
    let courses = state
        .db
        .courses_by_user(user.id)
        .await
        .reject("could not get courses")?;

    Ok(views::render(
        is_htmx,
        "My Courses",
        catalog_views::user_courses(&courses),
    ))
}

async fn edit_course_page(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(course_id): Path<i64>,
) -> Result<Markup, AppError> {
    let course = require_course_owner(&state.db, course_id, user.id).await?;

    let categories = state
        .db
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(views::render(
        is_htmx,
        "Edit Course",
        catalog_views::course_form(&categories, Some(&course)),
    ))
}

async fn edit_course_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Form(body): Form<CoursePost>,
) -> Result<axum::response::Response, AppError> {
    require_course_owner(&state.db, course_id, user.id).await?;

    state
        .db
        .update_course(course_id, body.title.trim(), &body.description)
        .await
        .reject("could not update course")?;

    Ok(Redirect::to(names::USER_COURSES_URL).into_response())
}

async fn delete_course_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<axum::response::Response, AppError> {
    require_course_owner(&state.db, course_id, user.id).await?;

    state
        .db
        .delete_course(course_id)
        .await
        .reject("could not delete course")?;

    Ok(Redirect::to(names::USER_COURSES_URL).into_response())
}

// --- Test authoring ---

#[derive(Deserialize)]
struct TestPost {
    title: String,
}

async fn user_tests(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(course_id): Path<i64>,
) -> Result<Markup, AppError> {
    let course = state
        .db
        .get_course(course_id)
        .await
        .reject("could not get course")?
        .ok_or(AppError::NotFound)?;

    let tests = state
        .db
        .tests_by_course(course_id)
        .await
        .reject("could not get tests")?;

    let is_owner = course.user_id == user.id;

    Ok(views::render(
        is_htmx,
        &course.title,
        catalog_views::user_tests(&course, &tests, is_owner),
    ))
}

async fn create_test_page(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(course_id): Path<i64>,
) -> Result<Markup, AppError> {
    let course = require_course_owner(&state.db, course_id, user.id).await?;

    Ok(views::render(
        is_htmx,
        "Create Test",
        catalog_views::test_form(&course, None),
    ))
}

async fn create_test_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Form(body): Form<TestPost>,
) -> Result<axum::response::Response, AppError> {
    require_course_owner(&state.db, course_id, user.id).await?;

    if body.title.trim().is_empty() {
        return Err(AppError::Input("test title must not be empty"));
    }

    state
        .db
        .create_test(body.title.trim(), course_id)
        .await
        .reject("could not create test")?;

    Ok(Redirect::to(&names::user_tests_url(course_id)).into_response())
}

async fn edit_test_page(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(test_id): Path<i64>,
) -> Result<Markup, AppError> {
    let course = require_test_owner(&state.db, test_id, user.id).await?;

    let test = state
        .db
        .get_test(test_id)
        .await
        .reject("could not get test")?
        .ok_or(AppError::NotFound)?;

    Ok(views::render(
        is_htmx,
        "Edit Test",
        catalog_views::test_form(&course, Some(&test)),
    ))
}

async fn edit_test_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(test_id): Path<i64>,
    Form(body): Form<TestPost>,
) -> Result<axum::response::Response, AppError> {
    let course = require_test_owner(&state.db, test_id, user.id).await?;

    state
        .db
        .rename_test(test_id, body.title.trim())
        .await
        .reject("could not rename test")?;

    Ok(Redirect::to(&names::user_tests_url(course.id)).into_response())
}

async fn delete_test_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Result<axum::response::Response, AppError> {
    let course = require_test_owner(&state.db, test_id, user.id).await?;

    state
        .db
        .delete_test(test_id)
        .await
        .reject("could not delete test")?;

    Ok(Redirect::to(&names::user_tests_url(course.id)).into_response())
}

// --- Question authoring ---

#[derive(Deserialize)]
struct QuestionPost {
    title: String,
    first_option: String,
    second_option: String,
    third_option: String,
    fourth_option: String,
    correct_answer: String,
}

impl QuestionPost {
    fn fields(&self) -> Result<QuestionFields<'_>, AppError> {
        if !ANSWER_LABELS.contains(&self.correct_answer.as_str()) {
            return Err(AppError::Input("correct answer must be one of A, B, C, D"));
        }

        Ok(QuestionFields {
            title: self.title.as_str(),
            first_option: self.first_option.as_str(),
            second_option: self.second_option.as_str(),
            third_option: self.third_option.as_str(),
            fourth_option: self.fourth_option.as_str(),
            correct_answer: self.correct_answer.as_str(),
        })
    }
}

async fn user_questions(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(test_id): Path<i64>,
) -> Result<Markup, AppError> {
    let test = state
        .db
        .get_test(test_id)
        .await
        .reject("could not get test")?
        .ok_or(AppError::NotFound)?;

    let course = state
        .db
        .course_of_test(test_id)
        .await
        .reject("could not get course of test")?
        .ok_or(AppError::NotFound)?;

    let questions = state
        .db
        .questions_for_test(test_id)
        .await
        .reject("could not get questions")?;

    let is_owner = course.user_id == user.id;

    Ok(views::render(
        is_htmx,
        &test.title,
        catalog_views::user_questions(&test, &questions, is_owner),
    ))
}

async fn create_question_page(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(test_id): Path<i64>,
) -> Result<Markup, AppError> {
    require_test_owner(&state.db, test_id, user.id).await?;

    let test = state
        .db
        .get_test(test_id)
        .await
        .reject("could not get test")?
        .ok_or(AppError::NotFound)?;

    Ok(views::render(
        is_htmx,
        "Create Question",
        catalog_views::question_form(&test, None),
    ))
}

async fn create_question_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(test_id): Path<i64>,
    Form(body): Form<QuestionPost>,
) -> Result<axum::response::Response, AppError> {
    require_test_owner(&state.db, test_id, user.id).await?;

    state
        .db
        .create_question(test_id, body.fields()?)
        .await
        .reject("could not create question")?;

    Ok(Redirect::to(&names::user_questions_url(test_id)).into_response())
}

async fn edit_question_page(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(question_id): Path<i64>,
) -> Result<Markup, AppError> {
    require_question_owner(&state.db, question_id, user.id).await?;

    let question = state
        .db
        .get_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound)?;

    let test = state
        .db
        .get_test(question.test_id)
        .await
        .reject("could not get test")?
        .ok_or(AppError::NotFound)?;

    Ok(views::render(
        is_htmx,
        "Edit Question",
        catalog_views::question_form(&test, Some(&question)),
    ))
}

async fn edit_question_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Form(body): Form<QuestionPost>,
) -> Result<axum::response::Response, AppError> {
    require_question_owner(&state.db, question_id, user.id).await?;

    let question = state
        .db
        .get_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound)?;

    state
        .db
        .update_question(question_id, body.fields()?)
        .await
        .reject("could not update question")?;

    Ok(Redirect::to(&names::user_questions_url(question.test_id)).into_response())
}

async fn delete_question_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<axum::response::Response, AppError> {
    require_question_owner(&state.db, question_id, user.id).await?;

    let question = state
        .db
        .get_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound)?;

    state
        .db
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    Ok(Redirect::to(&names::user_questions_url(question.test_id)).into_response())
}

async fn show_question(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(question_id): Path<i64>,
) -> Result<Markup, AppError> {
    let question = state
        .db
        .get_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound)?;

    let course = state
        .db
        .course_of_question(question_id)
        .await
        .reject("could not get course of question")?
        .ok_or(AppError::NotFound)?;

    let is_owner = course.user_id == user.id;

    Ok(views::render(
        is_htmx,
        "Question",
        catalog_views::question_details(&question, is_owner),
    ))
}
