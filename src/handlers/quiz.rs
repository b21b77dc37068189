//! Quiz-taking flow: step through a test's questions one at a time,
//! tally the running score, and show the final summary.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    routing::get,
    Form, Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    db::Question,
    extractors::{AuthGuard, IsHtmx},
    names,
    rejections::{AppError, ResultExt},
    views,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/question/{test_id}/{cursor}",
            get(display_question).post(submit_answer),
        )
        .route("/final_score/{test_id}", get(final_score))
}

/// Where the caller goes after answering the question at `cursor`.
#[derive(Debug, PartialEq, Eq)]
pub enum Navigation {
    Next { test_id: i64, cursor: i64 },
    FinalScore { test_id: i64 },
}

pub fn advance(test_id: i64, cursor: i64, questions_count: i64) -> Navigation {
    if cursor < questions_count - 1 {
        Navigation::Next {
            test_id,
            cursor: cursor + 1,
        }
    } else {
        Navigation::FinalScore { test_id }
    }
}

/// Floor percentage of correct answers; 0 when nothing was answered.
pub fn score_percentage(correct: i64, total: i64) -> i64 {
    if total == 0 {
        0
    } else {
        correct * 100 / total
    }
}

fn question_at(questions: &[Question], cursor: i64) -> Result<&Question, AppError> {
    usize::try_from(cursor)
        .ok()
        .and_then(|idx| questions.get(idx))
        .ok_or(AppError::OutOfRange {
            cursor,
            len: questions.len() as i64,
        })
}

async fn display_question(
    AuthGuard(_user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path((test_id, cursor)): Path<(i64, i64)>,
) -> Result<Markup, AppError> {
    let test = state
        .db
        .get_test(test_id)
        .await
        .reject("could not get test")?
        .ok_or(AppError::NotFound)?;

    let questions = state
        .db
        .questions_for_test(test_id)
        .await
        .reject("could not get questions")?;

    if questions.is_empty() {
        return Ok(views::render(
            is_htmx,
            &test.title,
            quiz_views::no_question(&test),
        ));
    }

    let question = question_at(&questions, cursor)?;

    Ok(views::render(
        is_htmx,
        &test.title,
        quiz_views::question(quiz_views::QuestionData {
            test: &test,
            question,
            cursor,
            questions_count: questions.len() as i64,
        }),
    ))
}

#[derive(Deserialize)]
struct AnswerForm {
    #[serde(default)]
    answer: String,
}

async fn submit_answer(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path((test_id, cursor)): Path<(i64, i64)>,
    Form(form): Form<AnswerForm>,
) -> Result<axum::response::Response, AppError> {
    let test = state
        .db
        .get_test(test_id)
        .await
        .reject("could not get test")?
        .ok_or(AppError::NotFound)?;

    let questions = state
        .db
        .questions_for_test(test_id)
        .await
        .reject("could not get questions")?;

    if questions.is_empty() {
        return Ok(views::page(&test.title, quiz_views::no_question(&test)).into_response());
    }

    let question = question_at(&questions, cursor)?;

    // Any value other than the correct label is scored as incorrect,
    // malformed input included.
    let correct = form.answer == question.correct_answer;

    let counter = state
        .db
        .record_answer(user.id, correct)
        .await
        .reject("could not record answer")?;

    tracing::debug!(
        "user {} answered question {cursor} of test {test_id}: correct={correct}, tally={}/{}",
        user.id,
        counter.correct_answers,
        counter.incorrect_answers
    );

    let target = match advance(test_id, cursor, questions.len() as i64) {
        Navigation::Next { test_id, cursor } => names::question_url(test_id, cursor),
        Navigation::FinalScore { test_id } => names::final_score_url(test_id),
    };

    Ok(Redirect::to(&target).into_response())
}

async fn final_score(
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

    let score = state
        .db
        .take_final_score(user.id)
        .await
        .reject("could not read score counter")?;

    let total = score.correct_answers + score.incorrect_answers;
    let summary = quiz_views::ScoreSummary {
        correct: score.correct_answers,
        incorrect: score.incorrect_answers,
        total,
        percentage: score_percentage(score.correct_answers, total),
    };

    Ok(views::render(
        is_htmx,
        "Final Score",
        quiz_views::final_score(&test, &summary),
    ))
}
