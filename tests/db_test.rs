mod common;

use common::{create_test_db, create_test_with_course, create_user, profile, question};
use gain_knowledge::db::NewProfile;

#[tokio::test]
async fn test_db_connection() {
    let db = create_test_db().await;
    // Schema is usable right away
    assert!(db.categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_creation_zeroes_score_counter() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "alice").await;

    let result = db.current_result(user_id).await.unwrap();
    assert_eq!(result.correct_answers, 0);
    assert_eq!(result.incorrect_answers, 0);
}

#[tokio::test]
async fn test_duplicate_username() {
    let db = create_test_db().await;
    create_user(&db, "dupe").await;

    let result = db.create_user("dupe", "other", profile("Other")).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("already taken"));
}

#[tokio::test]
async fn test_password_verification() {
    let db = create_test_db().await;
    create_user(&db, "bob").await;

    assert!(db.verify_user_password("bob", "hunter2").await.unwrap());
    assert!(!db.verify_user_password("bob", "wrong").await.unwrap());
    assert!(!db.verify_user_password("nobody", "hunter2").await.unwrap());
}

#[tokio::test]
async fn test_change_password() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "carol").await;

    // Wrong current password is rejected
    assert!(!db.change_password(user_id, "wrong", "new-pass").await.unwrap());
    assert!(db.verify_user_password("carol", "hunter2").await.unwrap());

    // Correct current password changes it
    assert!(db.change_password(user_id, "hunter2", "new-pass").await.unwrap());
    assert!(db.verify_user_password("carol", "new-pass").await.unwrap());
    assert!(!db.verify_user_password("carol", "hunter2").await.unwrap());
}

#[tokio::test]
async fn test_user_sessions() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "dave").await;

    let session = db.create_user_session(user_id).await.unwrap();
    let user = db.get_user_by_session(&session).await.unwrap().unwrap();
    assert_eq!(user.id, user_id);
    assert_eq!(user.username, "dave");

    db.delete_user_session(&session).await.unwrap();
    assert!(db.get_user_by_session(&session).await.unwrap().is_none());
}

#[tokio::test]
async fn test_profile_update() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "erin").await;

    db.update_profile(
        user_id,
        NewProfile {
            first_name: "Erin",
            last_name: "Updated",
            email: "erin@example.com",
            date_of_birth: Some("1990-01-01"),
            gender: "Female",
        },
    )
    .await
    .unwrap();

    let updated = db.get_profile(user_id).await.unwrap().unwrap();
    assert_eq!(updated.last_name, "Updated");
    assert_eq!(updated.date_of_birth.as_deref(), Some("1990-01-01"));
    assert_eq!(updated.gender, "Female");
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "frank").await;
    let session = db.create_user_session(user_id).await.unwrap();
    let test_id = create_test_with_course(&db, user_id).await;

    db.delete_user(user_id).await.unwrap();

    assert!(db.get_profile(user_id).await.unwrap().is_none());
    assert!(db.get_user_by_session(&session).await.unwrap().is_none());
    assert!(db.current_result(user_id).await.is_err());
    // Authored content goes with the account
    assert!(db.get_test(test_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_catalog_crud() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "grace").await;

    let category_id = db.create_category("Math").await.unwrap();
    let categories = db.categories().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].title, "Math");

    let course_id = db
        .create_course("Algebra", "Linear equations", category_id, user_id)
        .await
        .unwrap();
    let courses = db.courses_by_category(category_id).await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Algebra");
    assert_eq!(courses[0].user_id, user_id);

    db.update_course(course_id, "Algebra I", "Updated").await.unwrap();
    let course = db.get_course(course_id).await.unwrap().unwrap();
    assert_eq!(course.title, "Algebra I");
    assert_eq!(course.description, "Updated");

    let test_id = db.create_test("Quiz 1", course_id).await.unwrap();
    assert_eq!(db.tests_by_course(course_id).await.unwrap().len(), 1);

    db.rename_test(test_id, "Quiz One").await.unwrap();
    assert_eq!(db.get_test(test_id).await.unwrap().unwrap().title, "Quiz One");

    let owner = db.course_of_test(test_id).await.unwrap().unwrap();
    assert_eq!(owner.user_id, user_id);

    db.delete_course(course_id).await.unwrap();
    assert!(db.get_course(course_id).await.unwrap().is_none());
    // Tests cascade with the course
    assert!(db.get_test(test_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_questions_keep_insertion_order() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "heidi").await;
    let test_id = create_test_with_course(&db, user_id).await;

    db.create_question(test_id, question("Q1", "A")).await.unwrap();
    db.create_question(test_id, question("Q2", "B")).await.unwrap();
    db.create_question(test_id, question("Q3", "C")).await.unwrap();

    let questions = db.questions_for_test(test_id).await.unwrap();
    let titles: Vec<&str> = questions.iter().map(|q| q.title.as_str()).collect();
    assert_eq!(titles, ["Q1", "Q2", "Q3"]);
    assert_eq!(db.questions_count(test_id).await.unwrap(), 3);
}

#[tokio::test]
async fn test_question_crud() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "ivan").await;
    let test_id = create_test_with_course(&db, user_id).await;

    let question_id = db.create_question(test_id, question("Q1", "B")).await.unwrap();

    let fetched = db.get_question(question_id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Q1");
    assert_eq!(fetched.correct_answer, "B");
    assert_eq!(
        fetched.choices().map(|(label, _)| label),
        ["A", "B", "C", "D"]
    );

    db.update_question(question_id, question("Q1 edited", "D"))
        .await
        .unwrap();
    let updated = db.get_question(question_id).await.unwrap().unwrap();
    assert_eq!(updated.title, "Q1 edited");
    assert_eq!(updated.correct_answer, "D");

    let owner = db.course_of_question(question_id).await.unwrap().unwrap();
    assert_eq!(owner.user_id, user_id);

    db.delete_question(question_id).await.unwrap();
    assert!(db.get_question(question_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_record_answer_increments_one_side() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "judy").await;

    let after_correct = db.record_answer(user_id, true).await.unwrap();
    assert_eq!(after_correct.correct_answers, 1);
    assert_eq!(after_correct.incorrect_answers, 0);

    let after_incorrect = db.record_answer(user_id, false).await.unwrap();
    assert_eq!(after_incorrect.correct_answers, 1);
    assert_eq!(after_incorrect.incorrect_answers, 1);
}

#[tokio::test]
async fn test_take_final_score_resets_counter() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "kim").await;

    db.record_answer(user_id, true).await.unwrap();
    db.record_answer(user_id, true).await.unwrap();
    db.record_answer(user_id, false).await.unwrap();

    let score = db.take_final_score(user_id).await.unwrap();
    assert_eq!(score.correct_answers, 2);
    assert_eq!(score.incorrect_answers, 1);

    let reset = db.current_result(user_id).await.unwrap();
    assert_eq!(reset.correct_answers, 0);
    assert_eq!(reset.incorrect_answers, 0);
}

#[tokio::test]
async fn test_score_counters_are_per_user() {
    let db = create_test_db().await;
    let first = create_user(&db, "lena").await;
    let second = create_user(&db, "mark").await;

    db.record_answer(first, true).await.unwrap();
    db.record_answer(second, false).await.unwrap();

    let first_result = db.current_result(first).await.unwrap();
    assert_eq!(first_result.correct_answers, 1);
    assert_eq!(first_result.incorrect_answers, 0);

    db.take_final_score(first).await.unwrap();

    // Resetting one user's counter leaves the other untouched
    let second_result = db.current_result(second).await.unwrap();
    assert_eq!(second_result.correct_answers, 0);
    assert_eq!(second_result.incorrect_answers, 1);
}
