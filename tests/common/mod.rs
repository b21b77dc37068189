use gain_knowledge::db::{Db, NewProfile, QuestionFields};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "gain_knowledge_test_{}_{}.db",
        std::process::id(),
        id
    ));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite:{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

pub fn profile(first_name: &'static str) -> NewProfile<'static> {
    NewProfile {
        first_name,
        last_name: "Tester",
        email: "tester@example.com",
        date_of_birth: None,
        gender: "Do not show",
    }
}

pub async fn create_user(db: &Db, username: &str) -> i64 {
    db.create_user(username, "hunter2", profile("Test"))
        .await
        .expect("failed to create user")
}

/// Seed a category, a course owned by `user_id`, and a test; returns the test id.
pub async fn create_test_with_course(db: &Db, user_id: i64) -> i64 {
    let category_id = db
        .create_category("Science")
        .await
        .expect("failed to create category");
    let course_id = db
        .create_course("Physics", "Introductory physics", category_id, user_id)
        .await
        .expect("failed to create course");
    db.create_test("Mechanics", course_id)
        .await
        .expect("failed to create test")
}

pub fn question(title: &'static str, correct: &'static str) -> QuestionFields<'static> {
    QuestionFields {
        title,
        first_option: "first",
        second_option: "second",
        third_option: "third",
        fourth_option: "fourth",
        correct_answer: correct,
    }
}
