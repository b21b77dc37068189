// Database model structs

/// Answer labels in presentation order.
pub const ANSWER_LABELS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Clone, sqlx::FromRow)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

#[derive(sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub title: String,
}

#[derive(sqlx::FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category_id: i64,
    pub user_id: i64,
}

#[derive(sqlx::FromRow)]
pub struct Test {
    pub id: i64,
    pub title: String,
    pub course_id: i64,
}

#[derive(Clone, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub first_option: String,
    pub second_option: String,
    pub third_option: String,
    pub fourth_option: String,
    pub correct_answer: String,
    pub test_id: i64,
}

impl Question {
    /// The four choices paired with their labels, in A..D order.
    pub fn choices(&self) -> [(&'static str, &str); 4] {
        [
            ("A", self.first_option.as_str()),
            ("B", self.second_option.as_str()),
            ("C", self.third_option.as_str()),
            ("D", self.fourth_option.as_str()),
        ]
    }
}

#[derive(sqlx::FromRow)]
pub struct Profile {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub gender: String,
}

/// Per-user running tally of answered questions. Reset when a test completes.
#[derive(Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct CurrentResult {
    pub user_id: i64,
    pub correct_answers: i64,
    pub incorrect_answers: i64,
}
