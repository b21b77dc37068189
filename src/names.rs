pub const USER_SESSION_COOKIE_NAME: &str = "user_session";

pub const HOME_URL: &str = "/";
pub const REGISTER_URL: &str = "/register";
pub const LOGIN_URL: &str = "/login";
pub const LOGOUT_URL: &str = "/logout";
pub const CATEGORIES_URL: &str = "/categories";
pub const CREATE_COURSE_URL: &str = "/create_course";
pub const USER_COURSES_URL: &str = "/user_courses";
pub const CHANGE_PASSWORD_URL: &str = "/change-password";

pub fn courses_url(category_id: i64) -> String {
    format!("/categories/{category_id}")
}

pub fn course_url(course_id: i64) -> String {
    format!("/course/{course_id}")
}

pub fn tests_url(course_id: i64) -> String {
    format!("/tests/{course_id}")
}

pub fn question_url(test_id: i64, cursor: i64) -> String {
    format!("/question/{test_id}/{cursor}")
}

pub fn final_score_url(test_id: i64) -> String {
    format!("/final_score/{test_id}")
}

pub fn show_question_url(question_id: i64) -> String {
    format!("/show_question/{question_id}")
}

pub fn edit_course_url(course_id: i64) -> String {
    format!("/edit_course/{course_id}")
}

pub fn delete_course_url(course_id: i64) -> String {
    format!("/delete_course/{course_id}")
}

pub fn user_tests_url(course_id: i64) -> String {
    format!("/user_tests/{course_id}")
}

pub fn create_test_url(course_id: i64) -> String {
    format!("/create_test/{course_id}")
}

pub fn edit_test_url(test_id: i64) -> String {
    format!("/edit_test/{test_id}")
}

pub fn delete_test_url(test_id: i64) -> String {
    format!("/delete_test/{test_id}")
}

pub fn user_questions_url(test_id: i64) -> String {
    format!("/user_questions/{test_id}")
}

pub fn create_question_url(test_id: i64) -> String {
    format!("/create_question/{test_id}")
}

pub fn edit_question_url(question_id: i64) -> String {
    format!("/edit_question/{question_id}")
}

pub fn delete_question_url(question_id: i64) -> String {
    format!("/delete_question/{question_id}")
}

pub fn profile_url(user_id: i64) -> String {
    format!("/profile/{user_id}")
}

pub fn profile_edit_url(user_id: i64) -> String {
    format!("/profile/{user_id}/edit")
}

pub fn profile_delete_url(user_id: i64) -> String {
    format!("/profile/{user_id}/delete")
}
