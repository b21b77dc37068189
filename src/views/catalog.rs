use maud::{html, Markup};

use crate::{
    db::{Category, Course, Question, Test},
    names,
};

pub fn categories(categories: &[Category]) -> Markup {
    html! {
        h2 { "Categories" }

        @if categories.is_empty() {
            p { "No categories yet." }
        }

        div."card-list" {
            @for category in categories {
                article {
                    h3 { (category.title) }
                    a href=(names::courses_url(category.id)) { "View courses" }
                }
            }
        }

        a role="button" href=(names::CREATE_COURSE_URL) { "Create a course" }
    }
}

pub fn courses(category: &Category, courses: &[Course]) -> Markup {
    html! {
        h2 { "Courses in " mark { (category.title) } }

        @if courses.is_empty() {
            p { "No courses in this category yet." }
        }

        div."card-list" {
            @for course in courses {
                article {
                    h3 { (course.title) }
                    a href=(names::course_url(course.id)) { "Details" }
                    " · "
                    a href=(names::tests_url(course.id)) { "Tests" }
                }
            }
        }
    }
}

pub fn course_details(course: &Course) -> Markup {
    html! {
        article {
            h2 { (course.title) }
            p { (course.description) }
            a role="button" href=(names::tests_url(course.id)) { "View tests" }
        }
    }
}

pub fn tests(course: &Course, tests: &[Test]) -> Markup {
    html! {
        h2 { "Tests for " mark { (course.title) } }

        @if tests.is_empty() {
            p { "No tests for this course yet." }
        }

        div."card-list" {
            @for test in tests {
                article {
                    h3 { (test.title) }
                    a role="button" href=(names::question_url(test.id, 0)) { "Start quiz" }
                }
            }
        }
    }
}

pub fn user_courses(courses: &[Course]) -> Markup {
    html! {
        h2 { "My courses" }

        @if courses.is_empty() {
            p { "You have not created any courses yet." }
        }

        div."card-list" {
            @for course in courses {
                article {
                    h3 { (course.title) }
                    a href=(names::user_tests_url(course.id)) { "Tests" }
                    " · "
                    a href=(names::edit_course_url(course.id)) { "Edit" }
                    form method="post" action=(names::delete_course_url(course.id)) {
                        input type="submit" value="Delete" class="danger";
                    }
                }
            }
        }

        a role="button" href=(names::CREATE_COURSE_URL) { "Create a course" }
    }
}

pub fn course_form(categories: &[Category], course: Option<&Course>) -> Markup {
    let (heading, action) = match course {
        Some(course) => ("Edit course", names::edit_course_url(course.id)),
        None => ("Create course", names::CREATE_COURSE_URL.to_string()),
    };

    html! {
        article {
            h2 { (heading) }

            form method="post" action=(action) {
                label { "Title"
                    input type="text" name="title"
                        value=(course.map(|c| c.title.as_str()).unwrap_or("")) required;
                }
                label { "Description"
                    textarea name="description" {
                        (course.map(|c| c.description.as_str()).unwrap_or(""))
                    }
                }
                @if course.is_none() {
                    label { "Category"
                        select name="category_id" {
                            @for category in categories {
                                option value=(category.id) { (category.title) }
                            }
                        }
                    }
                }
                input type="submit" value="Save";
            }
        }
    }
}

pub fn user_tests(course: &Course, tests: &[Test], is_owner: bool) -> Markup {
    html! {
        h2 { "Tests for " mark { (course.title) } }

        @if tests.is_empty() {
            p { "No tests for this course yet." }
        }

        div."card-list" {
            @for test in tests {
                article {
                    h3 { (test.title) }
                    a href=(names::user_questions_url(test.id)) { "Questions" }
                    @if is_owner {
                        " · "
                        a href=(names::edit_test_url(test.id)) { "Edit" }
                        form method="post" action=(names::delete_test_url(test.id)) {
                            input type="submit" value="Delete" class="danger";
                        }
                    }
                }
            }
        }

        @if is_owner {
            a role="button" href=(names::create_test_url(course.id)) { "Create a test" }
        }
    }
}

pub fn test_form(course: &Course, test: Option<&Test>) -> Markup {
    let (heading, action) = match test {
        Some(test) => ("Edit test", names::edit_test_url(test.id)),
        None => ("Create test", names::create_test_url(course.id)),
    };

    html! {
        article {
            h2 { (heading) " for " mark { (course.title) } }

            form method="post" action=(action) {
                label { "Title"
                    input type="text" name="title"
                        value=(test.map(|t| t.title.as_str()).unwrap_or("")) required;
                }
                input type="submit" value="Save";
            }
        }
    }
}

pub fn user_questions(test: &Test, questions: &[Question], is_owner: bool) -> Markup {
    html! {
        h2 { "Questions of " mark { (test.title) } }

        @if questions.is_empty() {
            p { "No questions in this test yet." }
        }

        div."card-list" {
            @for question in questions {
                article {
                    h3 { (question.title) }
                    a href=(names::show_question_url(question.id)) { "Details" }
                    @if is_owner {
                        " · "
                        a href=(names::edit_question_url(question.id)) { "Edit" }
                        form method="post" action=(names::delete_question_url(question.id)) {
                            input type="submit" value="Delete" class="danger";
                        }
                    }
                }
            }
        }

        @if is_owner {
            a role="button" href=(names::create_question_url(test.id)) { "Create a question" }
        }
    }
}

pub fn question_form(test: &Test, question: Option<&Question>) -> Markup {
    let (heading, action) = match question {
        Some(question) => ("Edit question", names::edit_question_url(question.id)),
        None => ("Create question", names::create_question_url(test.id)),
    };

    let option_fields = [
        ("first_option", "Option A", question.map(|q| q.first_option.as_str())),
        ("second_option", "Option B", question.map(|q| q.second_option.as_str())),
        ("third_option", "Option C", question.map(|q| q.third_option.as_str())),
        ("fourth_option", "Option D", question.map(|q| q.fourth_option.as_str())),
    ];

    html! {
        article {
            h2 { (heading) " for " mark { (test.title) } }

            form method="post" action=(action) {
                label { "Question"
                    textarea name="title" required {
                        (question.map(|q| q.title.as_str()).unwrap_or(""))
                    }
                }
                @for (name, label_text, value) in option_fields {
                    label { (label_text)
                        input type="text" name=(name) value=(value.unwrap_or("")) required;
                    }
                }
                label { "Correct answer"
                    select name="correct_answer" {
                        @for label in crate::db::ANSWER_LABELS {
                            @if question.is_some_and(|q| q.correct_answer == label) {
                                option value=(label) selected { (label) }
                            } @else {
                                option value=(label) { (label) }
                            }
                        }
                    }
                }
                input type="submit" value="Save";
            }
        }
    }
}

pub fn question_details(question: &Question, is_owner: bool) -> Markup {
    html! {
        article {
            h3 { (question.title) }

            ul {
                @for (label, text) in question.choices() {
                    li { strong { (label) } ". " (text) }
                }
            }

            @if is_owner {
                p { "Correct answer: " strong { (question.correct_answer) } }
                div {
                    a href=(names::edit_question_url(question.id)) { "Edit" }
                }
            }
        }
    }
}
