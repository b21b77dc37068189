use maud::{html, Markup};

use crate::{
    db::{Question, Test},
    names,
};

pub struct QuestionData<'a> {
    pub test: &'a Test,
    pub question: &'a Question,
    pub cursor: i64,
    pub questions_count: i64,
}

pub struct ScoreSummary {
    pub correct: i64,
    pub incorrect: i64,
    pub total: i64,
    pub percentage: i64,
}

pub fn question(data: QuestionData) -> Markup {
    html! {
        p { "Taking test " mark { (data.test.title) } "." }
        article {
            p."question-progress" {
                "Question " strong { (data.cursor + 1) } " of " (data.questions_count)
            }

            h3 { (data.question.title) }

            form method="post" action=(names::question_url(data.test.id, data.cursor)) {
                fieldset {
                    @for (label, text) in data.question.choices() {
                        label {
                            input type="radio" name="answer" value=(label) required;
                            strong { (label) } ". " (text)
                        }
                    }
                }
                input type="submit" value="Submit answer";
            }
        }
    }
}

pub fn no_question(test: &Test) -> Markup {
    html! {
        article {
            p { "There is no question available for " mark { (test.title) } " yet." }
            a href=(names::tests_url(test.course_id)) { "Back to tests" }
        }
    }
}

pub fn final_score(test: &Test, summary: &ScoreSummary) -> Markup {
    html! {
        article {
            h2 { "Final score for " mark { (test.title) } }
            p { "Correct answers: " strong { (summary.correct) } }
            p { "Incorrect answers: " strong { (summary.incorrect) } }
            p { "Total answered: " (summary.total) }
            h3."score-percentage" { (summary.percentage) "%" }
            a href=(names::tests_url(test.course_id)) { "Back to tests" }
        }
    }
}
