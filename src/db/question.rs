use color_eyre::Result;

use super::models::{Course, Question};
use super::Db;

pub struct QuestionFields<'a> {
    pub title: &'a str,
    pub first_option: &'a str,
    pub second_option: &'a str,
    pub third_option: &'a str,
    pub fourth_option: &'a str,
    pub correct_answer: &'a str,
}

impl Db {
    /// Questions of a test in quiz-progression order (insertion order).
    pub async fn questions_for_test(&self, test_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, first_option, second_option, third_option, fourth_option,
                   correct_answer, test_id
            FROM questions WHERE test_id = ? ORDER BY id
            "#,
        )
        .bind(test_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn questions_count(&self, test_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE test_id = ?")
            .bind(test_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn get_question(&self, question_id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, first_option, second_option, third_option, fourth_option,
                   correct_answer, test_id
            FROM questions WHERE id = ?
            "#,
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn create_question(&self, test_id: i64, fields: QuestionFields<'_>) -> Result<i64> {
        let question_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (title, first_option, second_option, third_option, fourth_option, correct_answer, test_id)
            VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id
            "#,
        )
        .bind(fields.title)
        .bind(fields.first_option)
        .bind(fields.second_option)
        .bind(fields.third_option)
        .bind(fields.fourth_option)
        .bind(fields.correct_answer)
        .bind(test_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("question created: id={question_id}, test_id={test_id}");
        Ok(question_id)
    }

    pub async fn update_question(
        &self,
        question_id: i64,
        fields: QuestionFields<'_>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE questions
            SET title = ?, first_option = ?, second_option = ?, third_option = ?,
                fourth_option = ?, correct_answer = ?
            WHERE id = ?
            "#,
        )
        .bind(fields.title)
        .bind(fields.first_option)
        .bind(fields.second_option)
        .bind(fields.third_option)
        .bind(fields.fourth_option)
        .bind(fields.correct_answer)
        .bind(question_id)
        .execute(&self.pool)
        .await?;

        tracing::info!("question {question_id} updated");
        Ok(())
    }

    pub async fn delete_question(&self, question_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("deleted question {question_id}");
        Ok(())
    }

    /// Resolve the course owning a question, used for ownership checks.
    pub async fn course_of_question(&self, question_id: i64) -> Result<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.title, c.description, c.category_id, c.user_id
            FROM courses c
            JOIN tests t ON t.course_id = c.id
            JOIN questions q ON q.test_id = t.id
            WHERE q.id = ?
            "#,
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }
}
