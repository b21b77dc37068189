use color_eyre::{eyre::OptionExt, Result};

use super::models::CurrentResult;
use super::Db;

impl Db {
    pub async fn current_result(&self, user_id: i64) -> Result<CurrentResult> {
        let result = sqlx::query_as::<_, CurrentResult>(
            "SELECT user_id, correct_answers, incorrect_answers FROM current_results WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_eyre("no score counter for user")?;

        Ok(result)
    }

    /// Tally one answered question. The increment happens in a single
    /// UPDATE so concurrent submissions from the same user cannot lose
    /// a count to an interleaved read-modify-write.
    pub async fn record_answer(&self, user_id: i64, correct: bool) -> Result<CurrentResult> {
        let (correct_delta, incorrect_delta) = if correct { (1, 0) } else { (0, 1) };

        let result = sqlx::query_as::<_, CurrentResult>(
            r#"
            UPDATE current_results
            SET correct_answers = correct_answers + ?,
                incorrect_answers = incorrect_answers + ?
            WHERE user_id = ?
            RETURNING user_id, correct_answers, incorrect_answers
            "#,
        )
        .bind(correct_delta)
        .bind(incorrect_delta)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_eyre("no score counter for user")?;

        Ok(result)
    }

    /// Read the counter and reset it to (0, 0) in one transaction,
    /// returning the pre-reset values.
    pub async fn take_final_score(&self, user_id: i64) -> Result<CurrentResult> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query_as::<_, CurrentResult>(
            "SELECT user_id, correct_answers, incorrect_answers FROM current_results WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_eyre("no score counter for user")?;

        sqlx::query(
            "UPDATE current_results SET correct_answers = 0, incorrect_answers = 0 WHERE user_id = ?",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "score counter taken for user_id={user_id}: correct={}, incorrect={}",
            result.correct_answers,
            result.incorrect_answers
        );
        Ok(result)
    }
}
