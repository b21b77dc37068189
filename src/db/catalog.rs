use color_eyre::Result;

use super::models::{Category, Course, Test};
use super::Db;

impl Db {
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, title FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    pub async fn get_category(&self, category_id: i64) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, title FROM categories WHERE id = ?")
                .bind(category_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    pub async fn create_category(&self, title: &str) -> Result<i64> {
        let category_id: i64 =
            sqlx::query_scalar("INSERT INTO categories (title) VALUES (?) RETURNING id")
                .bind(title)
                .fetch_one(&self.pool)
                .await?;

        tracing::info!("category created: id={category_id}, title={title}");
        Ok(category_id)
    }

    pub async fn courses_by_category(&self, category_id: i64) -> Result<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, category_id, user_id FROM courses WHERE category_id = ? ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    pub async fn courses_by_user(&self, user_id: i64) -> Result<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, category_id, user_id FROM courses WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    pub async fn get_course(&self, course_id: i64) -> Result<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, category_id, user_id FROM courses WHERE id = ?",
        )
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    pub async fn create_course(
        &self,
        title: &str,
        description: &str,
        category_id: i64,
        user_id: i64,
    ) -> Result<i64> {
        let course_id: i64 = sqlx::query_scalar(
            "INSERT INTO courses (title, description, category_id, user_id) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(title)
        .bind(description)
        .bind(category_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("course created: id={course_id}, user_id={user_id}");
        Ok(course_id)
    }

    pub async fn update_course(&self, course_id: i64, title: &str, description: &str) -> Result<()> {
        sqlx::query("UPDATE courses SET title = ?, description = ? WHERE id = ?")
            .bind(title)
            .bind(description)
            .bind(course_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("course {course_id} updated");
        Ok(())
    }

    pub async fn delete_course(&self, course_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(course_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("deleted course {course_id}");
        Ok(())
    }

    pub async fn tests_by_course(&self, course_id: i64) -> Result<Vec<Test>> {
        let tests = sqlx::query_as::<_, Test>(
            "SELECT id, title, course_id FROM tests WHERE course_id = ? ORDER BY id",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tests)
    }

    pub async fn get_test(&self, test_id: i64) -> Result<Option<Test>> {
        let test = sqlx::query_as::<_, Test>("SELECT id, title, course_id FROM tests WHERE id = ?")
            .bind(test_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(test)
    }

    pub async fn create_test(&self, title: &str, course_id: i64) -> Result<i64> {
        let test_id: i64 =
            sqlx::query_scalar("INSERT INTO tests (title, course_id) VALUES (?, ?) RETURNING id")
                .bind(title)
                .bind(course_id)
                .fetch_one(&self.pool)
                .await?;

        tracing::info!("test created: id={test_id}, course_id={course_id}");
        Ok(test_id)
    }

    pub async fn rename_test(&self, test_id: i64, title: &str) -> Result<()> {
        sqlx::query("UPDATE tests SET title = ? WHERE id = ?")
            .bind(title)
            .bind(test_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("renamed test {test_id} to '{title}'");
        Ok(())
    }

    pub async fn delete_test(&self, test_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM tests WHERE id = ?")
            .bind(test_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("deleted test {test_id}");
        Ok(())
    }

    /// Resolve the course owning a test, used for ownership checks.
    pub async fn course_of_test(&self, test_id: i64) -> Result<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.title, c.description, c.category_id, c.user_id
            FROM courses c
            JOIN tests t ON t.course_id = c.id
            WHERE t.id = ?
            "#,
        )
        .bind(test_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }
}
