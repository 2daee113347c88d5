use partner_core_db::models::user::AppUserModel;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &UserRepositoryImpl,
        user: &AppUserModel,
    ) -> Result<AppUserModel, Box<dyn std::error::Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO app_user (id, display_name, email, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id)
        .bind(user.display_name.as_str())
        .bind(user.email.as_str())
        .bind(user.created_at);

        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.execute(&mut **transaction).await?;
        }

        repo.tracker.record_created(user);

        Ok(user.clone())
    }
}
