use super::Repository;
use crate::error::AppResult;
use crate::models::{Contact, CreateContactRequest, UpdateContactRequest};
use chrono::Utc;
use uuid::Uuid;

/// Repository extension for contact operations
impl Repository {
    /// List every contact owned by `user_id`, newest first
    pub async fn list_contacts(&self, user_id: Uuid) -> AppResult<Vec<Contact>> {
        let results = sqlx::query_as::<_, Contact>(
            r#"
            SELECT * FROM contacts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }

    /// Get a contact by ID regardless of owner
    pub async fn get_contact(&self, id: Uuid) -> AppResult<Option<Contact>> {
        let result = sqlx::query_as::<_, Contact>(
            r#"
            SELECT * FROM contacts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Create a contact for `user_id`
    pub async fn create_contact(
        &self,
        user_id: Uuid,
        request: &CreateContactRequest,
    ) -> AppResult<Contact> {
        let now = Utc::now();

        let result = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (id, user_id, name, email, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    /// Apply a partial update; `None` fields keep their stored value
    pub async fn update_contact(
        &self,
        id: Uuid,
        request: &UpdateContactRequest,
    ) -> AppResult<Option<Contact>> {
        let result = sqlx::query_as::<_, Contact>(
            r#"
            UPDATE contacts
            SET name = COALESCE($1, name),
                email = COALESCE($2, email),
                phone = COALESCE($3, phone),
                updated_at = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(request.name.as_deref())
        .bind(request.email.as_deref())
        .bind(request.phone.as_deref())
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Delete a contact, returning the removed row
    pub async fn delete_contact(&self, id: Uuid) -> AppResult<Option<Contact>> {
        let result = sqlx::query_as::<_, Contact>(
            r#"
            DELETE FROM contacts WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }
}
