use async_trait::async_trait;

use crate::core::domain::command::CommandError;
use crate::core::domain::entity::app_user::{AppUser, AppUserCommand};
use crate::core::domain::transaction::{ToSql, TransactionError, TransactionWrapper};

const INSERT: &str = "INSERT INTO app_user \
    (id, first_name, last_name, middle_name, gender, age, province, city) \
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)";

const UPDATE: &str = "UPDATE app_user SET \
    first_name = $2, last_name = $3, middle_name = $4, gender = $5, \
    age = $6, province = $7, city = $8 \
    WHERE id = $1";

const DELETE_ALL: &str = "DELETE FROM app_user";

fn params(app_user: AppUser) -> Vec<Box<dyn ToSql>> {
    vec![
        Box::new(app_user.id) as Box<dyn ToSql>,
        Box::new(app_user.first_name) as Box<dyn ToSql>,
        Box::new(app_user.last_name) as Box<dyn ToSql>,
        Box::new(app_user.middle_name) as Box<dyn ToSql>,
        Box::new(app_user.gender) as Box<dyn ToSql>,
        Box::new(app_user.age) as Box<dyn ToSql>,
        Box::new(app_user.province) as Box<dyn ToSql>,
        Box::new(app_user.city) as Box<dyn ToSql>,
    ]
}

fn command_error(error: TransactionError, id: &str) -> CommandError {
    match error {
        TransactionError::UniqueViolation(_) => CommandError::app_user_already_exists(id),
        TransactionError::ConcurrencyConflict(_) => CommandError::ConcurrencyError {
            entity_type: "AppUser".to_string(),
        },
        e => CommandError::DatabaseError(e.to_string()),
    }
}

pub struct PgAppUserRepository;

#[async_trait]
impl AppUserCommand for PgAppUserRepository {
    async fn insert(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
        app_user: AppUser,
    ) -> Result<(), CommandError> {
        let id = app_user.id.clone();
        transaction
            .execute(INSERT, params(app_user))
            .await
            .map_err(|e| command_error(e, &id))?;
        Ok(())
    }

    async fn update(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
        app_user: AppUser,
    ) -> Result<(), CommandError> {
        let id = app_user.id.clone();
        let updated = transaction
            .execute(UPDATE, params(app_user))
            .await
            .map_err(|e| command_error(e, &id))?;
        if updated == 0 {
            return Err(CommandError::app_user_not_found(&id));
        }
        Ok(())
    }

    async fn delete_all(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<u64, CommandError> {
        transaction
            .execute(DELETE_ALL, Vec::new())
            .await
            .map_err(|e| CommandError::DatabaseError(e.to_string()))
    }
}
