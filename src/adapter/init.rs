use crate::adapter::config::AppConfig;
use crate::adapter::store::pg::command::app_user::PgAppUserRepository;
use crate::adapter::store::pg::query::app_user::PgAppUserQuery;
use crate::adapter::store::pg::transaction_manager::PgTransactionManager;
use crate::adapter::web::app_state::AppState;
use crate::core::domain::entity::app_user::{AppUserCommand, AppUserQuery};
use crate::core::domain::transaction_manager::TransactionManager;
use crate::core::port::reset_app_users::ResetAppUsersInputBoundary;
use crate::core::use_case::create_app_user::CreateAppUserUseCase;
use crate::core::use_case::find_app_user::FindAppUserUseCase;
use crate::core::use_case::find_app_users::FindAppUsersUseCase;
use crate::core::use_case::reset_app_users::ResetAppUsersUseCase;
use crate::core::use_case::update_app_user::UpdateAppUserUseCase;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

pub struct AppInitializer;

impl AppInitializer {
    pub async fn initialize(config: &AppConfig) -> Result<Arc<AppState>, AppInitializerError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections())
            .connect(config.db_url())
            .await
            .map_err(|e| AppInitializerError::DatabaseInitError(e.to_string()))?;

        if config.run_migrations() {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| AppInitializerError::MigrationError(e.to_string()))?;
            info!("database migrations applied");
        }

        let transaction_manager: Arc<dyn TransactionManager> =
            Arc::new(PgTransactionManager::new(pool.clone()));
        let app_user_repository: Arc<dyn AppUserCommand> = Arc::new(PgAppUserRepository);
        let app_user_query: Arc<dyn AppUserQuery> = Arc::new(PgAppUserQuery::new(pool));

        if config.reset_on_start() {
            ResetAppUsersUseCase::new(app_user_repository.clone(), transaction_manager.clone())
                .execute()
                .await
                .map_err(|e| AppInitializerError::ResetError(e.to_string()))?;
        }

        Ok(Self::build_state(
            app_user_repository,
            app_user_query,
            transaction_manager,
        ))
    }

    pub fn build_state(
        app_user_repository: Arc<dyn AppUserCommand>,
        app_user_query: Arc<dyn AppUserQuery>,
        transaction_manager: Arc<dyn TransactionManager>,
    ) -> Arc<AppState> {
        Arc::new(AppState {
            create_app_user_use_case: Arc::new(CreateAppUserUseCase::new(
                app_user_repository.clone(),
                app_user_query.clone(),
                transaction_manager.clone(),
            )),
            update_app_user_use_case: Arc::new(UpdateAppUserUseCase::new(
                app_user_repository,
                app_user_query.clone(),
                transaction_manager,
            )),
            find_app_user_use_case: Arc::new(FindAppUserUseCase::new(app_user_query.clone())),
            find_app_users_use_case: Arc::new(FindAppUsersUseCase::new(app_user_query)),
        })
    }
}

#[derive(Debug, Error)]
pub enum AppInitializerError {
    #[error("Failed to initialize database: {0}")]
    DatabaseInitError(String),
    #[error("Failed to run migrations: {0}")]
    MigrationError(String),
    #[error("Failed to reset AppUsers: {0}")]
    ResetError(String),
}
