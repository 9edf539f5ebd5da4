use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::PgPool;

use crate::core::domain::entity::app_user::{AppUser, AppUserQuery};
use crate::core::domain::filter::{AppUserSearch, FilterValue};
use crate::core::domain::query::QueryError;

const SELECT: &str = "SELECT id, first_name, last_name, middle_name, gender, age, province, city \
    FROM app_user";

#[derive(Debug, sqlx::FromRow)]
struct AppUserRow {
    id: String,
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    gender: String,
    age: i32,
    province: String,
    city: String,
}

impl From<AppUserRow> for AppUser {
    fn from(row: AppUserRow) -> Self {
        AppUser {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            middle_name: row.middle_name,
            gender: row.gender,
            age: row.age,
            province: row.province,
            city: row.city,
        }
    }
}

fn query_error(error: sqlx::Error) -> QueryError {
    match error {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            QueryError::ConnectionError(error.to_string())
        }
        e => QueryError::app_user_fetch(e.to_string()),
    }
}

// Column names come from a closed enum; every value is a bound parameter.
fn search_sql(search: &AppUserSearch) -> String {
    let mut sql = SELECT.to_string();
    let mut position = 0;
    for (i, predicate) in search.filter.predicates().iter().enumerate() {
        position = i + 1;
        sql.push_str(if i == 0 { " WHERE " } else { " AND " });
        sql.push_str(&format!("{} = ${}", predicate.column.as_str(), position));
    }
    sql.push_str(&format!(
        " ORDER BY id LIMIT ${} OFFSET ${}",
        position + 1,
        position + 2
    ));
    sql
}

pub struct PgAppUserQuery {
    pool: PgPool,
}

impl PgAppUserQuery {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppUserQuery for PgAppUserQuery {
    async fn find_by_id(&self, id: &str) -> Result<Option<AppUser>, QueryError> {
        let sql = format!("{} WHERE id = $1", SELECT);
        let row = sqlx::query_as::<_, AppUserRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;
        Ok(row.map(AppUser::from))
    }

    async fn exists(&self, id: &str) -> Result<bool, QueryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM app_user WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)
    }

    async fn find(&self, search: &AppUserSearch) -> Result<Vec<AppUser>, QueryError> {
        let sql = search_sql(search);
        let mut query = sqlx::query_as::<_, AppUserRow>(&sql);
        for predicate in search.filter.predicates() {
            query = match &predicate.value {
                FilterValue::Text(value) => query.bind(value.clone()),
                FilterValue::Int(value) => query.bind(*value),
            };
        }

        query
            .bind(search.page.limit())
            .bind(search.page.offset())
            .fetch(&self.pool)
            .map_ok(AppUser::from)
            .try_collect::<Vec<_>>()
            .await
            .map_err(query_error)
    }
}
