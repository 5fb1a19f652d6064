use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use models::user;

use crate::user::domain::{UserChanges, UserRecord};
use crate::user::errors::UserError;
use crate::user::repository::UserRepository;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

fn to_record(m: user::Model) -> UserRecord {
    UserRecord { id: m.id, name: m.name, email: m.email, password_hash: m.password }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list(&self) -> Result<Vec<UserRecord>, UserError> {
        let rows = user::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| UserError::Repository(e.to_string()))?;
        Ok(rows.into_iter().map(to_record).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>, UserError> {
        let row = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UserError::Repository(e.to_string()))?;
        Ok(row.map(to_record))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<UserRecord>, UserError> {
        let rows = user::Entity::find()
            .filter(user::Column::Name.eq(name))
            .all(&self.db)
            .await
            .map_err(|e| UserError::Repository(e.to_string()))?;
        Ok(rows.into_iter().map(to_record).collect())
    }

    async fn insert(&self, name: &str, email: &str, password_hash: &str) -> Result<UserRecord, UserError> {
        let am = user::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password: Set(password_hash.to_string()),
        };
        let created = am
            .insert(&self.db)
            .await
            .map_err(|e| UserError::Repository(e.to_string()))?;
        Ok(to_record(created))
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<u64, UserError> {
        if changes.is_empty() {
            return Ok(0);
        }
        // Single UPDATE .. WHERE id = $1; no fetch-before-write, the caller
        // reads rows_affected to learn whether the id existed.
        let mut stmt = user::Entity::update_many().filter(user::Column::Id.eq(id));
        if let Some(name) = changes.name {
            stmt = stmt.col_expr(user::Column::Name, Expr::value(name));
        }
        if let Some(email) = changes.email {
            stmt = stmt.col_expr(user::Column::Email, Expr::value(email));
        }
        if let Some(hash) = changes.password_hash {
            stmt = stmt.col_expr(user::Column::Password, Expr::value(hash));
        }
        let res = stmt
            .exec(&self.db)
            .await
            .map_err(|e| UserError::Repository(e.to_string()))?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: i32) -> Result<u64, UserError> {
        let res = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| UserError::Repository(e.to_string()))?;
        Ok(res.rows_affected)
    }
}
