use crate::db::postgres_service::PostgresService;
use crate::types::{employee::REmployee, error::AppError};
use entity::employee::{ActiveModel as EmployeeActive, Entity as Employee, Model as EmployeeModel};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, QuerySelect, Set};

impl PostgresService {
    pub async fn create_employee(&self, data: REmployee) -> Result<EmployeeModel, AppError> {
        Ok(Employee::insert(EmployeeActive {
            name: Set(data.name),
            age: Set(data.age),
            department: Set(data.department),
            position: Set(data.position),
            ..Default::default()
        })
        .exec_with_returning(&self.database_connection)
        .await?)
    }

    pub async fn get_employee(&self, id: i32) -> Result<Option<EmployeeModel>, AppError> {
        Ok(Employee::find_by_id(id)
            .one(&self.database_connection)
            .await?)
    }

    pub async fn list_employees(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<EmployeeModel>, AppError> {
        Ok(Employee::find()
            .order_by_asc(entity::employee::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn update_employee(
        &self,
        id: i32,
        data: REmployee,
    ) -> Result<Option<EmployeeModel>, AppError> {
        let Some(existing) = self.get_employee(id).await? else {
            return Ok(None);
        };
        let mut am: EmployeeActive = existing.into();
        am.name = Set(data.name);
        am.age = Set(data.age);
        am.department = Set(data.department);
        am.position = Set(data.position);
        Ok(Some(am.update(&self.database_connection).await?))
    }

    /// Delete and hand back the removed record, mirroring what callers get
    /// from the other write paths.
    pub async fn delete_employee(&self, id: i32) -> Result<Option<EmployeeModel>, AppError> {
        let Some(existing) = self.get_employee(id).await? else {
            return Ok(None);
        };
        existing
            .clone()
            .delete(&self.database_connection)
            .await?;
        Ok(Some(existing))
    }
}
