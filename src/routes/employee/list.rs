use actix_web::{get, web};
use entity::employee::Model as EmployeeModel;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::employee::ListQuery;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ListQuery>,
) -> ApiResult<Vec<EmployeeModel>> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(10);
    let employees = db.list_employees(skip, limit).await?;
    Ok(ApiResponse::Ok(employees))
}
