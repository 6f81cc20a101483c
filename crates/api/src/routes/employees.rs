//! Employee record CRUD and lifecycle endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use common::EmployeeId;
use domain::{
    ContactInfo, Employee, EmployeeRepository, EmployeeService, EmployeeStatus, EmploymentInfo,
    Money, PersonalInfo,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: EmployeeRepository> {
    pub service: EmployeeService<R>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
    pub personal_info: PersonalInfoRequest,
    pub contact_info: ContactInfoRequest,
    pub employment: EmploymentRequest,
}

#[derive(Deserialize)]
pub struct PersonalInfoRequest {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct ContactInfoRequest {
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct EmploymentRequest {
    pub title: String,
    pub department: String,
    pub salary_cents: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl PersonalInfoRequest {
    fn into_domain(self) -> Result<PersonalInfo, ApiError> {
        Ok(PersonalInfo::new(
            self.first_name,
            self.last_name,
            self.national_id,
            self.gender,
            self.birth_date,
        )?)
    }
}

impl ContactInfoRequest {
    fn into_domain(self) -> Result<ContactInfo, ApiError> {
        Ok(ContactInfo::new(self.email, self.phone, self.address)?)
    }
}

impl EmploymentRequest {
    fn into_domain(self) -> Result<EmploymentInfo, ApiError> {
        Ok(EmploymentInfo::new(
            self.title,
            self.department,
            Money::from_cents(self.salary_cents),
            self.start_date,
            self.end_date,
        )?)
    }
}

// -- Response types --

#[derive(Serialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub personal_info: PersonalInfoResponse,
    pub contact_info: ContactInfoResponse,
    pub current_assignment: EmploymentResponse,
    pub assignment_history: Vec<EmploymentResponse>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct PersonalInfoResponse {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub national_id: String,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct ContactInfoResponse {
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Serialize)]
pub struct EmploymentResponse {
    pub title: String,
    pub department: String,
    pub salary_cents: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
}

impl EmployeeResponse {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee
                .id()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default(),
            personal_info: PersonalInfoResponse {
                first_name: employee.personal_info().first_name().to_string(),
                last_name: employee.personal_info().last_name().to_string(),
                full_name: employee.personal_info().full_name(),
                national_id: employee.personal_info().national_id().to_string(),
                gender: employee.personal_info().gender().map(String::from),
                birth_date: employee.personal_info().birth_date(),
            },
            contact_info: ContactInfoResponse {
                email: employee.contact_info().email().to_string(),
                phone: employee.contact_info().phone().map(String::from),
                address: employee.contact_info().address().map(String::from),
            },
            current_assignment: EmploymentResponse::from_assignment(
                employee.current_assignment(),
            ),
            assignment_history: employee
                .assignment_history()
                .iter()
                .map(EmploymentResponse::from_assignment)
                .collect(),
            status: employee.status().to_string(),
            created_at: employee.created_at().to_rfc3339(),
            updated_at: employee.updated_at().to_rfc3339(),
        }
    }
}

impl EmploymentResponse {
    fn from_assignment(assignment: &EmploymentInfo) -> Self {
        Self {
            title: assignment.title().to_string(),
            department: assignment.department().to_string(),
            salary_cents: assignment.salary().cents(),
            start_date: assignment.start_date(),
            end_date: assignment.end_date(),
            is_current: assignment.is_current(),
        }
    }
}

// -- Handlers --

/// POST /employees — register a new employee.
#[tracing::instrument(skip(state, req))]
pub async fn create<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let personal_info = req.personal_info.into_domain()?;
    let contact_info = req.contact_info.into_domain()?;
    let employment = req.employment.into_domain()?;

    let employee = state
        .service
        .create_employee(personal_info, contact_info, employment)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(EmployeeResponse::from_employee(&employee)),
    ))
}

/// GET /employees — list all employees.
#[tracing::instrument(skip(state))]
pub async fn list<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = state.service.list_all().await?;
    Ok(Json(
        employees.iter().map(EmployeeResponse::from_employee).collect(),
    ))
}

/// GET /employees/:id — load an employee record by identifier.
#[tracing::instrument(skip(state))]
pub async fn get<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee_id = EmployeeId::new(id.clone());
    let employee = state
        .service
        .find_by_id(&employee_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Employee {id} not found")))?;

    Ok(Json(EmployeeResponse::from_employee(&employee)))
}

/// GET /employees/national-id/:national_id — look up by national identity number.
#[tracing::instrument(skip(state))]
pub async fn get_by_national_id<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(national_id): Path<String>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state
        .service
        .find_by_national_id(&national_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Employee with national id {national_id} not found"))
        })?;

    Ok(Json(EmployeeResponse::from_employee(&employee)))
}

/// GET /employees/status/:status — list employees in a given status.
#[tracing::instrument(skip(state))]
pub async fn list_by_status<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(status): Path<String>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let status = parse_status(&status)?;
    let employees = state.service.list_by_status(status).await?;
    Ok(Json(
        employees.iter().map(EmployeeResponse::from_employee).collect(),
    ))
}

/// GET /employees/department/:department — list employees currently assigned
/// to a department.
#[tracing::instrument(skip(state))]
pub async fn list_by_department<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(department): Path<String>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = state.service.list_by_department(&department).await?;
    Ok(Json(
        employees.iter().map(EmployeeResponse::from_employee).collect(),
    ))
}

/// PUT /employees/:id/personal-info — replace the personal details.
#[tracing::instrument(skip(state, req))]
pub async fn update_personal_info<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<PersonalInfoRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let info = req.into_domain()?;
    let employee = state
        .service
        .update_personal_info(&EmployeeId::new(id), info)
        .await?;
    Ok(Json(EmployeeResponse::from_employee(&employee)))
}

/// PUT /employees/:id/contact-info — replace the contact details.
#[tracing::instrument(skip(state, req))]
pub async fn update_contact_info<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<ContactInfoRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let info = req.into_domain()?;
    let employee = state
        .service
        .update_contact_info(&EmployeeId::new(id), info)
        .await?;
    Ok(Json(EmployeeResponse::from_employee(&employee)))
}

/// PUT /employees/:id/job — assign a new position, archiving the current one.
#[tracing::instrument(skip(state, req))]
pub async fn change_job<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<EmploymentRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let assignment = req.into_domain()?;
    let employee = state
        .service
        .change_job(&EmployeeId::new(id), assignment)
        .await?;
    Ok(Json(EmployeeResponse::from_employee(&employee)))
}

/// PUT /employees/:id/status/:status — set an explicit employment status.
#[tracing::instrument(skip(state))]
pub async fn change_status<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path((id, status)): Path<(String, String)>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let status = parse_status(&status)?;
    let employee = state
        .service
        .change_status(&EmployeeId::new(id), status)
        .await?;
    Ok(Json(EmployeeResponse::from_employee(&employee)))
}

/// PUT /employees/:id/deactivate — mark the employee inactive.
#[tracing::instrument(skip(state))]
pub async fn deactivate<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state.service.deactivate(&EmployeeId::new(id)).await?;
    Ok(Json(EmployeeResponse::from_employee(&employee)))
}

/// PUT /employees/:id/reactivate — mark the employee active again.
#[tracing::instrument(skip(state))]
pub async fn reactivate<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state.service.reactivate(&EmployeeId::new(id)).await?;
    Ok(Json(EmployeeResponse::from_employee(&employee)))
}

/// PUT /employees/:id/leave — place the employee on leave.
#[tracing::instrument(skip(state))]
pub async fn place_on_leave<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state.service.place_on_leave(&EmployeeId::new(id)).await?;
    Ok(Json(EmployeeResponse::from_employee(&employee)))
}

/// DELETE /employees/:id — remove the record entirely.
#[tracing::instrument(skip(state))]
pub async fn delete<R: EmployeeRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .service
        .delete_employee(&EmployeeId::new(id.clone()))
        .await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Employee {id} not found")))
    }
}

fn parse_status(status: &str) -> Result<EmployeeStatus, ApiError> {
    status
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid status: {status}")))
}
