use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::EmployeeId;
use domain::{
    ContactInfo, Employee, EmployeeRepository, EmployeeStatus, EmploymentInfo, PersonalInfo,
    RepositoryError,
};
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

const COLLECTION_NAME: &str = "employees";

/// Storage representation of an employee aggregate.
///
/// Value objects are embedded as subdocuments; the query paths below
/// (`personal_info.national_id`, `current_assignment.department`, `status`)
/// depend on that layout. Plain dates ride as ISO strings, timestamps as
/// BSON datetimes.
#[derive(Debug, Serialize, Deserialize)]
struct EmployeeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    personal_info: PersonalInfo,
    contact_info: ContactInfo,
    current_assignment: EmploymentInfo,
    assignment_history: Vec<EmploymentInfo>,
    status: EmployeeStatus,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl EmployeeDocument {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee
                .id()
                .and_then(|id| ObjectId::parse_str(id.as_str()).ok()),
            personal_info: employee.personal_info().clone(),
            contact_info: employee.contact_info().clone(),
            current_assignment: employee.current_assignment().clone(),
            assignment_history: employee.assignment_history().to_vec(),
            status: employee.status(),
            created_at: employee.created_at(),
            updated_at: employee.updated_at(),
        }
    }

    fn into_employee(self) -> Result<Employee, RepositoryError> {
        let id = self
            .id
            .ok_or_else(|| RepositoryError::Backend("document missing _id".to_string()))?;

        Ok(Employee::restore(
            EmployeeId::new(id.to_hex()),
            self.personal_info,
            self.contact_info,
            self.current_assignment,
            self.assignment_history,
            self.status,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// MongoDB-backed employee repository.
///
/// National-ID uniqueness is guarded by the application service's
/// check-then-act lookup only; a unique index on `personal_info.national_id`
/// would be the storage-level hardening for concurrent creates, and is not
/// created here.
#[derive(Clone)]
pub struct MongoEmployeeRepository {
    collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeRepository {
    /// Creates a repository over the given database handle.
    pub fn new(database: Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    /// Connects to MongoDB and returns a repository over the named database.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, RepositoryError> {
        let client = Client::with_uri_str(uri).await.map_err(backend)?;
        tracing::info!(database, "connected to MongoDB");
        Ok(Self::new(client.database(database)))
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<Employee>, RepositoryError> {
        let cursor = self.collection.find(filter).await.map_err(backend)?;
        let documents: Vec<EmployeeDocument> = cursor.try_collect().await.map_err(backend)?;
        documents
            .into_iter()
            .map(EmployeeDocument::into_employee)
            .collect()
    }
}

fn backend(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Backend(err.to_string())
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let mut document = EmployeeDocument::from_employee(&employee);
        document.id = None;

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(backend)?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::Backend("insert did not return an ObjectId".to_string())
        })?;

        document.id = Some(id);
        document.into_employee()
    }

    async fn update(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let id = employee.id().ok_or(RepositoryError::MissingId)?;
        let oid = ObjectId::parse_str(id.as_str()).map_err(backend)?;

        let document = EmployeeDocument::from_employee(&employee);
        self.collection
            .replace_one(doc! { "_id": oid }, &document)
            .await
            .map_err(backend)?;
        Ok(employee)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        // A malformed identifier cannot match anything; absence is not an error.
        let Ok(oid) = ObjectId::parse_str(id.as_str()) else {
            return Ok(None);
        };

        match self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(backend)?
        {
            Some(document) => Ok(Some(document.into_employee()?)),
            None => Ok(None),
        }
    }

    async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<Employee>, RepositoryError> {
        match self
            .collection
            .find_one(doc! { "personal_info.national_id": national_id })
            .await
            .map_err(backend)?
        {
            Some(document) => Ok(Some(document.into_employee()?)),
            None => Ok(None),
        }
    }

    async fn find_by_status(
        &self,
        status: EmployeeStatus,
    ) -> Result<Vec<Employee>, RepositoryError> {
        self.find_many(doc! { "status": status.as_str() }).await
    }

    async fn find_by_department(
        &self,
        department: &str,
    ) -> Result<Vec<Employee>, RepositoryError> {
        self.find_many(doc! { "current_assignment.department": department })
            .await
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        self.find_many(doc! {}).await
    }

    async fn delete_by_id(&self, id: &EmployeeId) -> Result<bool, RepositoryError> {
        let Ok(oid) = ObjectId::parse_str(id.as_str()) else {
            return Ok(false);
        };

        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(backend)?;
        Ok(result.deleted_count > 0)
    }

    async fn exists_by_national_id(&self, national_id: &str) -> Result<bool, RepositoryError> {
        let count = self
            .collection
            .count_documents(doc! { "personal_info.national_id": national_id })
            .await
            .map_err(backend)?;
        Ok(count > 0)
    }
}
