//! Employee aggregate implementation.

use chrono::{DateTime, Utc};
use common::EmployeeId;

use super::{ContactInfo, EmployeeError, EmployeeStatus, EmploymentInfo, PersonalInfo};

/// Employee aggregate root.
///
/// Owns its value objects and the chronological history of past job
/// assignments. The aggregate is the unit of loading, mutation, and
/// persistence; every mutating operation stamps the last-update time.
#[derive(Debug, Clone)]
pub struct Employee {
    /// Assigned by the persistence layer on first save; never reassigned
    /// by domain logic.
    id: Option<EmployeeId>,
    personal_info: PersonalInfo,
    contact_info: ContactInfo,
    current_assignment: EmploymentInfo,
    /// Closed-out past assignments in insertion (chronological) order.
    /// Never contains the still-current assignment.
    assignment_history: Vec<EmploymentInfo>,
    status: EmployeeStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Employee {
    /// Creates a new, not-yet-persisted employee.
    ///
    /// Status defaults to [`EmployeeStatus::Active`] and both timestamps are
    /// set to now.
    pub fn new(
        personal_info: PersonalInfo,
        contact_info: ContactInfo,
        initial_assignment: EmploymentInfo,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            personal_info,
            contact_info,
            current_assignment: initial_assignment,
            assignment_history: Vec::new(),
            status: EmployeeStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs a stored employee. Used by persistence adapters only.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: EmployeeId,
        personal_info: PersonalInfo,
        contact_info: ContactInfo,
        current_assignment: EmploymentInfo,
        assignment_history: Vec<EmploymentInfo>,
        status: EmployeeStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            personal_info,
            contact_info,
            current_assignment,
            assignment_history,
            status,
            created_at,
            updated_at,
        }
    }
}

// Query methods
impl Employee {
    pub fn id(&self) -> Option<&EmployeeId> {
        self.id.as_ref()
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn contact_info(&self) -> &ContactInfo {
        &self.contact_info
    }

    pub fn current_assignment(&self) -> &EmploymentInfo {
        &self.current_assignment
    }

    pub fn assignment_history(&self) -> &[EmploymentInfo] {
        &self.assignment_history
    }

    pub fn status(&self) -> EmployeeStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true iff the status is [`EmployeeStatus::Active`].
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

// Command methods
impl Employee {
    /// Assigns a new job, closing out the current one.
    ///
    /// The current assignment is closed with end date = new start date − 1
    /// day and appended to history, so the aggregate never holds two
    /// open-ended assignments and the closed record cannot overlap the new
    /// one. Fails if that derived close date would precede the current
    /// assignment's start date.
    pub fn change_job(&mut self, new_assignment: EmploymentInfo) -> Result<(), EmployeeError> {
        let close_date = new_assignment
            .start_date()
            .pred_opt()
            .ok_or(EmployeeError::StartDateOutOfRange {
                start: new_assignment.start_date(),
            })?;

        let closed = self.current_assignment.close_out(close_date)?;
        self.assignment_history.push(closed);
        self.current_assignment = new_assignment;
        self.touch();
        Ok(())
    }

    /// Replaces the personal info wholesale.
    pub fn update_personal_info(&mut self, info: PersonalInfo) {
        self.personal_info = info;
        self.touch();
    }

    /// Replaces the contact info wholesale.
    pub fn update_contact_info(&mut self, info: ContactInfo) {
        self.contact_info = info;
        self.touch();
    }

    /// Replaces the status unconditionally. No transition table applies.
    pub fn change_status(&mut self, status: EmployeeStatus) {
        self.status = status;
        self.touch();
    }

    /// Moves the employee to [`EmployeeStatus::Inactive`].
    pub fn deactivate(&mut self) {
        self.change_status(EmployeeStatus::Inactive);
    }

    /// Moves the employee back to [`EmployeeStatus::Active`].
    pub fn reactivate(&mut self) {
        self.change_status(EmployeeStatus::Active);
    }

    /// Moves the employee to [`EmployeeStatus::OnLeave`].
    pub fn place_on_leave(&mut self) {
        self.change_status(EmployeeStatus::OnLeave);
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl PartialEq for Employee {
    /// Entity equality: two employees are the same iff they share an
    /// assigned identifier.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
