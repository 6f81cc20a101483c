//! Value objects for the employee domain.
//!
//! Construction is the only way to obtain an instance; every field is
//! validated at construction time and instances are never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EmployeeError;

/// Money amount represented in cents to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 500000 = $5000.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a whole-dollar value.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

/// Basic identification data for an employee.
///
/// Equality is by national ID only; it acts as the identity proxy for the
/// person the record describes.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    first_name: String,
    last_name: String,
    national_id: String,
    gender: Option<String>,
    birth_date: Option<NaiveDate>,
}

impl PersonalInfo {
    /// Creates personal info, trimming and validating the required fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        national_id: impl Into<String>,
        gender: Option<String>,
        birth_date: Option<NaiveDate>,
    ) -> Result<Self, EmployeeError> {
        Ok(Self {
            first_name: required(first_name.into(), "first name")?,
            last_name: required(last_name.into(), "last name")?,
            national_id: required(national_id.into(), "national id")?,
            gender,
            birth_date,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Returns first and last name joined with a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl PartialEq for PersonalInfo {
    fn eq(&self, other: &Self) -> bool {
        self.national_id == other.national_id
    }
}

/// Communication details for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    email: String,
    phone: Option<String>,
    address: Option<String>,
}

impl ContactInfo {
    /// Creates contact info. The email is trimmed, validated against a simple
    /// `local-part@domain` shape, and stored lower-cased.
    pub fn new(
        email: impl Into<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<Self, EmployeeError> {
        Ok(Self {
            email: validate_email(email.into())?,
            phone,
            address,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// A job assignment: title, department, salary, and validity dates.
///
/// An absent end date means the assignment is currently active. Closed-out
/// assignments live in the employee's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentInfo {
    title: String,
    department: String,
    salary: Money,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

impl EmploymentInfo {
    /// Creates a job assignment, validating all fields.
    pub fn new(
        title: impl Into<String>,
        department: impl Into<String>,
        salary: Money,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, EmployeeError> {
        if !salary.is_positive() {
            return Err(EmployeeError::InvalidSalary {
                cents: salary.cents(),
            });
        }
        if let Some(end) = end_date
            && end < start_date
        {
            return Err(EmployeeError::EndDateBeforeStart {
                start: start_date,
                end,
            });
        }

        Ok(Self {
            title: required(title.into(), "job title")?,
            department: required(department.into(), "department")?,
            salary,
            start_date,
            end_date,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn salary(&self) -> Money {
        self.salary
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns true iff the assignment has no end date.
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    /// Returns a copy of this assignment closed out at the given end date.
    ///
    /// The original is untouched; value objects are immutable.
    pub fn close_out(&self, end_date: NaiveDate) -> Result<Self, EmployeeError> {
        if end_date < self.start_date {
            return Err(EmployeeError::EndDateBeforeStart {
                start: self.start_date,
                end: end_date,
            });
        }

        Ok(Self {
            end_date: Some(end_date),
            ..self.clone()
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, EmployeeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EmployeeError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

fn validate_email(email: String) -> Result<String, EmployeeError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(EmployeeError::MissingField { field: "email" });
    }

    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && local
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'))
        }
        None => false,
    };

    if !valid {
        return Err(EmployeeError::InvalidEmail {
            email: trimmed.to_string(),
        });
    }

    Ok(trimmed.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_money_from_cents() {
        let money = Money::from_cents(500000);
        assert_eq!(money.cents(), 500000);
        assert_eq!(money.dollars(), 5000);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(650000).to_string(), "$6500.00");
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
    }

    #[test]
    fn test_money_positivity() {
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::from_cents(0).is_positive());
        assert!(!Money::from_cents(-100).is_positive());
    }

    #[test]
    fn test_personal_info_trims_required_fields() {
        let info = PersonalInfo::new("  Maria ", " Gomez ", " 12345678 ", None, None).unwrap();
        assert_eq!(info.first_name(), "Maria");
        assert_eq!(info.last_name(), "Gomez");
        assert_eq!(info.national_id(), "12345678");
        assert_eq!(info.full_name(), "Maria Gomez");
        assert!(info.gender().is_none());
        assert!(info.birth_date().is_none());
    }

    #[test]
    fn test_personal_info_blank_fields_fail() {
        let result = PersonalInfo::new("   ", "Gomez", "12345678", None, None);
        assert!(matches!(
            result,
            Err(EmployeeError::MissingField {
                field: "first name"
            })
        ));

        let result = PersonalInfo::new("Maria", "", "12345678", None, None);
        assert!(matches!(
            result,
            Err(EmployeeError::MissingField { field: "last name" })
        ));

        let result = PersonalInfo::new("Maria", "Gomez", " ", None, None);
        assert!(matches!(
            result,
            Err(EmployeeError::MissingField {
                field: "national id"
            })
        ));
    }

    #[test]
    fn test_personal_info_equality_by_national_id() {
        let a = PersonalInfo::new("Maria", "Gomez", "12345678", None, None).unwrap();
        let b = PersonalInfo::new("Ana", "Lopez", "12345678", None, Some(date(1990, 5, 1))).unwrap();
        let c = PersonalInfo::new("Maria", "Gomez", "87654321", None, None).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_contact_info_normalizes_email() {
        let info = ContactInfo::new("  Maria.Gomez@Example.COM ", None, None).unwrap();
        assert_eq!(info.email(), "maria.gomez@example.com");
    }

    #[test]
    fn test_contact_info_optional_fields_roundtrip() {
        let info = ContactInfo::new(
            "a@b.com",
            Some("+58 412 5550123".to_string()),
            Some("Av. Principal 42".to_string()),
        )
        .unwrap();
        assert_eq!(info.phone(), Some("+58 412 5550123"));
        assert_eq!(info.address(), Some("Av. Principal 42"));
    }

    #[test]
    fn test_contact_info_blank_email_fails() {
        let result = ContactInfo::new("   ", None, None);
        assert!(matches!(
            result,
            Err(EmployeeError::MissingField { field: "email" })
        ));
    }

    #[test]
    fn test_contact_info_invalid_email_fails() {
        for bad in ["no-at-sign", "@domain", "local@", "spa ce@domain"] {
            let result = ContactInfo::new(bad, None, None);
            assert!(
                matches!(result, Err(EmployeeError::InvalidEmail { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_employment_info_valid_construction() {
        let job = EmploymentInfo::new(
            " Senior Developer ",
            " Technology ",
            Money::from_cents(500000),
            date(2020, 1, 15),
            None,
        )
        .unwrap();
        assert_eq!(job.title(), "Senior Developer");
        assert_eq!(job.department(), "Technology");
        assert_eq!(job.salary().cents(), 500000);
        assert!(job.is_current());
    }

    #[test]
    fn test_employment_info_non_positive_salary_fails() {
        for cents in [0, -1] {
            let result = EmploymentInfo::new(
                "Developer",
                "Technology",
                Money::from_cents(cents),
                date(2020, 1, 15),
                None,
            );
            assert!(matches!(result, Err(EmployeeError::InvalidSalary { .. })));
        }
    }

    #[test]
    fn test_employment_info_end_before_start_fails() {
        let result = EmploymentInfo::new(
            "Developer",
            "Technology",
            Money::from_cents(500000),
            date(2020, 1, 15),
            Some(date(2020, 1, 14)),
        );
        assert!(matches!(
            result,
            Err(EmployeeError::EndDateBeforeStart { .. })
        ));
    }

    #[test]
    fn test_employment_info_end_equal_to_start_is_allowed() {
        let job = EmploymentInfo::new(
            "Developer",
            "Technology",
            Money::from_cents(500000),
            date(2020, 1, 15),
            Some(date(2020, 1, 15)),
        )
        .unwrap();
        assert!(!job.is_current());
    }

    #[test]
    fn test_close_out_returns_new_value() {
        let job = EmploymentInfo::new(
            "Developer",
            "Technology",
            Money::from_cents(500000),
            date(2020, 1, 15),
            None,
        )
        .unwrap();

        let closed = job.close_out(date(2023, 2, 28)).unwrap();
        assert_eq!(closed.end_date(), Some(date(2023, 2, 28)));
        assert!(!closed.is_current());

        // The original is untouched.
        assert!(job.is_current());
        assert_eq!(job.end_date(), None);
    }

    #[test]
    fn test_close_out_before_start_fails() {
        let job = EmploymentInfo::new(
            "Developer",
            "Technology",
            Money::from_cents(500000),
            date(2020, 1, 15),
            None,
        )
        .unwrap();

        let result = job.close_out(date(2019, 12, 31));
        assert!(matches!(
            result,
            Err(EmployeeError::EndDateBeforeStart { .. })
        ));
    }

    #[test]
    fn test_employment_info_serialization_roundtrip() {
        let job = EmploymentInfo::new(
            "Developer",
            "Technology",
            Money::from_cents(500000),
            date(2020, 1, 15),
            Some(date(2023, 2, 28)),
        )
        .unwrap();

        let json = serde_json::to_string(&job).unwrap();
        let deserialized: EmploymentInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(job, deserialized);
    }
}
