//! Integration tests for the employee application service over the
//! in-memory repository adapter.

use chrono::NaiveDate;
use common::EmployeeId;
use domain::{
    ContactInfo, DomainError, EmployeeService, EmployeeStatus, EmploymentInfo, Money, PersonalInfo,
};
use persistence::InMemoryEmployeeRepository;

fn create_service() -> EmployeeService<InMemoryEmployeeRepository> {
    EmployeeService::new(InMemoryEmployeeRepository::new())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn personal(national_id: &str) -> PersonalInfo {
    PersonalInfo::new("Maria", "Gomez", national_id, None, None).unwrap()
}

fn contact() -> ContactInfo {
    ContactInfo::new("maria.gomez@example.com", Some("555-0100".into()), None).unwrap()
}

fn job(title: &str, department: &str, cents: i64, start: NaiveDate) -> EmploymentInfo {
    EmploymentInfo::new(title, department, Money::from_cents(cents), start, None).unwrap()
}

mod creation {
    use super::*;

    #[tokio::test]
    async fn created_employee_is_retrievable_by_id_and_national_id() {
        let service = create_service();

        let stored = service
            .create_employee(
                personal("12345678"),
                contact(),
                job("Senior Developer", "Technology", 500000, date(2020, 1, 15)),
            )
            .await
            .unwrap();

        let id = stored.id().unwrap().clone();
        assert_eq!(stored.status(), EmployeeStatus::Active);
        assert!(stored.assignment_history().is_empty());

        let by_id = service.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(by_id.personal_info().national_id(), "12345678");

        let by_national = service
            .find_by_national_id("12345678")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_national.id(), Some(&id));
    }

    #[tokio::test]
    async fn duplicate_national_id_is_rejected() {
        let service = create_service();

        service
            .create_employee(
                personal("12345678"),
                contact(),
                job("Senior Developer", "Technology", 500000, date(2020, 1, 15)),
            )
            .await
            .unwrap();

        let result = service
            .create_employee(
                personal("12345678"),
                ContactInfo::new("other@example.com", None, None).unwrap(),
                job("Accountant", "Finance", 400000, date(2021, 6, 1)),
            )
            .await;

        assert!(matches!(
            result,
            Err(DomainError::DuplicateNationalId { national_id }) if national_id == "12345678"
        ));

        // The first record is untouched.
        let all = service.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].current_assignment().title(), "Senior Developer");
    }
}

mod job_changes {
    use super::*;

    #[tokio::test]
    async fn change_job_closes_previous_assignment_into_history() {
        let service = create_service();

        let stored = service
            .create_employee(
                personal("12345678"),
                contact(),
                job("Senior Developer", "Technology", 500000, date(2020, 1, 15)),
            )
            .await
            .unwrap();
        let id = stored.id().unwrap().clone();

        let updated = service
            .change_job(&id, job("Tech Lead", "Technology", 650000, date(2023, 3, 1)))
            .await
            .unwrap();

        assert_eq!(updated.current_assignment().title(), "Tech Lead");
        assert_eq!(updated.current_assignment().start_date(), date(2023, 3, 1));
        assert!(updated.current_assignment().is_current());

        assert_eq!(updated.assignment_history().len(), 1);
        let previous = &updated.assignment_history()[0];
        assert_eq!(previous.title(), "Senior Developer");
        assert_eq!(previous.end_date(), Some(date(2023, 2, 28)));

        // The change is persisted, not just returned.
        let reloaded = service.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(reloaded.assignment_history().len(), 1);
    }

    #[tokio::test]
    async fn change_job_for_unknown_id_fails_not_found() {
        let service = create_service();

        let result = service
            .change_job(
                &EmployeeId::new("missing"),
                job("Tech Lead", "Technology", 650000, date(2023, 3, 1)),
            )
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn invalid_job_change_leaves_the_record_unchanged() {
        let service = create_service();

        let stored = service
            .create_employee(
                personal("12345678"),
                contact(),
                job("Senior Developer", "Technology", 500000, date(2020, 1, 15)),
            )
            .await
            .unwrap();
        let id = stored.id().unwrap().clone();

        // New assignment starting before the current one: close-out underflows.
        let result = service
            .change_job(&id, job("Intern", "Technology", 100000, date(2019, 1, 1)))
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let reloaded = service.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(reloaded.current_assignment().title(), "Senior Developer");
        assert!(reloaded.assignment_history().is_empty());
    }
}

mod updates_and_status {
    use super::*;

    #[tokio::test]
    async fn personal_and_contact_updates_replace_wholesale() {
        let service = create_service();

        let stored = service
            .create_employee(
                personal("12345678"),
                contact(),
                job("Senior Developer", "Technology", 500000, date(2020, 1, 15)),
            )
            .await
            .unwrap();
        let id = stored.id().unwrap().clone();

        let updated = service
            .update_personal_info(
                &id,
                PersonalInfo::new("Maria", "Gomez de Lopez", "12345678", None, None).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(updated.personal_info().last_name(), "Gomez de Lopez");

        let updated = service
            .update_contact_info(
                &id,
                ContactInfo::new("new@example.com", None, Some("Av. 42".into())).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(updated.contact_info().email(), "new@example.com");
        assert_eq!(updated.contact_info().phone(), None);
    }

    #[tokio::test]
    async fn update_for_unknown_id_fails_not_found() {
        let service = create_service();

        let result = service
            .update_contact_info(
                &EmployeeId::new("missing"),
                ContactInfo::new("a@b.com", None, None).unwrap(),
            )
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn status_transitions_roundtrip_through_persistence() {
        let service = create_service();

        let stored = service
            .create_employee(
                personal("12345678"),
                contact(),
                job("Senior Developer", "Technology", 500000, date(2020, 1, 15)),
            )
            .await
            .unwrap();
        let id = stored.id().unwrap().clone();

        let on_leave = service.place_on_leave(&id).await.unwrap();
        assert_eq!(on_leave.status(), EmployeeStatus::OnLeave);

        let inactive = service.deactivate(&id).await.unwrap();
        assert_eq!(inactive.status(), EmployeeStatus::Inactive);

        let active = service.reactivate(&id).await.unwrap();
        assert_eq!(active.status(), EmployeeStatus::Active);
        assert!(active.is_active());

        let reloaded = service.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(reloaded.status(), EmployeeStatus::Active);
    }
}

mod listings {
    use super::*;

    #[tokio::test]
    async fn listings_filter_by_status_and_department() {
        let service = create_service();

        let a = service
            .create_employee(
                personal("111"),
                ContactInfo::new("a@example.com", None, None).unwrap(),
                job("Developer", "Technology", 500000, date(2020, 1, 15)),
            )
            .await
            .unwrap();
        service
            .create_employee(
                PersonalInfo::new("Ana", "Lopez", "222", None, None).unwrap(),
                ContactInfo::new("b@example.com", None, None).unwrap(),
                job("Accountant", "Finance", 400000, date(2021, 6, 1)),
            )
            .await
            .unwrap();

        service.place_on_leave(a.id().unwrap()).await.unwrap();

        assert_eq!(service.list_all().await.unwrap().len(), 2);

        let on_leave = service
            .list_by_status(EmployeeStatus::OnLeave)
            .await
            .unwrap();
        assert_eq!(on_leave.len(), 1);
        assert_eq!(on_leave[0].personal_info().national_id(), "111");

        let finance = service.list_by_department("Finance").await.unwrap();
        assert_eq!(finance.len(), 1);
        assert_eq!(finance[0].current_assignment().title(), "Accountant");

        assert!(service.list_by_department("Legal").await.unwrap().is_empty());
    }
}

mod deletion {
    use super::*;

    #[tokio::test]
    async fn delete_returns_whether_a_record_was_removed() {
        let service = create_service();

        // Deleting an unknown identifier is not an error.
        assert!(
            !service
                .delete_employee(&EmployeeId::new("missing"))
                .await
                .unwrap()
        );

        let stored = service
            .create_employee(
                personal("12345678"),
                contact(),
                job("Senior Developer", "Technology", 500000, date(2020, 1, 15)),
            )
            .await
            .unwrap();
        let id = stored.id().unwrap().clone();

        assert!(service.delete_employee(&id).await.unwrap());
        assert!(service.find_by_id(&id).await.unwrap().is_none());
        assert!(!service.delete_employee(&id).await.unwrap());
    }
}
