use chrono::NaiveDate;
use collegeprep_core::{BaseReminderInput, BaseReminderService, ReminderService};
use collegeprep_domain::{Category, NewReminder, School, Timeframe, TimeframeType};
use collegeprep_infra::{ICategoryRepo, ISchoolRepo, ITimeframeRepo, Repos};

fn due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 2, 1).unwrap()
}

/// Seeds the kind of fixture the application boots with: two schools,
/// three base reminder templates across two categories, and six
/// reminder instances for user 1 (three per school).
async fn seed(repos: &Repos) {
    for category in &[
        Category {
            id: 1,
            name: "Essays".into(),
        },
        Category {
            id: 2,
            name: "Recommendations".into(),
        },
    ] {
        repos.category_repo.insert(category).await.unwrap();
    }

    for timeframe in &[
        Timeframe {
            id: 1,
            name: "Today".into(),
            timeframe_type: TimeframeType::Now,
            formula: None,
        },
        Timeframe {
            id: 2,
            name: "In 30 Days".into(),
            timeframe_type: TimeframeType::Relative,
            formula: Some("30".into()),
        },
        Timeframe {
            id: 3,
            name: "January 1".into(),
            timeframe_type: TimeframeType::Absolute,
            formula: Some("2017-01-01".into()),
        },
    ] {
        repos.timeframe_repo.insert(timeframe).await.unwrap();
    }

    for school in &[
        School {
            id: 1,
            name: "Temple".into(),
            due_date: due_date(),
        },
        School {
            id: 2,
            name: "Drexel".into(),
            due_date: due_date(),
        },
    ] {
        repos.school_repo.insert(school).await.unwrap();
    }

    let base_reminder_service = BaseReminderService::new(repos.base_reminder_repo.clone());
    let templates = vec![
        BaseReminderInput {
            name: "Write Essay".into(),
            message: "Better get writing!".into(),
            detail: "Some help for writing your essay".into(),
            late_message: "Too late".into(),
            late_detail: "Should have started sooner".into(),
            category_id: 1,
            timeframe_ids: Some(vec![1, 2]),
        },
        BaseReminderInput {
            name: "Get Recommendations".into(),
            message: "Ask your counselor".into(),
            detail: "Tips for asking your counselor".into(),
            late_message: "Too late".into(),
            late_detail: "".into(),
            category_id: 2,
            timeframe_ids: Some(vec![3]),
        },
        BaseReminderInput {
            name: "Submit Application".into(),
            message: "Click send".into(),
            detail: "Double check everything first".into(),
            late_message: "Too late".into(),
            late_detail: "".into(),
            category_id: 1,
            timeframe_ids: Some(vec![1]),
        },
    ];
    for template in templates {
        base_reminder_service.create(template).await.unwrap();
    }

    let reminder_service = ReminderService::new(repos.reminder_repo.clone());
    let mut reminders = Vec::new();
    let mut id = 1;
    for school_id in 1..=2 {
        for base_reminder_id in 1..=3 {
            reminders.push(NewReminder {
                id: Some(id),
                user_id: 1,
                school_id,
                base_reminder_id,
                due_date: due_date(),
                timeframe: "One week before".into(),
            });
            id += 1;
        }
    }
    let count = reminder_service.bulk_create(&reminders).await.unwrap();
    assert_eq!(count, 6);
}

#[tokio::test]
async fn gets_all_reminders_for_a_user_with_joined_data() {
    let repos = Repos::create_inmemory();
    seed(&repos).await;
    let reminder_service = ReminderService::new(repos.reminder_repo.clone());

    let reminders = reminder_service
        .find_by_user_with_base_reminders(1)
        .await
        .unwrap();
    assert_eq!(reminders.len(), 6);
    assert_eq!(reminders[0].name, "Write Essay");
    assert_eq!(reminders[0].category, "Essays");
    assert_eq!(reminders[0].school_name, "Temple");
}

#[tokio::test]
async fn gets_one_reminder_by_id() {
    let repos = Repos::create_inmemory();
    seed(&repos).await;
    let reminder_service = ReminderService::new(repos.reminder_repo.clone());

    let reminders = reminder_service
        .find_by_id_for_user_with_base_reminders(1, 1)
        .await
        .unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].id, 1);
}

#[tokio::test]
async fn gets_all_reminders_for_one_school_for_a_user() {
    let repos = Repos::create_inmemory();
    seed(&repos).await;
    let reminder_service = ReminderService::new(repos.reminder_repo.clone());

    let reminders = reminder_service
        .find_by_user_for_school_with_base_reminders(1, 1)
        .await
        .unwrap();
    assert_eq!(reminders.len(), 3);
    assert!(reminders.iter().all(|r| r.school_id == 1));
}

#[tokio::test]
async fn template_writes_are_visible_to_instance_reads() {
    let repos = Repos::create_inmemory();
    seed(&repos).await;
    let base_reminder_service = BaseReminderService::new(repos.base_reminder_repo.clone());
    let reminder_service = ReminderService::new(repos.reminder_repo.clone());

    let input = BaseReminderInput {
        name: "Write Better Essay".into(),
        message: "Better get writing!".into(),
        detail: "Some help for writing your essay".into(),
        late_message: "Too late".into(),
        late_detail: "Should have started sooner".into(),
        category_id: 1,
        timeframe_ids: None,
    };
    let updated = base_reminder_service.update(1, input).await.unwrap();
    assert!(updated.is_some());

    let reminders = reminder_service
        .find_by_id_for_user_with_base_reminders(1, 1)
        .await
        .unwrap();
    assert_eq!(reminders[0].name, "Write Better Essay");
}
