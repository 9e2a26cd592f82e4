use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use smartlend::application::engine::LendingEngine;
use smartlend::domain::application::{ApplicationStatus, CreateApplication};
use smartlend::domain::bidding::{BidStatus, InterestType};
use smartlend::domain::schedule::RepaymentStatus;
use smartlend::infrastructure::context::FixedContext;
use smartlend::infrastructure::ids::SequentialIdGenerator;
use smartlend::infrastructure::in_memory::InMemoryApplicationStore;

fn engine() -> LendingEngine {
    LendingEngine::new(
        Box::new(InMemoryApplicationStore::new()),
        Box::new(SequentialIdGenerator::new(1)),
    )
}

fn reference_request() -> CreateApplication {
    CreateApplication {
        application_number: "APP-1".to_string(),
        make: "Tesla".to_string(),
        model: "Model 3".to_string(),
        loan_amount: dec!(60000),
        ssn: "1234567".to_string(),
        age: 35,
        monthly_income: dec!(2500),
        credit_score: 650,
        tenure: 5,
    }
}

#[tokio::test]
async fn test_full_lifecycle() {
    let engine = engine();
    let ctx = FixedContext::new("tx-e2e");

    // Create: credit 650 (+0.25), age 35 (+0.25), income 2500 (+0.50).
    let app = engine
        .create_application(reference_request(), &ctx)
        .await
        .unwrap();
    assert_eq!(app.status, ApplicationStatus::QuotationsReceived);
    assert_eq!(app.quotations.len(), 4);
    for quote in &app.quotations {
        assert_eq!(quote.accept_status, BidStatus::Accepted);
        assert_eq!(quote.interest_rate, dec!(6.00));
    }
    assert_eq!(app.quotations[0].interest_type, Some(InterestType::Simple));
    assert_eq!(app.quotations[1].interest_type, Some(InterestType::Floating));

    // Confirm: exactly one winner, account assigned, 60 installments.
    let bidding_number = app.quotations[2].bidding_number;
    let app = engine
        .confirm_bid(
            "APP-1",
            bidding_number,
            ApplicationStatus::BidAccepted,
            &ctx,
        )
        .await
        .unwrap();
    assert_eq!(app.status, ApplicationStatus::BidAccepted);
    assert!(app.account_number.is_some());
    assert_eq!(app.repayment_schedule.len(), 60);
    assert_eq!(
        app.quotations.iter().filter(|q| q.is_winning_bid).count(),
        1
    );

    let principal_total: Decimal = app
        .repayment_schedule
        .iter()
        .map(|p| p.principal_amount)
        .sum();
    assert!((principal_total - dec!(60000)).abs() < dec!(0.0001));

    // Miss three installments: the third flips the classification.
    let app = engine
        .change_payment_status("APP-1", 5, RepaymentStatus::Missed, &ctx)
        .await
        .unwrap();
    assert_eq!(app.status, ApplicationStatus::Performing);
    let app = engine
        .change_payment_status("APP-1", 17, RepaymentStatus::Missed, &ctx)
        .await
        .unwrap();
    assert_eq!(app.status, ApplicationStatus::Performing);
    let app = engine
        .change_payment_status("APP-1", 42, RepaymentStatus::Missed, &ctx)
        .await
        .unwrap();
    assert_eq!(app.status, ApplicationStatus::NonPerforming);

    // The stored record matches the returned one.
    let stored = engine.get_application("APP-1").await.unwrap();
    assert_eq!(stored, app);

    // Audit trail: 2 writes for create, 1 per mutation since.
    assert_eq!(stored.transactions.len(), 6);
}

#[tokio::test]
async fn test_failed_payment_update_only_reclassifies() {
    let engine = engine();
    let ctx = FixedContext::new("tx-noop");

    let app = engine
        .create_application(reference_request(), &ctx)
        .await
        .unwrap();
    let bidding_number = app.quotations[0].bidding_number;
    let before = engine
        .confirm_bid(
            "APP-1",
            bidding_number,
            ApplicationStatus::BidAccepted,
            &ctx,
        )
        .await
        .unwrap();

    let after = engine
        .change_payment_status("APP-1", 9999, RepaymentStatus::Missed, &ctx)
        .await
        .unwrap();

    assert_eq!(after.repayment_schedule, before.repayment_schedule);
    assert_eq!(after.status, ApplicationStatus::Performing);
}

#[tokio::test]
async fn test_boundary_applicant_gets_base_rate() {
    let engine = engine();
    let ctx = FixedContext::new("tx-boundary");

    // Every attribute sits exactly on a band edge.
    let mut request = reference_request();
    request.credit_score = 700;
    request.age = 30;
    request.monthly_income = dec!(3000);

    let app = engine.create_application(request, &ctx).await.unwrap();
    for quote in &app.quotations {
        assert_eq!(quote.accept_status, BidStatus::Accepted);
        assert_eq!(quote.interest_rate, dec!(5.00));
    }
}
