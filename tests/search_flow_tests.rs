use vitrine::domain::Product;
use vitrine::services::catalog::mock::RecordingCatalog;
use vitrine::services::{Completion, SearchError, SearchSession};

#[tokio::test]
async fn test_phone_search_replaces_results_wholesale() {
    let catalog = RecordingCatalog::new()
        .with_response("old", vec![Product::new(1, "Old A", 1.0), Product::new(2, "Old B", 2.0)])
        .with_response("phone", vec![Product::new(9, "Phone X", 99.0)]);
    let mut session = SearchSession::new();

    let ticket = session.begin("old").unwrap();
    let outcome = ticket.run(&catalog).await;
    session.complete(ticket, outcome);
    assert_eq!(session.results().len(), 2);

    let ticket = session.begin("phone").unwrap();
    let outcome = ticket.run(&catalog).await;
    assert_eq!(session.complete(ticket, outcome), Completion::Applied);

    assert_eq!(catalog.calls(), vec!["old", "phone"]);
    let items: Vec<Product> = session.results().items().iter().map(|p| (**p).clone()).collect();
    assert_eq!(items, vec![Product::new(9, "Phone X", 99.0)]);
    assert_eq!(session.results().total_price(), 99.0);
}

#[tokio::test]
async fn test_slow_stale_response_is_discarded() {
    let slow = RecordingCatalog::new()
        .with_response("phone", vec![Product::new(1, "Phone", 100.0)])
        .with_delay_ms(50);
    let fast = RecordingCatalog::new().with_response("tablet", vec![Product::new(2, "Tablet", 300.0)]);
    let mut session = SearchSession::new();

    let first = session.begin("phone").unwrap();
    let second = session.begin("tablet").unwrap();

    let (first_outcome, second_outcome) = futures::join!(first.run(&slow), second.run(&fast));

    // Fast response lands first, the slow one afterwards
    assert_eq!(session.complete(second, second_outcome), Completion::Applied);
    assert_eq!(session.complete(first, first_outcome), Completion::Stale);

    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results().get(0).unwrap().title, "Tablet");
}

#[tokio::test]
async fn test_endpoint_failure_is_reported_not_raised() {
    let catalog = RecordingCatalog::new().failing_with_status(500);
    let mut session = SearchSession::new();

    let ticket = session.begin("phone").unwrap();
    let outcome = ticket.run(&catalog).await;
    assert!(matches!(outcome, Err(SearchError::Status(500))));

    assert_eq!(session.complete(ticket, outcome), Completion::Failed);
    assert!(session.results().is_empty());
    assert!(!session.is_searching());
    assert!(session.last_error().is_some());
}
