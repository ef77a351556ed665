use resource_server::clients::{InventoryClient, UserClient};
use resource_server::framework::mock::{
    create_mock_client, expect_create, expect_list, expect_update, MockClient,
};
use resource_server::framework::{FrameworkError, Tally};
use resource_server::inventory_actor::InventoryError;
use resource_server::model::{
    InventoryItem, InventoryItemCreate, Manufacturer, User, UserCreate, UserUpdate,
};
use resource_server::user_actor::UserError;
use chrono::Utc;

fn alice(id: u64) -> User {
    User {
        id,
        name: "Alice".into(),
        email: "alice@example.com".into(),
        age: None,
        is_active: true,
        created_at: Utc::now(),
    }
}

/// Client tests against a mocked actor: no real store, just the error
/// mapping and request shaping of the typed clients.
#[tokio::test]
async fn test_user_client_maps_framework_errors() {
    let mut mock = MockClient::<User>::new();
    mock.expect_get().return_ok(None);
    mock.expect_create()
        .return_err(FrameworkError::EntityError(Box::new(UserError::AlreadyExists(
            "alice@example.com".into(),
        ))));
    mock.expect_delete()
        .return_err(FrameworkError::NotFound("7".into()));
    mock.expect_list().return_err(FrameworkError::ActorClosed);

    let client = UserClient::new(mock.client());

    assert_eq!(
        client.get_user(1).await,
        Err(UserError::NotFound("1".into()))
    );
    assert_eq!(
        client.create_user(UserCreate::new("Alice", "alice@example.com")).await,
        Err(UserError::AlreadyExists("alice@example.com".into()))
    );
    assert_eq!(
        client.delete_user(7).await,
        Err(UserError::NotFound("7".into()))
    );
    assert!(matches!(
        client.list_users(0, 10).await,
        Err(UserError::ActorCommunicationError(_))
    ));

    mock.verify();
}

#[tokio::test]
async fn test_user_client_passes_results_through() {
    let mut mock = MockClient::<User>::new();
    mock.expect_create().return_ok(alice(1));
    mock.expect_get().return_ok(Some(alice(1)));
    mock.expect_count().return_ok(Tally { total: 5, matching: 3 });
    mock.expect_count().return_ok(Tally { total: 5, matching: 3 });

    let client = UserClient::new(mock.client());

    let created = client
        .create_user(UserCreate::new("Alice", "alice@example.com"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(client.get_user(1).await.unwrap().email, "alice@example.com");
    assert_eq!(client.count_users(Some(true)).await.unwrap(), 3);
    assert_eq!(client.activity_counts().await.unwrap(), (5, 3));

    mock.verify();
}

#[tokio::test]
async fn test_user_client_request_shape() {
    let (generic, mut receiver) = create_mock_client::<User>(4);
    let client = UserClient::new(generic);

    let call = tokio::spawn(async move { client.list_users(20, 10).await });

    let (skip, limit, filter, respond_to) = expect_list(&mut receiver)
        .await
        .expect("Expected a List request");
    assert_eq!((skip, limit), (20, 10));
    assert!(filter.is_none());
    respond_to.send(Ok(vec![alice(21)])).unwrap();

    let page = call.await.unwrap().unwrap();
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_update_validation_error_reaches_caller() {
    let (generic, mut receiver) = create_mock_client::<User>(4);
    let client = UserClient::new(generic);

    let call = tokio::spawn(async move {
        let update = UserUpdate {
            age: Some(Some(200)),
            ..Default::default()
        };
        client.update_user(3, update).await
    });

    let (id, update, respond_to) = expect_update(&mut receiver).await.unwrap();
    assert_eq!(id, 3);
    assert_eq!(update.age, Some(Some(200)));
    let rejected = UserError::ValidationError("age must be between 0 and 150".into());
    respond_to
        .send(Err(FrameworkError::EntityError(Box::new(rejected.clone()))))
        .unwrap();

    assert_eq!(call.await.unwrap(), Err(rejected));
}

#[tokio::test]
async fn test_inventory_client_conflict_and_search_filter() {
    let (generic, mut receiver) = create_mock_client::<InventoryItem>(4);
    let client = InventoryClient::new(generic);

    let searcher = client.clone();
    let search = tokio::spawn(async move { searcher.search_items(Some("Widget"), 0, 50).await });
    let (_, _, filter, respond_to) = expect_list(&mut receiver).await.unwrap();
    assert_eq!(filter.expect("search filter").term(), "widget");
    respond_to.send(Ok(Vec::new())).unwrap();
    assert!(search.await.unwrap().unwrap().is_empty());

    let add = tokio::spawn(async move {
        client
            .add_item(InventoryItemCreate {
                id: None,
                name: "Widget".into(),
                release_date: Utc::now(),
                manufacturer: Manufacturer::new("ACME"),
            })
            .await
    });
    let (params, respond_to) = expect_create(&mut receiver).await.unwrap();
    assert_eq!(params.name, "Widget");
    respond_to
        .send(Err(FrameworkError::Conflict("d290f1ee".into())))
        .unwrap();
    assert_eq!(
        add.await.unwrap(),
        Err(InventoryError::AlreadyExists("d290f1ee".into()))
    );
}
