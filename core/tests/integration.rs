//! Selection-to-render flow against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `TodoListLoader`
//! through `UreqTransport` over real HTTP into a `MemoryView`.

use mock_server::Db;
use todo_loader::{
    ApiError, FetchOutcome, MemoryView, NewTodo, SelectOption, TodoClient, TodoListContent,
    TodoListLoader, Transport, UreqTransport,
};

async fn start_server(db: Db) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with_db(listener, db));
    format!("http://{addr}")
}

#[tokio::test(flavor = "multi_thread")]
async fn selection_renders_server_todos() {
    let db = Db::default();
    {
        let mut store = db.write().await;
        store.insert(1, 2, Some("Buy milk".to_string()), None);
        store.insert(1, 2, None, None);
    }
    let base_url = start_server(db).await;

    let loader = TodoListLoader::new(TodoClient::new(&base_url), MemoryView::new("1"));
    let transport = UreqTransport::new();

    let outcome = loader.on_todo_list_selected(&transport, "2").await;
    assert_eq!(outcome, Some(FetchOutcome::Rendered(2)));

    let view = loader.view();
    assert_eq!(
        view.todo_options,
        vec![
            SelectOption::placeholder(),
            SelectOption::new("1", "Buy milk"),
            SelectOption::new("2", "Unnamed todo"),
        ]
    );
    assert_eq!(view.todo_list.to_string(), "Buy milk\nUnnamed todo");
}

#[tokio::test(flavor = "multi_thread")]
async fn created_todo_shows_up_on_next_fetch() {
    let base_url = start_server(Db::default()).await;
    let client = TodoClient::new(&base_url);
    let transport = UreqTransport::new();

    let input = NewTodo {
        title: "Integration test".to_string(),
        notes: None,
    };
    let req = client.build_create_todo("3", "4", &input).unwrap();
    let created = client
        .parse_create_todo(transport.execute(req).await.unwrap())
        .unwrap();
    assert_eq!(created.label(), "Integration test");

    let empty = NewTodo {
        title: String::new(),
        notes: None,
    };
    let req = client.build_create_todo("3", "4", &empty).unwrap();
    let err = client
        .parse_create_todo(transport.execute(req).await.unwrap())
        .unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 400, .. }));

    let loader = TodoListLoader::new(client, MemoryView::new("3"));
    assert_eq!(loader.fetch_todos(&transport, "4").await, FetchOutcome::Rendered(1));
    assert_eq!(
        loader.view().todo_list,
        TodoListContent::Items(vec!["Integration test".to_string()])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_list_renders_no_todos_found() {
    let base_url = start_server(Db::default()).await;
    let loader = TodoListLoader::new(TodoClient::new(&base_url), MemoryView::new("8"));

    let outcome = loader.fetch_todos(&UreqTransport::new(), "9").await;
    assert_eq!(outcome, FetchOutcome::Rendered(0));
    assert_eq!(loader.view().todo_list.to_string(), "No todos found.");
}

#[tokio::test(flavor = "multi_thread")]
async fn not_found_json_body_renders_error() {
    let base_url = start_server(Db::default()).await;
    let loader = TodoListLoader::new(TodoClient::new(&base_url), MemoryView::new("abc"));

    let outcome = loader.fetch_todos(&UreqTransport::new(), "1").await;
    assert_eq!(outcome, FetchOutcome::Failed(ApiError::UnexpectedPayload("an object")));
    let view = loader.view();
    assert_eq!(view.option_labels(), vec!["Error loading todos"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server_renders_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let loader = TodoListLoader::new(TodoClient::new(&format!("http://{addr}")), MemoryView::new("1"));

    let outcome = loader.fetch_todos(&UreqTransport::new(), "2").await;
    assert!(matches!(outcome, FetchOutcome::Failed(ApiError::Transport(_))));
    assert!(loader
        .view()
        .todo_list
        .to_string()
        .starts_with("Error loading todos: "));
}
