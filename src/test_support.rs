//! Shared test fixtures: a canned backend and request helpers.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use crate::backend::{BackendCode, BackendError, Galaxy};
use crate::handlers::AppState;
use crate::pb;
use crate::routes;

/// Recorded backend call, including the request the handler produced.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    Authorize(pb::AuthRequest),
    GetUserByUsername(pb::GetUserByUsernameRequest),
    CreateSession(pb::CreateSessionRequest),
    RenewAccessToken(pb::RenewAccessTokenRequest),
    GetUser(pb::GetUserRequest),
    CreateUser(pb::CreateUserRequest),
    UpdateUser(pb::UpdateUserRequest),
    CreateItem(pb::CreateItemRequest),
    GetItem(pb::GetItemRequest),
    ListItems(pb::ListItemsRequest),
    UpdateItem(pb::UpdateItemRequest),
    DeleteItem(pb::DeleteItemRequest),
    CreateEntry(pb::CreateEntryRequest),
    GetEntry(pb::GetEntryRequest),
    ListEntries(pb::ListEntriesRequest),
    ListEntriesByUser(pb::ListEntriesByUserRequest),
    ListEntriesByItem(pb::ListEntriesByItemRequest),
}

impl RecordedCall {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Authorize(_) => "authorize",
            Self::GetUserByUsername(_) => "get_user_by_username",
            Self::CreateSession(_) => "create_session",
            Self::RenewAccessToken(_) => "renew_access_token",
            Self::GetUser(_) => "get_user",
            Self::CreateUser(_) => "create_user",
            Self::UpdateUser(_) => "update_user",
            Self::CreateItem(_) => "create_item",
            Self::GetItem(_) => "get_item",
            Self::ListItems(_) => "list_items",
            Self::UpdateItem(_) => "update_item",
            Self::DeleteItem(_) => "delete_item",
            Self::CreateEntry(_) => "create_entry",
            Self::GetEntry(_) => "get_entry",
            Self::ListEntries(_) => "list_entries",
            Self::ListEntriesByUser(_) => "list_entries_by_user",
            Self::ListEntriesByItem(_) => "list_entries_by_item",
        }
    }
}

type Canned<T> = Mutex<Option<Result<T, BackendError>>>;

/// Backend double with one canned response per RPC. Unstubbed RPCs fail
/// loudly so a test cannot silently exercise an unexpected path.
#[derive(Default)]
pub struct MockGalaxy {
    pub calls: Mutex<Vec<RecordedCall>>,
    authorize: Canned<pb::AuthResponse>,
    get_user_by_username: Canned<pb::GetUserByUsernameResponse>,
    create_session: Canned<pb::CreateSessionResponse>,
    renew_access_token: Canned<pb::RenewAccessTokenResponse>,
    get_user: Canned<pb::UserResponse>,
    create_user: Canned<pb::UserResponse>,
    update_user: Canned<pb::UserResponse>,
    create_item: Canned<pb::ItemResponse>,
    get_item: Canned<pb::ItemResponse>,
    list_items: Canned<pb::ListItemsResponse>,
    update_item: Canned<pb::ItemResponse>,
    delete_item: Canned<pb::DeleteItemResponse>,
    create_entry: Canned<pb::EntryResponse>,
    get_entry: Canned<pb::EntryResponse>,
    list_entries: Canned<pb::ListEntriesResponse>,
    list_entries_by_user: Canned<pb::ListEntriesResponse>,
    list_entries_by_item: Canned<pb::ListEntriesResponse>,
}

fn unstubbed(rpc: &str) -> BackendError {
    BackendError {
        code: BackendCode::Internal,
        message: format!("no canned response for {rpc}"),
    }
}

macro_rules! stub_setter {
    ($setter:ident, $field:ident, $resp:ty) => {
        pub fn $setter(self, response: Result<$resp, BackendError>) -> Self {
            *self.$field.lock().unwrap() = Some(response);
            self
        }
    };
}

impl MockGalaxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub the authorize RPC with a session for `user_id`.
    pub fn with_session(self, user_id: i32) -> Self {
        self.with_authorize(Ok(pb::AuthResponse {
            id: format!("session-{user_id}"),
            user_id,
            created_at: None,
            expired_at: None,
        }))
    }

    stub_setter!(with_authorize, authorize, pb::AuthResponse);
    stub_setter!(
        with_get_user_by_username,
        get_user_by_username,
        pb::GetUserByUsernameResponse
    );
    stub_setter!(with_create_session, create_session, pb::CreateSessionResponse);
    stub_setter!(
        with_renew_access_token,
        renew_access_token,
        pb::RenewAccessTokenResponse
    );
    stub_setter!(with_get_user, get_user, pb::UserResponse);
    stub_setter!(with_create_user, create_user, pb::UserResponse);
    stub_setter!(with_update_user, update_user, pb::UserResponse);
    stub_setter!(with_create_item, create_item, pb::ItemResponse);
    stub_setter!(with_get_item, get_item, pb::ItemResponse);
    stub_setter!(with_list_items, list_items, pb::ListItemsResponse);
    stub_setter!(with_update_item, update_item, pb::ItemResponse);
    stub_setter!(with_delete_item, delete_item, pb::DeleteItemResponse);
    stub_setter!(with_create_entry, create_entry, pb::EntryResponse);
    stub_setter!(with_get_entry, get_entry, pb::EntryResponse);
    stub_setter!(with_list_entries, list_entries, pb::ListEntriesResponse);
    stub_setter!(
        with_list_entries_by_user,
        list_entries_by_user,
        pb::ListEntriesResponse
    );
    stub_setter!(
        with_list_entries_by_item,
        list_entries_by_item,
        pb::ListEntriesResponse
    );

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(RecordedCall::name).collect()
    }

    fn record<T: Clone>(
        &self,
        call: RecordedCall,
        canned: &Canned<T>,
    ) -> Result<T, BackendError> {
        let rpc = call.name();
        self.calls.lock().unwrap().push(call);
        canned
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(unstubbed(rpc)))
    }
}

#[async_trait]
impl Galaxy for MockGalaxy {
    async fn authorize(&self, request: pb::AuthRequest) -> Result<pb::AuthResponse, BackendError> {
        self.record(RecordedCall::Authorize(request), &self.authorize)
    }

    async fn get_user_by_username(
        &self,
        request: pb::GetUserByUsernameRequest,
    ) -> Result<pb::GetUserByUsernameResponse, BackendError> {
        self.record(
            RecordedCall::GetUserByUsername(request),
            &self.get_user_by_username,
        )
    }

    async fn create_session(
        &self,
        request: pb::CreateSessionRequest,
    ) -> Result<pb::CreateSessionResponse, BackendError> {
        self.record(RecordedCall::CreateSession(request), &self.create_session)
    }

    async fn renew_access_token(
        &self,
        request: pb::RenewAccessTokenRequest,
    ) -> Result<pb::RenewAccessTokenResponse, BackendError> {
        self.record(
            RecordedCall::RenewAccessToken(request),
            &self.renew_access_token,
        )
    }

    async fn get_user(
        &self,
        request: pb::GetUserRequest,
    ) -> Result<pb::UserResponse, BackendError> {
        self.record(RecordedCall::GetUser(request), &self.get_user)
    }

    async fn create_user(
        &self,
        request: pb::CreateUserRequest,
    ) -> Result<pb::UserResponse, BackendError> {
        self.record(RecordedCall::CreateUser(request), &self.create_user)
    }

    async fn update_user(
        &self,
        request: pb::UpdateUserRequest,
    ) -> Result<pb::UserResponse, BackendError> {
        self.record(RecordedCall::UpdateUser(request), &self.update_user)
    }

    async fn create_item(
        &self,
        request: pb::CreateItemRequest,
    ) -> Result<pb::ItemResponse, BackendError> {
        self.record(RecordedCall::CreateItem(request), &self.create_item)
    }

    async fn get_item(
        &self,
        request: pb::GetItemRequest,
    ) -> Result<pb::ItemResponse, BackendError> {
        self.record(RecordedCall::GetItem(request), &self.get_item)
    }

    async fn list_items(
        &self,
        request: pb::ListItemsRequest,
    ) -> Result<pb::ListItemsResponse, BackendError> {
        self.record(RecordedCall::ListItems(request), &self.list_items)
    }

    async fn update_item(
        &self,
        request: pb::UpdateItemRequest,
    ) -> Result<pb::ItemResponse, BackendError> {
        self.record(RecordedCall::UpdateItem(request), &self.update_item)
    }

    async fn delete_item(
        &self,
        request: pb::DeleteItemRequest,
    ) -> Result<pb::DeleteItemResponse, BackendError> {
        self.record(RecordedCall::DeleteItem(request), &self.delete_item)
    }

    async fn create_entry(
        &self,
        request: pb::CreateEntryRequest,
    ) -> Result<pb::EntryResponse, BackendError> {
        self.record(RecordedCall::CreateEntry(request), &self.create_entry)
    }

    async fn get_entry(
        &self,
        request: pb::GetEntryRequest,
    ) -> Result<pb::EntryResponse, BackendError> {
        self.record(RecordedCall::GetEntry(request), &self.get_entry)
    }

    async fn list_entries(
        &self,
        request: pb::ListEntriesRequest,
    ) -> Result<pb::ListEntriesResponse, BackendError> {
        self.record(RecordedCall::ListEntries(request), &self.list_entries)
    }

    async fn list_entries_by_user(
        &self,
        request: pb::ListEntriesByUserRequest,
    ) -> Result<pb::ListEntriesResponse, BackendError> {
        self.record(
            RecordedCall::ListEntriesByUser(request),
            &self.list_entries_by_user,
        )
    }

    async fn list_entries_by_item(
        &self,
        request: pb::ListEntriesByItemRequest,
    ) -> Result<pb::ListEntriesResponse, BackendError> {
        self.record(
            RecordedCall::ListEntriesByItem(request),
            &self.list_entries_by_item,
        )
    }
}

/// Build the full router around an immutable mock. The returned Arc lets
/// tests inspect the recorded calls after responses come back.
pub fn app_with(mock: MockGalaxy) -> (Router, Arc<MockGalaxy>) {
    let mock = Arc::new(mock);
    let state = AppState::new(mock.clone());
    let router = routes::app(state, None, std::time::Duration::from_secs(5), None);
    (router, mock)
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(path: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn with_bearer(mut req: Request<Body>, token: &str) -> Request<Body> {
    req.headers_mut().insert(
        http::header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );
    req
}

/// Drive one request through the router and decode the JSON body.
pub async fn send(router: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, body)
}

/// Same as [`send`] but returns the raw body for byte-level assertions.
pub async fn send_raw(router: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}
