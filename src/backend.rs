//! Backend RPC client for the Galaxy service.
//!
//! Handlers depend on the [`Galaxy`] trait rather than a concrete client so
//! tests can substitute a canned backend. Every call returns a
//! [`BackendError`] carrying an explicit failure code; callers never inspect
//! transport types directly.

use async_trait::async_trait;
use http::uri::PathAndQuery;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::transport::Channel;
use tonic::{Code, Request, Status};

use crate::pb;

/// Classified backend failure code, reduced from the gRPC status space to
/// the codes the Galaxy contract actually emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendCode {
    NotFound,
    InvalidArgument,
    Unauthenticated,
    Internal,
    Unavailable,
    Unknown,
}

/// Tagged backend failure: code plus the backend's own message.
///
/// The message is safe for server-side logs; whether it reaches the client
/// is decided per endpoint by the error translation table.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    pub code: BackendCode,
    pub message: String,
}

impl BackendError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            code: BackendCode::Unavailable,
            message: message.into(),
        }
    }
}

impl From<Status> for BackendError {
    fn from(status: Status) -> Self {
        let code = match status.code() {
            Code::NotFound => BackendCode::NotFound,
            Code::InvalidArgument => BackendCode::InvalidArgument,
            Code::Unauthenticated => BackendCode::Unauthenticated,
            Code::Internal => BackendCode::Internal,
            Code::Unavailable => BackendCode::Unavailable,
            _ => BackendCode::Unknown,
        };
        Self {
            code,
            message: status.message().to_string(),
        }
    }
}

/// The Galaxy backend capability consumed by the gateway.
///
/// One method per unary RPC; request and response shapes are the prost
/// bindings in [`crate::pb`].
#[async_trait]
pub trait Galaxy: Send + Sync {
    async fn authorize(&self, request: pb::AuthRequest) -> Result<pb::AuthResponse, BackendError>;

    async fn get_user_by_username(
        &self,
        request: pb::GetUserByUsernameRequest,
    ) -> Result<pb::GetUserByUsernameResponse, BackendError>;

    async fn create_session(
        &self,
        request: pb::CreateSessionRequest,
    ) -> Result<pb::CreateSessionResponse, BackendError>;

    async fn renew_access_token(
        &self,
        request: pb::RenewAccessTokenRequest,
    ) -> Result<pb::RenewAccessTokenResponse, BackendError>;

    async fn get_user(&self, request: pb::GetUserRequest)
        -> Result<pb::UserResponse, BackendError>;

    async fn create_user(
        &self,
        request: pb::CreateUserRequest,
    ) -> Result<pb::UserResponse, BackendError>;

    async fn update_user(
        &self,
        request: pb::UpdateUserRequest,
    ) -> Result<pb::UserResponse, BackendError>;

    async fn create_item(
        &self,
        request: pb::CreateItemRequest,
    ) -> Result<pb::ItemResponse, BackendError>;

    async fn get_item(&self, request: pb::GetItemRequest)
        -> Result<pb::ItemResponse, BackendError>;

    async fn list_items(
        &self,
        request: pb::ListItemsRequest,
    ) -> Result<pb::ListItemsResponse, BackendError>;

    async fn update_item(
        &self,
        request: pb::UpdateItemRequest,
    ) -> Result<pb::ItemResponse, BackendError>;

    async fn delete_item(
        &self,
        request: pb::DeleteItemRequest,
    ) -> Result<pb::DeleteItemResponse, BackendError>;

    async fn create_entry(
        &self,
        request: pb::CreateEntryRequest,
    ) -> Result<pb::EntryResponse, BackendError>;

    async fn get_entry(
        &self,
        request: pb::GetEntryRequest,
    ) -> Result<pb::EntryResponse, BackendError>;

    async fn list_entries(
        &self,
        request: pb::ListEntriesRequest,
    ) -> Result<pb::ListEntriesResponse, BackendError>;

    async fn list_entries_by_user(
        &self,
        request: pb::ListEntriesByUserRequest,
    ) -> Result<pb::ListEntriesResponse, BackendError>;

    async fn list_entries_by_item(
        &self,
        request: pb::ListEntriesByItemRequest,
    ) -> Result<pb::ListEntriesResponse, BackendError>;
}

/// Tonic-backed implementation of [`Galaxy`] over a shared channel.
///
/// Channels are cheap to clone; each call builds a fresh `Grpc` wrapper so
/// concurrent requests never contend on client state. Calls are awaited
/// inline by the request task, so dropping the inbound connection drops the
/// in-flight RPC with it.
#[derive(Clone)]
pub struct GrpcGalaxy {
    channel: Channel,
}

impl GrpcGalaxy {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, BackendError>
    where
        Req: prost::Message + 'static,
        Resp: prost::Message + Default + 'static,
    {
        let mut grpc = Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| BackendError::unavailable(format!("backend not ready: {e}")))?;

        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = grpc
            .unary(
                Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await?;
        Ok(response.into_inner())
    }
}

#[async_trait]
impl Galaxy for GrpcGalaxy {
    async fn authorize(&self, request: pb::AuthRequest) -> Result<pb::AuthResponse, BackendError> {
        self.unary("/pb.Galaxy/Authorize", request).await
    }

    async fn get_user_by_username(
        &self,
        request: pb::GetUserByUsernameRequest,
    ) -> Result<pb::GetUserByUsernameResponse, BackendError> {
        self.unary("/pb.Galaxy/GetUserByUsername", request).await
    }

    async fn create_session(
        &self,
        request: pb::CreateSessionRequest,
    ) -> Result<pb::CreateSessionResponse, BackendError> {
        self.unary("/pb.Galaxy/CreateSession", request).await
    }

    async fn renew_access_token(
        &self,
        request: pb::RenewAccessTokenRequest,
    ) -> Result<pb::RenewAccessTokenResponse, BackendError> {
        self.unary("/pb.Galaxy/RenewAccessToken", request).await
    }

    async fn get_user(
        &self,
        request: pb::GetUserRequest,
    ) -> Result<pb::UserResponse, BackendError> {
        self.unary("/pb.Galaxy/GetUser", request).await
    }

    async fn create_user(
        &self,
        request: pb::CreateUserRequest,
    ) -> Result<pb::UserResponse, BackendError> {
        self.unary("/pb.Galaxy/CreateUser", request).await
    }

    async fn update_user(
        &self,
        request: pb::UpdateUserRequest,
    ) -> Result<pb::UserResponse, BackendError> {
        self.unary("/pb.Galaxy/UpdateUser", request).await
    }

    async fn create_item(
        &self,
        request: pb::CreateItemRequest,
    ) -> Result<pb::ItemResponse, BackendError> {
        self.unary("/pb.Galaxy/CreateItem", request).await
    }

    async fn get_item(
        &self,
        request: pb::GetItemRequest,
    ) -> Result<pb::ItemResponse, BackendError> {
        self.unary("/pb.Galaxy/GetItem", request).await
    }

    async fn list_items(
        &self,
        request: pb::ListItemsRequest,
    ) -> Result<pb::ListItemsResponse, BackendError> {
        self.unary("/pb.Galaxy/ListItems", request).await
    }

    async fn update_item(
        &self,
        request: pb::UpdateItemRequest,
    ) -> Result<pb::ItemResponse, BackendError> {
        self.unary("/pb.Galaxy/UpdateItem", request).await
    }

    async fn delete_item(
        &self,
        request: pb::DeleteItemRequest,
    ) -> Result<pb::DeleteItemResponse, BackendError> {
        self.unary("/pb.Galaxy/DeleteItem", request).await
    }

    async fn create_entry(
        &self,
        request: pb::CreateEntryRequest,
    ) -> Result<pb::EntryResponse, BackendError> {
        self.unary("/pb.Galaxy/CreateEntry", request).await
    }

    async fn get_entry(
        &self,
        request: pb::GetEntryRequest,
    ) -> Result<pb::EntryResponse, BackendError> {
        self.unary("/pb.Galaxy/GetEntry", request).await
    }

    async fn list_entries(
        &self,
        request: pb::ListEntriesRequest,
    ) -> Result<pb::ListEntriesResponse, BackendError> {
        self.unary("/pb.Galaxy/ListEntries", request).await
    }

    async fn list_entries_by_user(
        &self,
        request: pb::ListEntriesByUserRequest,
    ) -> Result<pb::ListEntriesResponse, BackendError> {
        self.unary("/pb.Galaxy/ListEntriesByUser", request).await
    }

    async fn list_entries_by_item(
        &self,
        request: pb::ListEntriesByItemRequest,
    ) -> Result<pb::ListEntriesResponse, BackendError> {
        self.unary("/pb.Galaxy/ListEntriesByItem", request).await
    }
}
