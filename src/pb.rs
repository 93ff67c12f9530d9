//! Prost bindings for the Galaxy RPC contract.
//!
//! Hand-maintained against `proto/galaxy.proto` (package `pb`) so the build
//! does not depend on protoc. Field numbers must stay in sync with the proto
//! file and the backend.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthRequest {
    #[prost(string, tag = "1")]
    pub token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthResponse {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(int32, tag = "2")]
    pub user_id: i32,
    #[prost(message, optional, tag = "3")]
    pub created_at: Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "4")]
    pub expired_at: Option<::prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct User {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub username: String,
    #[prost(string, tag = "3")]
    pub fullname: String,
    #[prost(string, tag = "4")]
    pub email: String,
    #[prost(int32, tag = "5")]
    pub plan: i32,
    #[prost(message, optional, tag = "6")]
    pub created_at: Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub expired_at: Option<::prost_types::Timestamp>,
    #[prost(bool, tag = "8")]
    pub auto_renew: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserByUsernameRequest {
    #[prost(string, tag = "1")]
    pub username: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserByUsernameResponse {
    #[prost(message, optional, tag = "1")]
    pub user: Option<User>,
    /// Password hash as stored by the backend.
    #[prost(string, tag = "2")]
    pub password: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateUserRequest {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub fullname: String,
    #[prost(string, tag = "3")]
    pub email: String,
    #[prost(string, tag = "4")]
    pub password: String,
    #[prost(int32, tag = "5")]
    pub plan: i32,
    #[prost(bool, tag = "6")]
    pub auto_renew: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateUserRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, optional, tag = "2")]
    pub username: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub fullname: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub email: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub password: Option<String>,
    #[prost(int32, optional, tag = "6")]
    pub plan: Option<i32>,
    #[prost(bool, optional, tag = "7")]
    pub auto_renew: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserResponse {
    #[prost(message, optional, tag = "1")]
    pub user: Option<User>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Session {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(int32, tag = "2")]
    pub user_id: i32,
    #[prost(string, tag = "3")]
    pub refresh_token: String,
    #[prost(string, tag = "4")]
    pub client_ip: String,
    #[prost(string, tag = "5")]
    pub user_agent: String,
    #[prost(message, optional, tag = "6")]
    pub created_at: Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub expired_at: Option<::prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSessionRequest {
    #[prost(int32, tag = "1")]
    pub user_id: i32,
    #[prost(string, tag = "2")]
    pub client_ip: String,
    #[prost(string, tag = "3")]
    pub user_agent: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSessionResponse {
    #[prost(string, tag = "1")]
    pub access_token: String,
    #[prost(message, optional, tag = "2")]
    pub expired_at: Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub session: Option<Session>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RenewAccessTokenRequest {
    #[prost(string, tag = "1")]
    pub refresh_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RenewAccessTokenResponse {
    #[prost(string, tag = "1")]
    pub access_token: String,
    #[prost(message, optional, tag = "2")]
    pub expired_at: Option<::prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Item {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int32, tag = "3")]
    pub quantity: i32,
    #[prost(int32, tag = "4")]
    pub price: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateItemRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub quantity: i32,
    #[prost(int32, tag = "3")]
    pub price: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetItemRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListItemsRequest {
    #[prost(int32, tag = "1")]
    pub offset: i32,
    #[prost(int32, tag = "2")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListItemsResponse {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Item>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateItemRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
    #[prost(int32, optional, tag = "3")]
    pub quantity: Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub price: Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteItemRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteItemResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ItemResponse {
    #[prost(message, optional, tag = "1")]
    pub item: Option<Item>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Entry {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(int32, tag = "2")]
    pub user_id: i32,
    #[prost(int32, tag = "3")]
    pub item_id: i32,
    #[prost(int32, tag = "4")]
    pub quantity: i32,
    #[prost(int32, tag = "5")]
    pub total: i32,
    #[prost(message, optional, tag = "6")]
    pub created_at: Option<::prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateEntryRequest {
    #[prost(int32, tag = "1")]
    pub user_id: i32,
    #[prost(int32, tag = "2")]
    pub item_id: i32,
    #[prost(int32, tag = "3")]
    pub quantity: i32,
    #[prost(int32, tag = "4")]
    pub total: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetEntryRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EntryResponse {
    #[prost(message, optional, tag = "1")]
    pub entry: Option<Entry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListEntriesRequest {
    #[prost(int32, tag = "1")]
    pub offset: i32,
    #[prost(int32, tag = "2")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListEntriesByUserRequest {
    #[prost(int32, tag = "1")]
    pub user_id: i32,
    #[prost(int32, tag = "2")]
    pub offset: i32,
    #[prost(int32, tag = "3")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListEntriesByItemRequest {
    #[prost(int32, tag = "1")]
    pub item_id: i32,
    #[prost(int32, tag = "2")]
    pub offset: i32,
    #[prost(int32, tag = "3")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListEntriesResponse {
    #[prost(message, repeated, tag = "1")]
    pub entries: Vec<Entry>,
}
