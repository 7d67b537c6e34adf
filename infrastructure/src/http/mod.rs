//! HTTP surface shared by the chat server and its client
//!
//! [`wire`] holds the JSON shapes of `POST /api/chat`; [`client`] is the
//! `AdvisorClient` that talks to a running server.

pub mod client;
pub mod wire;

pub use client::HttpAdvisorClient;
