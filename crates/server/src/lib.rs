//! Server crate for the recommendation service.
//!
//! This crate contains the invocation adapter that routes named operations to
//! the selector, and the gRPC service the binary exposes.

pub mod config;
pub mod error;
pub mod grpc;
pub mod handler;

pub use config::ServerConfig;
pub use error::{Result, ServiceError};
pub use grpc::RecommendationGrpcService;
pub use handler::{FUNCTION_NAME, Operation, RecommendationHandler, handler_for};
