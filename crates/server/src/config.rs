//! Command-line and environment configuration for the server binary.

use std::net::SocketAddr;

use clap::Parser;

use crate::handler::FUNCTION_NAME;

/// Recommendation service - samples products the caller has not seen
#[derive(Debug, Clone, Parser)]
#[command(name = "recommendation-server")]
#[command(about = "Serves hipstershop.RecommendationService over gRPC", long_about = None)]
pub struct ServerConfig {
    /// Address to serve gRPC on
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Address of the product catalog service
    #[arg(long, env = "PRODUCT_CATALOG_SERVICE_ADDR", default_value = "http://localhost:3550")]
    pub catalog_addr: String,

    /// Function name the runtime asks this binary to host
    #[arg(long, default_value = FUNCTION_NAME)]
    pub function: String,
}
