//! # Invocation Adapter
//!
//! Bridges a named-operation dispatch boundary to the selector:
//! 1. Resolve the operation name against the fixed set of supported operations
//! 2. Decode the request (byte-level dispatch only)
//! 3. Run the selector
//! 4. Encode the response (byte-level dispatch only)
//!
//! Unregistered names fail closed with `ServiceError::UnknownOperation`; the
//! handler stays usable for later calls.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use catalog_client::hipstershop::{ListRecommendationsRequest, ListRecommendationsResponse};
use prost::Message;
use selector::RecommendationSelector;
use tracing::{error, info};

use crate::error::{Result, ServiceError};

/// Fully-qualified name of the function this service hosts
pub const FUNCTION_NAME: &str = "hipstershop.RecommendationService";

/// Operations exposed at the invocation boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListRecommendations,
}

impl Operation {
    pub const ALL: [Operation; 1] = [Operation::ListRecommendations];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListRecommendations => "ListRecommendations",
        }
    }
}

impl FromStr for Operation {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ServiceError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routes calls for `hipstershop.RecommendationService` to the selector.
#[derive(Clone)]
pub struct RecommendationHandler {
    selector: RecommendationSelector,
}

impl RecommendationHandler {
    pub fn new(selector: RecommendationSelector) -> Self {
        Self { selector }
    }

    /// Handle a decoded `ListRecommendations` request.
    ///
    /// `user_id` is logged but takes no part in the selection.
    pub async fn list_recommendations(
        &self,
        request: ListRecommendationsRequest,
    ) -> Result<ListRecommendationsResponse> {
        let start = Instant::now();
        let product_ids = self
            .selector
            .select(&request.product_ids)
            .await
            .inspect_err(|e| error!("ListRecommendations failed for user {}: {}", request.user_id, e))?;

        info!(
            "[Recv ListRecommendations] user_id={} excluded={} product_ids={:?} in {:.2?}",
            request.user_id,
            request.product_ids.len(),
            product_ids,
            start.elapsed()
        );
        Ok(ListRecommendationsResponse { product_ids })
    }

    /// Invoke an operation by name with an already decoded request.
    pub async fn invoke(
        &self,
        operation: &str,
        request: ListRecommendationsRequest,
    ) -> Result<ListRecommendationsResponse> {
        match operation.parse::<Operation>()? {
            Operation::ListRecommendations => self.list_recommendations(request).await,
        }
    }

    /// Invoke an operation by name with a protobuf-encoded payload.
    ///
    /// The operation name is checked before the payload is touched, so an
    /// unknown name always yields `UnknownOperation`.
    pub async fn dispatch(&self, operation: &str, payload: &[u8]) -> Result<Vec<u8>> {
        match operation.parse::<Operation>()? {
            Operation::ListRecommendations => {
                let request = ListRecommendationsRequest::decode(payload).map_err(|source| {
                    ServiceError::MalformedRequest {
                        operation: Operation::ListRecommendations.as_str(),
                        source,
                    }
                })?;
                let response = self.list_recommendations(request).await?;
                Ok(response.encode_to_vec())
            }
        }
    }
}

/// Resolve the handler for a hosted function name.
pub fn handler_for(function_name: &str, selector: RecommendationSelector) -> Result<RecommendationHandler> {
    if function_name == FUNCTION_NAME {
        Ok(RecommendationHandler::new(selector))
    } else {
        Err(ServiceError::UnknownFunction(function_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_client::{CatalogError, Product, ProductCatalog, StaticCatalog};
    use selector::SelectionError;
    use std::sync::Arc;

    struct DownCatalog;

    #[async_trait]
    impl ProductCatalog for DownCatalog {
        async fn list_products(&self) -> std::result::Result<Vec<Product>, CatalogError> {
            Err(CatalogError::Unavailable {
                code: tonic::Code::Cancelled,
                message: "request cancelled".to_string(),
            })
        }
    }

    fn handler_over(ids: &[&str]) -> RecommendationHandler {
        let catalog = StaticCatalog::from_ids(ids.iter().copied());
        RecommendationHandler::new(RecommendationSelector::new(Arc::new(catalog)))
    }

    fn request(excluded: &[&str]) -> ListRecommendationsRequest {
        ListRecommendationsRequest {
            user_id: "user-1".to_string(),
            product_ids: excluded.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_operation_names_round_trip() {
        let op: Operation = "ListRecommendations".parse().unwrap();
        assert_eq!(op, Operation::ListRecommendations);
        assert_eq!(op.to_string(), "ListRecommendations");
    }

    #[test]
    fn test_operation_names_are_case_sensitive() {
        let err = "listrecommendations".parse::<Operation>().unwrap_err();
        assert!(matches!(err, ServiceError::UnknownOperation(name) if name == "listrecommendations"));
    }

    #[tokio::test]
    async fn test_invoke_list_recommendations() {
        let handler = handler_over(&["a", "b"]);
        let response = handler
            .invoke("ListRecommendations", request(&["a"]))
            .await
            .unwrap();
        assert_eq!(response.product_ids, vec!["b".to_string()]);
    }

    #[tokio::test]
    async fn test_invoke_unknown_operation() {
        let handler = handler_over(&["a"]);
        let err = handler.invoke("GetProduct", request(&[])).await.unwrap_err();
        assert!(matches!(err, ServiceError::UnknownOperation(name) if name == "GetProduct"));

        // The handler keeps serving known operations afterwards
        let response = handler.invoke("ListRecommendations", request(&[])).await.unwrap();
        assert_eq!(response.product_ids, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_dispatch_round_trips_protobuf() {
        let handler = handler_over(&["a", "b", "c"]);
        let payload = request(&["c"]).encode_to_vec();

        let bytes = handler.dispatch("ListRecommendations", &payload).await.unwrap();
        let response = ListRecommendationsResponse::decode(bytes.as_slice()).unwrap();

        let mut ids = response.product_ids;
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_dispatch_checks_operation_before_payload() {
        let handler = handler_over(&["a"]);
        let err = handler.dispatch("Nope", &[0xff, 0xff]).await.unwrap_err();
        assert!(matches!(err, ServiceError::UnknownOperation(_)));
    }

    #[tokio::test]
    async fn test_dispatch_rejects_malformed_payload() {
        let handler = handler_over(&["a"]);
        let err = handler
            .dispatch("ListRecommendations", &[0xff, 0xff, 0xff])
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MalformedRequest { operation: "ListRecommendations", .. }));
    }

    #[tokio::test]
    async fn test_catalog_failure_is_not_an_empty_response() {
        let handler =
            RecommendationHandler::new(RecommendationSelector::new(Arc::new(DownCatalog)));
        let err = handler
            .invoke("ListRecommendations", request(&[]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Selection(SelectionError::CollaboratorUnavailable(_))
        ));
    }

    #[test]
    fn test_handler_for_unknown_function() {
        let selector = RecommendationSelector::new(Arc::new(StaticCatalog::default()));
        assert!(handler_for(FUNCTION_NAME, selector.clone()).is_ok());

        let err = handler_for("hipstershop.AdService", selector).err().unwrap();
        assert!(matches!(err, ServiceError::UnknownFunction(name) if name == "hipstershop.AdService"));
    }
}
