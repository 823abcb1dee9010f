//! gRPC front end for the recommendation handler.

use catalog_client::CatalogError;
use catalog_client::hipstershop::recommendation_service_server::{
    RecommendationService, RecommendationServiceServer,
};
use catalog_client::hipstershop::{ListRecommendationsRequest, ListRecommendationsResponse};
use selector::SelectionError;
use tonic::{Code, Request, Response, Status};

use crate::error::ServiceError;
use crate::handler::RecommendationHandler;

/// Serves `hipstershop.RecommendationService` over tonic.
#[derive(Clone)]
pub struct RecommendationGrpcService {
    handler: RecommendationHandler,
}

impl RecommendationGrpcService {
    pub fn new(handler: RecommendationHandler) -> Self {
        Self { handler }
    }

    pub fn into_server(self) -> RecommendationServiceServer<Self> {
        RecommendationServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl RecommendationService for RecommendationGrpcService {
    async fn list_recommendations(
        &self,
        request: Request<ListRecommendationsRequest>,
    ) -> Result<Response<ListRecommendationsResponse>, Status> {
        let response = self.handler.list_recommendations(request.into_inner()).await?;
        Ok(Response::new(response))
    }
}

impl From<ServiceError> for Status {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::UnknownOperation(_) | ServiceError::UnknownFunction(_) => {
                Status::unimplemented(message)
            }
            ServiceError::MalformedRequest { .. } => Status::invalid_argument(message),
            // Cancellation and deadlines from the catalog pass through as-is
            ServiceError::Selection(SelectionError::CollaboratorUnavailable(
                CatalogError::Unavailable { code, .. },
            )) if matches!(code, Code::Cancelled | Code::DeadlineExceeded) => {
                Status::new(code, message)
            }
            ServiceError::Selection(_) => Status::unavailable(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_failure(code: Code) -> ServiceError {
        ServiceError::Selection(SelectionError::CollaboratorUnavailable(
            CatalogError::Unavailable {
                code,
                message: "boom".to_string(),
            },
        ))
    }

    #[test]
    fn test_unknown_operation_maps_to_unimplemented() {
        let status = Status::from(ServiceError::UnknownOperation("Foo".to_string()));
        assert_eq!(status.code(), Code::Unimplemented);
        assert_eq!(status.message(), "Unknown method: Foo");
    }

    #[test]
    fn test_catalog_outage_maps_to_unavailable() {
        assert_eq!(Status::from(catalog_failure(Code::Internal)).code(), Code::Unavailable);

        let connection = ServiceError::Selection(SelectionError::CollaboratorUnavailable(
            CatalogError::Connection {
                addr: "http://catalog:3550".to_string(),
                reason: "refused".to_string(),
            },
        ));
        assert_eq!(Status::from(connection).code(), Code::Unavailable);
    }

    #[test]
    fn test_cancellation_and_deadline_pass_through() {
        assert_eq!(Status::from(catalog_failure(Code::Cancelled)).code(), Code::Cancelled);
        assert_eq!(
            Status::from(catalog_failure(Code::DeadlineExceeded)).code(),
            Code::DeadlineExceeded
        );
    }
}
