use shortlink_core::Repository;
use shortlink_proto_schema::v1 as proto;
use shortlink_proto_schema::v1::url_shortener_server::UrlShortener;
use shortlink_service::response::into_envelope;
use shortlink_service::{Generator, LinkError, LinkService};
use tonic::{Request, Response, Status};
use tracing::{debug, error, info};

pub struct UrlShortenerGrpcServer<R: Repository, G: Generator> {
    service: LinkService<R, G>,
}

impl<R: Repository, G: Generator> UrlShortenerGrpcServer<R, G> {
    pub fn new(service: LinkService<R, G>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<R: Repository, G: Generator> UrlShortener for UrlShortenerGrpcServer<R, G> {
    async fn create_short_link(
        &self,
        request: Request<proto::Request>,
    ) -> Result<Response<proto::Response>, Status> {
        let input = request.into_inner().input;
        let result = self.service.create(&input).await;

        match &result {
            Ok(link) => {
                info!(code = %link.short_code, url = %link.original_url, "short link created")
            }
            Err(LinkError::InvalidInput(reason)) => {
                debug!(reason = %reason, "create rejected")
            }
            Err(err) => error!(error = %err, url = %input, "create failed"),
        }

        Ok(Response::new(into_envelope(result)))
    }

    async fn resolve_short_link(
        &self,
        request: Request<proto::Request>,
    ) -> Result<Response<proto::Response>, Status> {
        let input = request.into_inner().input;
        let result = self.service.resolve(&input).await;

        match &result {
            Ok(link) => {
                info!(code = %input, url = %link.original_url, "short link resolved")
            }
            Err(LinkError::NotFound) => debug!(code = %input, "short code not found"),
            Err(err) => error!(error = %err, code = %input, "resolve failed"),
        }

        Ok(Response::new(into_envelope(result)))
    }
}
