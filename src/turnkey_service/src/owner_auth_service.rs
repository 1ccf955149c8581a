use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::post,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use turnkey_adapters::config::AllowedOrigins;
use turnkey_axum::routes::{authenticate, register_owner};
use turnkey_core::{Encrypter, HashComparer, HashGenerator, OwnersRepository};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP service exposing owner registration and authentication
pub struct OwnerAuthService {
    router: Router,
}

impl OwnerAuthService {
    /// Create a new OwnerAuthService wired with the given collaborators
    ///
    /// # Arguments
    /// * `owners_repository` - Store for owners (must be Clone)
    /// * `hasher` - Password hasher, used both to hash and to compare
    /// * `encrypter` - Issues access tokens
    ///
    /// Each route gets only the collaborators its use case needs.
    pub fn new<R, H, E>(owners_repository: R, hasher: H, encrypter: E) -> Self
    where
        R: OwnersRepository + Clone + 'static,
        H: HashGenerator + HashComparer + Clone + 'static,
        E: Encrypter + Clone + 'static,
    {
        let router = Router::new()
            // Registration needs the repository and a hash generator
            .route("/accounts", post(register_owner::<R, H>))
            .with_state((owners_repository.clone(), hasher.clone()))
            // Authentication needs the repository, a hash comparer and an encrypter
            .route("/sessions", post(authenticate::<R, H, E>))
            .with_state((owners_repository, hasher, encrypter));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server on `listener`
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Turnkey listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
