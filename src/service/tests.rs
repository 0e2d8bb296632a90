use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::connect_info::MockConnectInfo,
    http::{Request, Response},
};
use http_body_util::BodyExt;

use serde::Deserialize;

use crate::state::SharedState;

use tower::{Service, ServiceBuilder, ServiceExt}; // for `call` and `ready`

/// In-process handle over a fully set up service, for driving it from tests.
#[derive(Clone)]
pub struct StubService {
    service: super::Service,
    state: SharedState,
}

impl StubService {
    pub async fn new(service: super::Service) -> Self {
        let mut service = super::ServiceExt::stub(service);
        let state = SharedState::stub();
        super::ServiceExt::set_up(&mut service, state.clone()).await;
        Self { service, state }
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub async fn request(&self, req: Request<Body>) -> Response<Body> {
        let router = self
            .service
            .router()
            .expect("stub service is always set up")
            .clone();
        let mut svc = ServiceBuilder::new()
            .layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 8000))))
            .service(router);
        ServiceExt::<Request<Body>>::ready(&mut svc)
            .await
            .unwrap()
            .call(req)
            .await
            .unwrap()
    }

    pub async fn deserialize_response<T: for<'a> Deserialize<'a>>(response: Response<Body>) -> T {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }
}
