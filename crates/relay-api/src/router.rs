use axum::{
	routing::{get, post},
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{
	get_event_aggregate, get_events, get_providers, get_tenant_by_id, get_tenants, health,
	post_events, post_quotes, post_tenants, ready,
};
use crate::security::add_security_headers;
use crate::state::AppState;
// State is applied at the application level using `.with_state(...)`.

pub fn create_router() -> Router<AppState> {
	// Layers prepared first so they're in scope for all paths
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(1024 * 1024);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	let router = Router::new()
		.route("/health", get(health))
		.route("/health/", get(health))
		.route("/ready", get(ready))
		.route("/ready/", get(ready))
		.route("/v1/tenants", post(post_tenants).get(get_tenants))
		.route("/v1/tenants/", post(post_tenants).get(get_tenants))
		.route("/v1/tenants/{id}", get(get_tenant_by_id))
		.route("/v1/tenants/{id}/", get(get_tenant_by_id))
		.route("/v1/tenants/{id}/events", post(post_events).get(get_events))
		.route("/v1/tenants/{id}/events/", post(post_events).get(get_events))
		.route("/v1/tenants/{id}/events/aggregate", get(get_event_aggregate))
		.route("/v1/tenants/{id}/events/aggregate/", get(get_event_aggregate))
		.route("/v1/quotes", post(post_quotes))
		.route("/v1/quotes/", post(post_quotes))
		.route("/v1/providers", get(get_providers))
		.route("/v1/providers/", get(get_providers));

	// Apply common layers
	let router = router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit);

	add_security_headers(router)
}
