//! Help page handler

use axum::response::Html;

const HELP: &str = r"<h1>LFG REST API</h1>
<h2>Available Routes</h2>
<pre>
  GET  /games
  GET  /games/:id/ads
  POST /games/:id/ads
  GET  /ads/:id/discord
  GET  /health
  GET  /health/ready
</pre>";

/// Help page listing the available routes
///
/// GET /
pub async fn help() -> Html<&'static str> {
    Html(HELP)
}
