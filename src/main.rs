/// Mergington: extracurricular activity signup service
///
/// Main entry point for the Mergington server. Loads configuration, seeds the
/// activity catalog and starts the HTTP server.

use mergington::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Activity listing at /activities
/// - Enrollment at /activities/{name}/signup and /activities/{name}/unregister
/// - Landing page under /static (GET / redirects there)
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:8000 and a local SQLite file)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
