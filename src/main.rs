use tripcompare::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, backend) = bootstrap::app::setup();

    let jobs = app::start(&config, backend).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("TripCompare shutting down..");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("TripCompare successfully shutdown.");
        }
    }
}
