use std::sync::Arc;
use wall_http::notification::AlertVariant;
use wall_http::wall::PostsQuery;
use wall_http::{
    AlertChannel, ConnectivityFlag, Environment, HTTPClient, MessageCatalog, WallService, error,
    info, log, warn,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let env = Environment::global();
    info!(
        "Starting wall client against {} ({})",
        env.api_base_url(),
        if env.is_production() { "production" } else { "development" }
    );

    let alerts = AlertChannel::new();
    let mut alert_rx = alerts.subscribe();
    let alert_logger = tokio::spawn(async move {
        while let Ok(alert) = alert_rx.recv().await {
            match alert.variant() {
                AlertVariant::Success => info!("{}", alert.message()),
                AlertVariant::Error => warn!("{}", alert.message()),
            }
        }
    });

    let client = match HTTPClient::for_environment(
        env,
        Arc::new(MessageCatalog::builtin()),
        Arc::new(alerts),
        Arc::new(ConnectivityFlag::default()),
    ) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Could not create HTTP client: {e:?}");
            std::process::exit(1);
        }
    };

    let wall = WallService::new(client);
    let query = PostsQuery { num_posts_loaded: Some(0), ..PostsQuery::default() };
    let page = wall.get_posts(&query).await;
    if page.is_success {
        log!(
            "Loaded {} posts ({} unread, {} drafts)",
            page.result.posts().len(),
            page.result.unread_count().map_or_else(|| "?".to_string(), |n| n.to_string()),
            page.result.draft_count().map_or_else(|| "?".to_string(), |n| n.to_string()),
        );
    } else {
        warn!("Listing posts failed");
    }
    // dropping the last sender closes the channel once pending alerts are logged
    drop(wall);
    if let Err(e) = alert_logger.await {
        error!("Alert logger stopped unexpectedly: {e}");
    }
}
