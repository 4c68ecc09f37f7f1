use std::env;

use tokio::signal::ctrl_c;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use widget::{api::CounterApi, widget::ViewerWidget};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let base_url =
        env::var("VIEWER_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    info!("Watching {base_url}");

    let mut widget = ViewerWidget::mount(CounterApi::new(&base_url));

    tokio::select! {
        _ = widget.run() => {},
        _ = ctrl_c() => info!("Received Ctrl+C, leaving"),
    }

    let _ = widget.unmount().await;
}
