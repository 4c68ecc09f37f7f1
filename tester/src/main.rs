//! Drives the full mount/poll/unmount scenario against an in-process server
//! and asserts the counts and direction indicators along the way.

use std::time::Duration;

use server::{app, state::State};
use tokio::{net::TcpListener, time::sleep};
use tracing::info;
use widget::{
    api::CounterApi,
    display::{Direction, Display},
    widget::ViewerWidget,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state = State::new();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    let base_url = format!("http://{address}");
    info!("Server running on {base_url}");

    let observer = CounterApi::new(&base_url);
    assert_eq!(observer.fetch().await.unwrap(), 0);
    info!("Fresh counter reads 0");

    let mut a = ViewerWidget::mount(CounterApi::new(&base_url));
    wait_for(&observer, 1).await;
    info!("Viewer A arrived, count is 1");

    let mut b = ViewerWidget::mount(CounterApi::new(&base_url));
    wait_for(&observer, 2).await;
    info!("Viewer B arrived, count is 2");

    a.poll_once().await;
    b.poll_once().await;
    info!("A shows: {}", a.render());
    info!("B shows: {}", b.render());
    assert!(matches!(a.display(), Display::Showing { count: 2, .. }));
    assert!(matches!(b.display(), Display::Showing { count: 2, .. }));

    a.unmount().await.unwrap();
    wait_for(&observer, 1).await;
    info!("Viewer A left, count is 1");

    b.poll_once().await;
    info!("B shows: {}", b.render());
    assert_eq!(
        b.display(),
        Display::Showing {
            count: 1,
            direction: Direction::Decreasing
        }
    );

    let _ = b.unmount().await;
    wait_for(&observer, 0).await;
    info!("Viewer B left, count is back to 0");
}

async fn wait_for(api: &CounterApi, expected: i64) {
    for _ in 0..200 {
        if api.fetch().await.ok() == Some(expected) {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }

    panic!("counter never reached {expected}");
}
