use std::net::SocketAddr;

/// Installs the Prometheus exporter when `BAZARI_METRICS_PORT` is set.
/// Counters recorded without an installed exporter are simply dropped.
pub fn init_metrics() {
    let port: u16 = match std::env::var("BAZARI_METRICS_PORT") {
        Ok(v) => match v.parse() {
            Ok(p) => p,
            Err(_) => return,
        },
        Err(_) => return,
    };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new().with_http_listener(addr);
    println!("[metrics] Attempting to install Prometheus exporter on {}", addr);
    match builder.install() {
        Ok(()) => {
            println!(
                "[metrics] Prometheus exporter installed and listening on http://{}/metrics",
                addr
            );
        }
        Err(e) => {
            println!(
                "[metrics] Prometheus exporter install failed (possibly already installed): {}",
                e
            );
        }
    }
}
