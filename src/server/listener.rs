use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);
    info!("Serving files from {}", cfg.static_files.root.display());

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let root = cfg.static_files.root.clone();
        let read_timeout = cfg.read_timeout();
        let write_timeout = cfg.write_timeout();
        tokio::spawn(async move {
            let conn = Connection::new(socket, root).with_deadlines(read_timeout, write_timeout);
            if let Err(e) = conn.serve().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
