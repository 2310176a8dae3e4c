use crate::api::server;
use crate::db::todos::Todos;
use crate::libs::config::Config;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind, overrides the configured host
    #[arg(long)]
    host: Option<String>,
    /// Port to bind, overrides the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let mut config = Config::load()?.server();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    server::serve(&config, Todos::new()?).await
}
