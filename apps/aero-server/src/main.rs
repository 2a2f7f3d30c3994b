use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "aero-server")]
#[command(about = "AeroSim API - 2D vortex panel simulation over HTTP", long_about = None)]
#[command(version)]
struct Cli {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(short, long, default_value_t = 8000)]
    port: u16,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("AeroSim API listening on http://{}", listener.local_addr()?);
        axum::serve(listener, aero_server::create_router()).await?;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
