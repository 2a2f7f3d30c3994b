use aero_app::{
    AppError, AppResult, LocalSolver, format_cl, format_gamma, header_line, load_params, write_csv, write_svg,
};
use aero_client::{ApiConfig, HealthStatus, HttpClient, SimulationApi};
use aero_core::{AirfoilShape, ParamsPatch, SimParams, SimResponse};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "aero-cli")]
#[command(about = "AeroSim CLI - 2D airfoil panel-method simulations", long_about = None)]
struct Cli {
    /// API base URL (defaults to $AEROSIM_API_BASE or http://127.0.0.1:8000)
    #[arg(long, global = true)]
    api: Option<String>,

    /// Request timeout in milliseconds (defaults to $AEROSIM_API_TIMEOUT_MS, else none)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post parameters to the simulation API
    Simulate(RunArgs),
    /// Solve in-process with the panel solver (no server needed)
    Solve(RunArgs),
    /// Check that the API is up
    Health,
}

#[derive(Args)]
struct RunArgs {
    /// YAML or JSON parameter file; flags override its values
    #[arg(long)]
    params: Option<PathBuf>,

    /// Airfoil shape, e.g. naca2412
    #[arg(long)]
    shape: Option<String>,

    /// Angle of attack (degrees)
    #[arg(long, allow_negative_numbers = true)]
    aoa: Option<f64>,

    /// Freestream velocity (m/s)
    #[arg(long)]
    velocity: Option<f64>,

    /// Fluid density (kg/m³)
    #[arg(long)]
    rho: Option<f64>,

    /// Number of surface points
    #[arg(long)]
    npts: Option<u32>,

    /// Write the airfoil view as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write an x,y,cp table
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the raw response as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn resolve_params(&self) -> AppResult<SimParams> {
        let base = match &self.params {
            Some(path) => load_params(path)?,
            None => SimParams::default(),
        };
        Ok(base.merged(ParamsPatch {
            shape: self.shape.as_deref().map(AirfoilShape::from),
            velocity: self.velocity,
            rho: self.rho,
            aoa_deg: self.aoa,
            npts: self.npts,
        }))
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => {
            let client = HttpClient::new(api_config(cli.api.as_deref(), cli.timeout_ms)?);
            cmd_run(&client, &args)
        }
        Commands::Solve(args) => cmd_run(&LocalSolver::default(), &args),
        Commands::Health => cmd_health(&api_config(cli.api.as_deref(), cli.timeout_ms)?),
    }
}

fn api_config(api: Option<&str>, timeout_ms: Option<u64>) -> AppResult<ApiConfig> {
    let mut config = ApiConfig::from_env()?;
    if let Some(base) = api {
        config = ApiConfig {
            timeout: config.timeout,
            ..ApiConfig::new(base)
        };
    }
    if let Some(ms) = timeout_ms {
        config = config.with_timeout(Duration::from_millis(ms));
    }
    Ok(config)
}

fn cmd_run(api: &dyn SimulationApi, args: &RunArgs) -> AppResult<()> {
    let params = args.resolve_params()?;
    tracing::info!(api = %api.describe(), shape = %params.shape, "running simulation");

    let started = Instant::now();
    let data = api.simulate(&params)?;
    let elapsed = started.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        print_summary(&params, &data, elapsed);
    }

    if let Some(path) = &args.svg {
        write_svg(path, &params, &data)?;
        println!("✓ Wrote {}", path.display());
    }
    if let Some(path) = &args.csv {
        write_csv(path, &data)?;
        println!("✓ Wrote {}", path.display());
    }
    Ok(())
}

fn print_summary(params: &SimParams, data: &SimResponse, elapsed: Duration) {
    println!("{}", header_line(params, data));
    println!("  Cl:     {}", format_cl(data.cl));
    println!("  Gamma:  {}", format_gamma(data.gamma));
    println!("  Chord:  {:.3} m", data.chord);
    println!("  Points: {}", data.len());
    println!(
        "  Flow:   V = {} m/s, rho = {} kg/m³, npts = {}",
        params.velocity, params.rho, params.npts
    );
    println!("  Time:   {:.3}s", elapsed.as_secs_f64());
}

fn cmd_health(config: &ApiConfig) -> AppResult<()> {
    let client = HttpClient::new(config.clone());
    let health = client.health()?;
    check_health(&config.base_url, &health)?;
    println!("✓ {} is up", config.base_url);
    Ok(())
}

fn check_health(base_url: &str, health: &HealthStatus) -> AppResult<()> {
    if health.is_ok() {
        Ok(())
    } else {
        Err(AppError::Unhealthy {
            base_url: base_url.to_string(),
            status: health.status.clone(),
        })
    }
}
