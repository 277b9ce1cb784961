//! Scanner Camera CLI
//!
//! Runs the camera configuration pipeline against a mock device (or a real
//! camera with the `camera` feature) and prints the chosen settings.

use clap::Parser;
use scanner_camera::{
    configuration::CameraConfigurationManager,
    device::{CameraDevice, CameraParameters, MockDevice},
    metrics::MetricsRegistry,
    preview::Dimensions,
    FileConfig,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "scanner-camera", version, about = "Configure a camera for barcode scanning")]
struct Args {
    /// Screen size as WIDTHxHEIGHT, in either orientation.
    #[arg(long, default_value = "1080x1920")]
    screen: Dimensions,

    /// Supported preview sizes of the mock device, comma separated.
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<Dimensions>,

    /// Current preview size of the mock device, used as the fallback.
    #[arg(long = "default", default_value = "640x480")]
    default_size: Dimensions,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only apply conservative settings.
    #[arg(long)]
    safe_mode: bool,

    /// Turn the torch on after configuring.
    #[arg(long)]
    torch: bool,

    /// Print Prometheus metrics after configuring.
    #[arg(long)]
    print_metrics: bool,

    /// Open a real camera by index instead of the mock device.
    #[cfg(feature = "camera")]
    #[arg(long)]
    device: Option<u32>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("Scanner Camera v{}", scanner_camera::VERSION);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match args.config {
        Some(ref path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let mut device = open_device(&args)?;
    let mut manager = CameraConfigurationManager::from_config(&config);
    let metrics = MetricsRegistry::new()?;

    let selection = manager.init_from_device(&*device, args.screen)?;
    metrics.record_selection(&selection);

    match manager.set_desired_parameters(&mut *device, args.safe_mode) {
        Ok(()) => metrics.record_configuration(true),
        Err(e) => {
            metrics.record_configuration(false);
            return Err(e.into());
        }
    }

    if args.torch {
        manager.set_torch(&mut *device, true)?;
    }
    let lit = manager.torch_state(&*device);
    metrics.record_torch(lit);

    println!("Preview size: {} ({:?})", selection.size, selection.kind);
    println!("Torch: {}", if lit { "on" } else { "off" });
    match device.parameters() {
        Some(params) => println!("Parameters: {}", params.flatten()),
        None => warn!("Device reports no parameters"),
    }

    if args.print_metrics {
        print!("{}", metrics.encode()?);
    }
    Ok(())
}

fn open_device(args: &Args) -> Result<Box<dyn CameraDevice>, Box<dyn std::error::Error>> {
    #[cfg(feature = "camera")]
    if let Some(index) = args.device {
        return Ok(Box::new(scanner_camera::device::NokhwaDevice::open(index)?));
    }

    if args.sizes.is_empty() {
        info!("Using typical mock device");
        return Ok(Box::new(MockDevice::typical()));
    }

    let mut params = CameraParameters::with_preview_size(args.default_size);
    params.supported_preview_sizes = Some(args.sizes.clone());
    Ok(Box::new(MockDevice::new(params)))
}
