//! Lithos Device Probe
//!
//! Enumerates GPUs and displays, runs the default device selection, and
//! reports what the capability model sees.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p lithos-probe -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `-r, --report`: Print the full capability report of every GPU and exit
//!   (headless; no window or display enumeration)
//! - `-h, --help`: Print help message
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

use lithos_app::{run_app, AppConfig, AppContext, LithosApp};
use lithos_gpu::limits::LimitKind;
use lithos_gpu::{Gpu, VulkanContext};
use lithos_platform::primary_adapter_name;
use tracing::info;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn main() -> anyhow::Result<()> {
    // Check for mode flags before starting the app
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    if std::env::args().any(|arg| arg == "-r" || arg == "--report") {
        return report();
    }

    run_app::<Probe>(AppConfig::new("Lithos Probe").with_size(WIDTH, HEIGHT))
}

/// Windowed probe: logs the negotiated selection, then idles until closed.
struct Probe;

impl LithosApp for Probe {
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self> {
        info!("Primary display: {}", ctx.primary_display.summary());
        info!("Selected GPU: {}", ctx.gpu.summary());
        for family in &ctx.gpu.queue_families {
            info!(
                "  queue family {}: {:?} x{}",
                family.index, family.kind, family.count
            );
        }
        Ok(Self)
    }
}

/// Headless report of every enumerated GPU.
fn report() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let vulkan = VulkanContext::new("lithos-probe", false)?;
    let adapter = primary_adapter_name();
    let gpus = vulkan.enumerate_gpus(adapter.as_deref())?;

    if gpus.is_empty() {
        println!("No GPUs found");
        return Ok(());
    }

    for gpu in &gpus {
        print_gpu(gpu);
    }

    Ok(())
}

fn print_gpu(gpu: &Gpu) {
    println!("{}", gpu.summary());
    println!("  driver version: {}", gpu.driver_version);

    println!("  queue families:");
    for family in &gpu.queue_families {
        println!("    [{}] {:?} x{}", family.index, family.kind, family.count);
    }

    println!("  features:");
    for (name, _) in gpu.features.iter_names() {
        println!("    {name}");
    }

    let mut extensions: Vec<&String> = gpu.extensions.iter().collect();
    extensions.sort();
    println!("  extensions ({}):", extensions.len());
    for extension in extensions {
        println!("    {extension}");
    }

    println!("  limits:");
    for &kind in LimitKind::ALL {
        println!("    {kind:?}: {:?}", gpu.limits.get(kind));
    }
}

fn print_help() {
    eprintln!(
        "Lithos Device Probe

USAGE:
    cargo run -p lithos-probe -- [OPTIONS]

OPTIONS:
    -r, --report            Print the full capability report of every GPU
                            and exit (no window is created)
    -h, --help              Print this help message

EXAMPLES:
    # Windowed probe with the default device requirements
    cargo run -p lithos-probe

    # Headless capability dump
    cargo run -p lithos-probe -- --report

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}
