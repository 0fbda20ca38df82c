use clap::Parser;
use std::fs;
use std::process::ExitCode;
use vboy_core::devices::core::VirtualBoy;

#[derive(Parser, Debug)]
#[command(name = "vboy", author, version, about = "A Virtual Boy core runner")]
struct Cli {
    /// Path to a Virtual Boy ROM image
    #[arg(long)]
    rom: String,

    /// Number of frames to run before exiting
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// tracing-subscriber filter directive, e.g. "vboy_core=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&cli.log_level))
        .init();

    let rom = match fs::read(&cli.rom) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(path = %cli.rom, error = %e, "failed to read ROM file");
            return ExitCode::FAILURE;
        }
    };

    let mut vb = VirtualBoy::new();
    if let Err(e) = vb.load_rom(&rom) {
        tracing::error!(error = %e, "failed to load ROM");
        return ExitCode::FAILURE;
    }

    tracing::info!(title = vb.get_rom_title(), "mounted cartridge");
    for frame in 0..cli.frames {
        vb.step_frame();
        tracing::debug!(frame, "stepped frame");
    }

    ExitCode::SUCCESS
}
