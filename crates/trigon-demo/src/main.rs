use trigon_engine::device::GpuInit;
use trigon_engine::frame::FramePass;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig::default();
    log::info!(
        "starting \"{}\" at {}x{}",
        config.title,
        config.initial_size.width,
        config.initial_size.height
    );

    Runtime::run(config, GpuInit::default(), FramePass::TRIANGLE)
}
