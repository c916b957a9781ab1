use anyhow::Context;
use clap::Parser;
use mos6502_sys::config::SystemConfig;
use mos6502_sys::loader;
use mos6502_sys::monitor::Monitor;

fn main() -> anyhow::Result<()> {
    let config = SystemConfig::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if config.trace {
        builder.filter_level(log::LevelFilter::Trace);
    }
    builder.init();

    let bus = config
        .bus()
        .context("failed to build the peripheral bus from the given configuration")?;
    let mut monitor = Monitor::new(bus);

    log::info!(
        "loading {} at {:#06x}",
        config.program.display(),
        config.load_addr
    );
    loader::load_binary(&config.program, monitor.bus_mut(), config.load_addr)
        .with_context(|| format!("failed to load {}", config.program.display()))?;

    log::info!("monitor session starting");
    let stdin = std::io::stdin();
    monitor.run(stdin.lock());
    log::info!("monitor session ended");

    Ok(())
}
