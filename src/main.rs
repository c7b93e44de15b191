use anyhow::Context;
use soundboard::{Config, Library, app_core::Soundboard, logging};

fn main() -> anyhow::Result<()> {
    unsafe { std::env::set_var("RUST_BACKTRACE", "1") };

    let config = Config::load()?;
    let _guard = logging::init_logging();

    let library = Library::from_config(&config)?;
    let catalog = library
        .scan()
        .with_context(|| format!("Could not load sounds from {}", library.get_root().display()))?;

    Soundboard::new(config, catalog).run()
}
