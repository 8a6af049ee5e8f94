mod config;
mod main_lib;

use config::Config;
use main_lib::{init_tracing, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config.log_format);
    run(&config).await
}
