use clap::Parser;

use linkshelf::cli::{Cli, Commands};
use linkshelf::config::{get_config, init_config};
use linkshelf::runtime::modes;
use linkshelf::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config();

    match cli.command {
        None | Some(Commands::Serve) => {
            let config = get_config();
            // guard 必须存活到进程结束，否则日志不会刷新
            let _guard = init_logging(&config.logging);
            modes::run_server().await
        }
        Some(cmd) => {
            if let Err(e) = modes::run_cli(cmd).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
