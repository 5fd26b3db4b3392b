use casework_cli::{CaseworkCli, DEFAULT_CONFIG_FILE};
use console::style;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = CaseworkCli::new().default_config_file(DEFAULT_CONFIG_FILE);

    if let Err(err) = cli.parse_and_run() {
        eprintln!("{} {err:#}", style("error:").red().bold());
        std::process::exit(1);
    }
}
