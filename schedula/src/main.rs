use commands::command_argument_builder;
use schedula::handlers::{
    handle_decode, handle_init, handle_logout, handle_submit, load_config, print_banner,
};
use tracing::Level;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");
    let verbose = chosen_command.get_flag("verbose");

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .init();

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    let config_path = chosen_command
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(schedula_core::config::DEFAULT_CONFIG_PATH);

    let outcome = match chosen_command.subcommand() {
        Some(("init", primary_command)) => handle_init(primary_command, config_path),
        Some(("decode", primary_command)) => handle_decode(primary_command),
        Some(("submit", primary_command)) => match load_config(config_path) {
            Ok(config) => handle_submit(primary_command, &config).await,
            Err(e) => Err(e),
        },
        Some(("logout", primary_command)) => match load_config(config_path) {
            Ok(config) => handle_logout(primary_command, &config).await,
            Err(e) => Err(e),
        },
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = outcome {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
