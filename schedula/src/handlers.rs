use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use schedula_client::AjaxClient;
use schedula_core::browser::Browser;
use schedula_core::config::Config;
use schedula_core::cycle::{logout_at, submit_form};
use schedula_core::form::{Form, PLEASE_WAIT};
use schedula_core::protocol::{CommandBatch, decode_delimited, decode_json, encode_json};
use schedula_core::report::{render_batch, render_submission};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_arg(value: Option<&String>) -> Self {
        match value.map(String::as_str) {
            Some("json") => ReportFormat::Json,
            _ => ReportFormat::Text,
        }
    }
}

/// Parse a `name=value` form field argument. The value may be empty.
pub fn parse_field_arg(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, _)) if name.trim().is_empty() => {
            Err(format!("Field '{}' has an empty name", arg))
        }
        Some((name, value)) => Ok((name.trim().to_string(), value.to_string())),
        None => Err(format!("Field '{}' must look like name=value", arg)),
    }
}

/// Build the form to submit from command-line fields, in argument order
pub fn build_form(form_id: &str, fields: &[(String, String)]) -> Form {
    let mut form = Form::new(form_id);
    for (name, value) in fields {
        form.push_input(name.as_str(), value.as_str());
    }
    form
}

/// Read the config file named on the command line
pub fn load_config(path: &str) -> Result<Config, String> {
    let path = Config::expand_path(path);
    Config::load(&path).map_err(|e| format!("Failed to load config {}: {}", path.display(), e))
}

/// Pick the base URL: the command line wins over the config file
pub fn resolve_base_url(url: Option<&Url>, config: &Config) -> Result<String, String> {
    if let Some(url) = url {
        return Ok(url.as_str().to_string());
    }
    match config.base_url {
        Some(ref base_url) => Url::parse(base_url)
            .map(|u| u.to_string())
            .map_err(|e| format!("Invalid base_url '{}' in config: {}", base_url, e)),
        None => Err("Either --url or base_url in the config file must be provided".to_string()),
    }
}

/// Browser that reports effects on the terminal, keeping a spinner out of the way
pub struct TerminalBrowser {
    spinner: Option<ProgressBar>,
    location: Option<String>,
}

impl TerminalBrowser {
    pub fn new(spinner: Option<ProgressBar>) -> Self {
        Self {
            spinner,
            location: None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn print(&self, line: String) {
        match self.spinner {
            Some(ref spinner) => spinner.println(line),
            None => println!("{}", line),
        }
    }
}

impl Browser for TerminalBrowser {
    fn navigate(&mut self, url: &str) {
        self.print(format!("{} Load page: {}", "→".blue().bold(), url.bright_white()));
        self.location = Some(url.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.print(format!("{} {}", "⚠".yellow().bold(), message.yellow()));
    }
}

fn please_wait_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(PLEASE_WAIT);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn build_client(base_url: &str, config: &Config) -> Result<AjaxClient, String> {
    AjaxClient::with_options(base_url, config.client_options())
        .map_err(|e| format!("Failed to create client: {}", e))
}

pub fn print_banner() {
    println!(
        "{} {}",
        "schedula".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
}

/// Where `init` writes: its own PATH argument, else the global `--config` path
pub fn init_target(path_arg: Option<&str>, config_path: &str) -> PathBuf {
    Config::expand_path(path_arg.unwrap_or(config_path))
}

/// Write a default config to `path`, refusing to replace one unless `force`
pub fn write_initial_config(path: &Path, base_url: Option<&Url>, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }

    let config = Config {
        base_url: base_url.map(|u| u.to_string()),
        ..Config::default()
    };
    config
        .save(path)
        .map_err(|e| format!("Failed to write config {}: {}", path.display(), e))
}

pub fn handle_init(args: &ArgMatches, config_path: &str) -> Result<(), String> {
    let path = init_target(args.get_one::<String>("PATH").map(String::as_str), config_path);
    write_initial_config(&path, args.get_one::<Url>("url"), args.get_flag("force"))?;

    println!(
        "{} Config written: {}",
        "✓".green().bold(),
        path.display().to_string().bright_white()
    );
    Ok(())
}

pub async fn handle_submit(args: &ArgMatches, config: &Config) -> Result<(), String> {
    let base_url = resolve_base_url(args.get_one::<Url>("url"), config)?;
    let path = args
        .get_one::<String>("path")
        .ok_or_else(|| "--path is required".to_string())?;
    let form_id = args
        .get_one::<String>("form-id")
        .map(String::as_str)
        .unwrap_or("form");
    let fields: Vec<(String, String)> = args
        .get_many::<(String, String)>("field")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let format = ReportFormat::from_arg(args.get_one::<String>("format"));

    let client = build_client(&base_url, config)?;
    let mut form = build_form(form_id, &fields);
    let mut browser = TerminalBrowser::new(Some(please_wait_spinner()));

    let submission = submit_form(&client, path, &mut form, &mut browser).await;
    browser.finish();

    match format {
        ReportFormat::Text => print!("{}", render_submission(&submission, Some(&form))),
        ReportFormat::Json => {
            let report = serde_json::json!({
                "reply": &submission.reply,
                "commands": &submission.commands,
                "form": &form,
                "location": browser.location(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?
            );
        }
    }

    if submission.reply.is_failure() {
        return Err("Request failed".to_string());
    }
    Ok(())
}

pub async fn handle_logout(args: &ArgMatches, config: &Config) -> Result<(), String> {
    let base_url = resolve_base_url(args.get_one::<Url>("url"), config)?;
    let path = args
        .get_one::<String>("path")
        .cloned()
        .unwrap_or_else(|| config.logout_path.clone());

    let client = build_client(&base_url, config)?;
    let mut browser = TerminalBrowser::new(Some(please_wait_spinner()));

    let submission = logout_at(&client, &path, &mut browser).await;
    browser.finish();

    if submission.reply.is_failure() {
        return Err("Logout failed".to_string());
    }
    println!("{} Logged out", "✓".green().bold());
    Ok(())
}

/// Decode a body given on the command line, or `-` for stdin
pub fn decode_body(body: &str, structured: bool) -> Result<CommandBatch, String> {
    let body = if body == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        buffer
    } else {
        body.to_string()
    };

    if structured {
        decode_json(&body).map_err(|e| e.to_string())
    } else {
        Ok(decode_delimited(&body))
    }
}

pub fn handle_decode(args: &ArgMatches) -> Result<(), String> {
    let body = args
        .get_one::<String>("BODY")
        .map(String::as_str)
        .unwrap_or("");
    let structured = args.get_flag("json");
    let format = ReportFormat::from_arg(args.get_one::<String>("format"));

    let commands = decode_body(body, structured)?;

    match format {
        ReportFormat::Text => print!("{}", render_batch(&commands)),
        ReportFormat::Json => println!("{}", encode_json(&commands)),
    }
    Ok(())
}
