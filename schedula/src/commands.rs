use crate::CLAP_STYLING;
use clap::{arg, command};
use schedula::handlers::parse_field_arg;
use schedula_core::config::DEFAULT_CONFIG_PATH;
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("schedula")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("schedula")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Log request details to stderr").required(false))
        .arg(
            arg!(-c --"config" <PATH>)
                .required(false)
                .help("Location of the schedula config file")
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .subcommand_required(false)
        .subcommand(
            command!("init")
                .about("Writes a default config file")
                .arg(
                    arg!([PATH])
                        .required(false)
                        .help("Where to write the config file (default: the --config path)"),
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("Base URL of the scheduler to store in the config")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(-f --"force")
                        .help("Overwrite an existing config file")
                        .required(false),
                ),
        )
        .subcommand(
            command!("submit")
                .about(
                    "Submit a form to an AJAX endpoint and apply the commands the server \
                sends back.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("Base URL of the scheduler (default: base_url from the config)")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(-p --"path" <PATH>)
                        .required(true)
                        .help("Endpoint path, e.g. /pages/login/login_ajax.php"),
                )
                .arg(
                    arg!(--"form-id" <ID>)
                        .required(false)
                        .help("Id of the submitting form")
                        .default_value("form"),
                )
                .arg(
                    arg!(-F --"field" <FIELD>)
                        .required(false)
                        .help("Form field as name=value; repeat for each input")
                        .value_parser(parse_field_arg)
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            command!("logout")
                .about("End the current session")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("Base URL of the scheduler (default: base_url from the config)")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(-p --"path" <PATH>)
                        .required(false)
                        .help("Logout endpoint (default: logout_path from the config)"),
                ),
        )
        .subcommand(
            command!("decode")
                .about("Decode a reply body offline and list its commands")
                .arg(
                    arg!(<BODY>)
                        .required(true)
                        .help("Reply body to decode, or - to read stdin"),
                )
                .arg(
                    arg!(--"json")
                        .required(false)
                        .help("Treat the body as a structured JSON command list")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
}
