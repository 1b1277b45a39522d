use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("vigil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Monitor and control a managed VigilBot instance")
        .long_about("Vigil is the operator console for a VigilBot deployment. It polls the bot's control API for status, fetches and streams log lines, and issues start/stop/restart commands. The bot process itself runs behind the backend; this tool is the client side only.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("status")
                .about("Show the bot's current status record")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("logs")
                .about("Fetch the bot's buffered log history")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("follow")
                        .long("follow")
                        .short('f')
                        .help("Keep the log stream open and print lines as they arrive")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json")
                )
        )
        .subcommand(Command::new("start").about("Start the bot process"))
        .subcommand(Command::new("stop").about("Stop the bot process"))
        .subcommand(Command::new("restart").about("Restart the bot process"))
        .subcommand(
            Command::new("dashboard")
                .about("Live dashboard: status, controls, and streaming logs")
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Status refresh interval in seconds (overrides config, default: 5)")
                        .value_parser(clap::value_parser!(u64))
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell))
                        .index(1)
                )
        )
}

#[allow(dead_code)]
pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "vigil");
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_status_command() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "status"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        assert!(matches.subcommand_matches("status").is_some());
    }

    #[test]
    fn test_cli_status_json_flag() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "status", "--json"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let status_matches = matches.subcommand_matches("status").unwrap();
        assert!(status_matches.get_flag("json"));
    }

    #[test]
    fn test_cli_logs_command() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "logs"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let logs_matches = matches.subcommand_matches("logs").unwrap();
        assert!(!logs_matches.get_flag("json"));
        assert!(!logs_matches.get_flag("follow"));
    }

    #[test]
    fn test_cli_logs_follow_short_flag() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "logs", "-f"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let logs_matches = matches.subcommand_matches("logs").unwrap();
        assert!(logs_matches.get_flag("follow"));
    }

    #[test]
    fn test_cli_logs_follow_conflicts_with_json() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "logs", "--follow", "--json"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_control_commands() {
        for command in ["start", "stop", "restart"] {
            let app = build_cli();
            let matches = app.try_get_matches_from(vec!["vigil", command]);
            assert!(matches.is_ok(), "'vigil {}' should parse", command);

            let matches = matches.unwrap();
            assert!(matches.subcommand_matches(command).is_some());
        }
    }

    #[test]
    fn test_cli_control_commands_take_no_args() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "start", "extra"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_dashboard_interval_optional() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "dashboard"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let dashboard_matches = matches.subcommand_matches("dashboard").unwrap();
        // Interval falls back to config when not specified
        assert!(dashboard_matches.get_one::<u64>("interval").is_none());
    }

    #[test]
    fn test_cli_dashboard_interval_long() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "dashboard", "--interval", "10"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let dashboard_matches = matches.subcommand_matches("dashboard").unwrap();
        assert_eq!(*dashboard_matches.get_one::<u64>("interval").unwrap(), 10);
    }

    #[test]
    fn test_cli_dashboard_interval_short() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "dashboard", "-i", "2"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let dashboard_matches = matches.subcommand_matches("dashboard").unwrap();
        assert_eq!(*dashboard_matches.get_one::<u64>("interval").unwrap(), 2);
    }

    #[test]
    fn test_cli_dashboard_rejects_non_numeric_interval() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "dashboard", "--interval", "soon"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_completions_command() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "completions", "zsh"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let completions_matches = matches.subcommand_matches("completions").unwrap();
        assert_eq!(
            *completions_matches.get_one::<Shell>("shell").unwrap(),
            Shell::Zsh
        );
    }

    #[test]
    fn test_cli_completions_requires_shell() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "completions"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_completions_rejects_unknown_shell() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "completions", "tcsh"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_verbose_flag_short() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "-v", "status"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_flag_long() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "--verbose", "status"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_flag_after_subcommand() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "status", "-v"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_flag_default_false() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["vigil", "status"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        assert!(!matches.get_flag("verbose"));
    }
}
