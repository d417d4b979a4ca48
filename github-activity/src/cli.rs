use clap::{ArgAction, Parser};

pub const USAGE: &str = "Usage: github-activity <username>";

#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "Show a GitHub user's recent public activity",
    disable_help_flag = true
)]
pub struct Cli {
    /// GitHub username, or `help`
    pub username: Option<String>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// Print usage
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Usage,
    /// `blank_username` is set when the username is empty. Usage is still
    /// printed for it, but the request is made regardless.
    Activity {
        username: String,
        blank_username: bool,
    },
}

impl Cli {
    pub fn invocation(self) -> Invocation {
        if self.help {
            return Invocation::Usage;
        }
        match self.username {
            None => Invocation::Usage,
            Some(username) if username == "help" => Invocation::Usage,
            Some(username) => Invocation::Activity {
                blank_username: username.is_empty(),
                username,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(args: &[&str]) -> Invocation {
        Cli::try_parse_from(std::iter::once("github-activity").chain(args.iter().copied()))
            .unwrap()
            .invocation()
    }

    #[test]
    fn test_usage_requests() {
        assert_eq!(invocation(&[]), Invocation::Usage);
        assert_eq!(invocation(&["help"]), Invocation::Usage);
        assert_eq!(invocation(&["-h"]), Invocation::Usage);
        assert_eq!(invocation(&["--help"]), Invocation::Usage);
    }

    #[test]
    fn test_username() {
        assert_eq!(
            invocation(&["octocat"]),
            Invocation::Activity {
                username: "octocat".to_string(),
                blank_username: false,
            }
        );
    }

    #[test]
    fn test_blank_username_still_fetches() {
        assert_eq!(
            invocation(&[""]),
            Invocation::Activity {
                username: String::new(),
                blank_username: true,
            }
        );
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        assert_eq!(
            invocation(&["octocat", "extra", "--flag"]),
            Invocation::Activity {
                username: "octocat".to_string(),
                blank_username: false,
            }
        );
    }
}
