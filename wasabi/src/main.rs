use std::{
    io::{
        self,
        Write as _,
    },
    process,
};

use anyhow::Context as _;
use clap::Parser as _;
use clap_stdin::MaybeStdin;
use clap_verbosity_flag::{
    InfoLevel,
    Verbosity,
};
use wasabi::{
    AnsiStyle,
    Color,
    Errors,
    INDENT,
    MessageKind,
    WRAP_MAX,
};

#[derive(clap::Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
enum Command {
    /// Color the provided text with ANSI escape sequences.
    Color {
        /// Foreground color, a name from the color table or a palette code.
        #[arg(long)]
        fg: Option<Color>,

        /// Background color, a name from the color table or a palette code.
        #[arg(long)]
        bg: Option<Color>,

        /// Make the text bold.
        #[arg(long, short)]
        bold: bool,

        /// The text, `-` to read it from standard input.
        #[arg(default_value = "-")]
        text: MaybeStdin<String>,
    },

    /// Wrap the provided text into an indented paragraph.
    Wrap {
        /// Maximum line width, including the indentation.
        #[arg(long, short, default_value_t = WRAP_MAX, conflicts_with = "fit")]
        width: u16,

        /// Use the width of the terminal as the maximum line width.
        #[arg(long)]
        fit: bool,

        /// Number of spaces to indent every line with.
        #[arg(long, short, default_value_t = INDENT)]
        indent: u16,

        /// The text, `-` to read it from standard input.
        #[arg(default_value = "-")]
        text: MaybeStdin<String>,
    },

    /// Escape characters the locale's encoding can't represent.
    Escape {
        /// What to do with unencodable characters.
        #[arg(long, short, default_value_t = Errors::Replace)]
        errors: Errors,

        /// The text, `-` to read it from standard input.
        #[arg(default_value = "-")]
        text: MaybeStdin<String>,
    },

    /// Print whether the terminal supports ANSI escape sequences.
    SupportsAnsi,

    /// Print a status message with the icon and color of its kind.
    Message {
        /// The kind of the message: good, fail, warn or info.
        #[arg(long, short, default_value_t = MessageKind::Info)]
        kind: MessageKind,

        /// The message, `-` to read it from standard input.
        #[arg(default_value = "-")]
        text: MaybeStdin<String>,
    },
}

fn main() -> process::ExitCode {
    let cli = Cli::parse();

    yansi::whenever(yansi::Condition::TTY_AND_COLOR);

    // Trying to imitate clap to get a consistent experience.
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .format(|buffer, record| {
            let level = match record.level() {
                log::Level::Error => MessageKind::Fail.header("error:"),
                log::Level::Warn => MessageKind::Warn.header("warn:"),
                log::Level::Info => MessageKind::Good.header("info:"),
                log::Level::Debug => MessageKind::Info.header("debug:"),
                log::Level::Trace => wasabi::paint("trace:", AnsiStyle::new().fg("cyan").bold().yansi()),
            };

            writeln!(buffer, "{level} {arguments}", arguments = record.args())
        })
        .init();

    match run(cli.command) {
        Ok(()) => process::ExitCode::SUCCESS,

        Err(error) => {
            log::error!("{error:#}");
            process::ExitCode::FAILURE
        },
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();

    let written = match command {
        Command::Color { fg, bg, bold, text } => {
            writeln!(out, "{text}", text = wasabi::color(line(&text), fg, bg, bold))
        },

        Command::Wrap {
            width,
            fit,
            indent,
            text,
        } => {
            let width = if fit { wasabi::terminal_width() } else { width };
            log::debug!("wrapping at {width} columns with an indent of {indent}");

            writeln!(out, "{text}", text = wasabi::wrap(line(&text), width, indent))
        },

        Command::Escape { errors, text } => {
            let escaped = wasabi::locale_escape_with(line(&text), errors).context("failed to escape text")?;

            writeln!(out, "{escaped}")
        },

        Command::SupportsAnsi => writeln!(out, "{supported}", supported = wasabi::supports_ansi()),

        Command::Message { kind, text } => writeln!(out, "{message}", message = wasabi::message(kind, line(&text))),
    };

    written.context("failed to write to stdout")
}

/// Strips the line break text read from standard input ends with.
fn line(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use clap::{
        CommandFactory as _,
        Parser as _,
    };

    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_color() {
        let cli = Cli::try_parse_from(["wasabi", "color", "--fg", "red", "--bg", "42", "-b", "text"]).unwrap();

        let Command::Color { fg, bg, bold, text } = cli.command else {
            panic!("expected the color command");
        };

        assert_eq!(fg, Some(Color::from("red")));
        assert_eq!(bg, Some(Color::Code(42)));
        assert!(bold);
        assert_eq!(line(&text), "text");
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["wasabi", "wrap", "some text"]).unwrap();

        let Command::Wrap { width, fit, indent, .. } = cli.command else {
            panic!("expected the wrap command");
        };

        assert_eq!((width, fit, indent), (WRAP_MAX, false, INDENT));

        assert!(Cli::try_parse_from(["wasabi", "wrap", "--fit", "--width", "10", "x"]).is_err());
        assert!(Cli::try_parse_from(["wasabi", "message", "--kind", "loud", "x"]).is_err());
        assert!(Cli::try_parse_from(["wasabi", "escape", "--errors", "loud", "x"]).is_err());
    }

    #[test]
    fn lines() {
        assert_eq!(line("text\n"), "text");
        assert_eq!(line("text\r\n"), "text");
        assert_eq!(line("text"), "text");
    }
}
