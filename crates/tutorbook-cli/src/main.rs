//! `tutorbook`: command-line contact manager for private tutors.
//!
//! # Usage
//!
//! ```text
//! tutorbook list
//! tutorbook add --name "Amy Bee" --phone 85355255 --email amy@gmail.com \
//!   --address "123, Jurong West Ave 6" --lesson "15/06/2025 1900-2100" \
//!   --subject math
//! tutorbook edit 1 --pay paid
//! tutorbook filter-date 15/6/2025
//! ```

mod app;
mod settings;

use std::{path::PathBuf, process::ExitCode};

use app::{App, NewPerson, PersonEdit};
use clap::{Parser, Subcommand};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tutorbook_json::JsonStorage;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "tutorbook",
  author,
  version,
  about = "Contact manager for private tutors"
)]
struct Cli {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "tutorbook.toml")]
  config: PathBuf,

  /// Address book JSON file; overrides the configured `data_path`.
  #[arg(long, value_name = "FILE")]
  data: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List every person.
  List,

  /// Add a person.
  Add(NewPerson),

  /// Edit the person at INDEX (as shown by `list`).
  Edit {
    index: usize,

    #[command(flatten)]
    edit: PersonEdit,
  },

  /// List persons whose next lesson falls on DATE (d/M/yyyy).
  FilterDate {
    #[arg(
      value_name = "DATE",
      num_args = 0..,
      trailing_var_arg = true,
      allow_hyphen_values = true
    )]
    words: Vec<String>,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  match run(cli) {
    Ok(output) => {
      println!("{output}");
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("{err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> anyhow::Result<String> {
  let settings = Settings::load(&cli.config)?;
  let data_path = cli.data.unwrap_or(settings.data_path);
  tracing::debug!(path = %data_path.display(), "using data file");

  let mut app = App::load(JsonStorage::new(data_path))?;

  match cli.command {
    Command::List => Ok(app.list()),
    Command::Add(input) => app.add(input),
    Command::Edit { index, edit } => app.edit(index, edit),
    // The parser receives the argument text verbatim, blank included.
    Command::FilterDate { words } => app.filter_date(&words.join(" ")),
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_valid() { Cli::command().debug_assert(); }

  #[test]
  fn filter_date_collects_raw_words() {
    let cli =
      Cli::try_parse_from(["tutorbook", "filter-date", "15-04-2026"]).unwrap();
    let Command::FilterDate { words } = cli.command else {
      panic!("expected filter-date")
    };
    assert_eq!(words, ["15-04-2026"]);

    let cli = Cli::try_parse_from(["tutorbook", "filter-date"]).unwrap();
    let Command::FilterDate { words } = cli.command else {
      panic!("expected filter-date")
    };
    assert!(words.is_empty());
  }

  #[test]
  fn edit_flattens_field_flags() {
    let cli = Cli::try_parse_from([
      "tutorbook",
      "edit",
      "2",
      "--pay",
      "paid",
      "--subject",
      "math",
      "--subject",
      "art",
    ])
    .unwrap();
    let Command::Edit { index, edit } = cli.command else {
      panic!("expected edit")
    };
    assert_eq!(index, 2);
    assert_eq!(edit.pay_status.as_deref(), Some("paid"));
    assert_eq!(edit.subjects, ["math", "art"]);
  }

  fn run_with_data(
    data: &std::path::Path,
    command: &str,
  ) -> anyhow::Result<String> {
    let config = data.with_file_name("absent.toml");
    let cli = Cli::try_parse_from([
      "tutorbook",
      "--config",
      config.to_str().unwrap(),
      "--data",
      data.to_str().unwrap(),
      command,
    ])
    .unwrap();
    run(cli)
  }

  #[test]
  fn bad_data_file_prints_the_domain_message_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    std::fs::write(
      &path,
      r#"{"persons":[{"name":"Amy Bee","email":"a@bc","address":"x","nextLesson":"","payStatus":""}]}"#,
    )
    .unwrap();

    let err = run_with_data(&path, "list").unwrap_err();
    assert_eq!(format!("{err:#}"), "Person's Phone field is missing!");
  }

  #[test]
  fn duplicate_people_in_data_file_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let amy = r#"{"name":"Amy Bee","phone":"911","email":"a@bc","address":"x","nextLesson":"","payStatus":""}"#;
    std::fs::write(&path, format!(r#"{{"persons":[{amy},{amy}]}}"#)).unwrap();

    let err = run_with_data(&path, "list").unwrap_err();
    assert_eq!(
      format!("{err:#}"),
      "Persons list contains duplicate person(s)."
    );
  }
}
