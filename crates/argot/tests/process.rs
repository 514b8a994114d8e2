// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Building `std::process::Command` values from descriptors and tokens.

use std::ffi::OsStr;

use argot::{Command, CommandExt, Error, ToValue, Value, command, must_command};

#[derive(Command)]
#[argot(name = "rsync")]
pub struct Rsync {
    #[argot("archive|a")]
    pub archive: bool,

    #[argot("exclude,long,joiner=[=]")]
    pub exclude: Vec<String>,

    #[argot(",positional")]
    pub source: String,

    #[argot(",positional")]
    pub destination: String
}

fn rsync() -> Rsync {
    Rsync {
        archive:     true,
        exclude:     vec!["*.tmp".into(), ".git".into()],
        source:      "src/".into(),
        destination: "host:dst/".into()
    }
}

fn args(cmd: &std::process::Command) -> Vec<&OsStr> {
    cmd.get_args().collect()
}

#[test]
fn descriptor_builds_program_and_arguments() {
    let cmd = command(&rsync()).unwrap();
    assert_eq!(cmd.get_program(), "rsync");
    assert_eq!(
        args(&cmd),
        [
            "--archive",
            "--exclude=*.tmp",
            "--exclude=.git",
            "src/",
            "host:dst/"
        ]
    );
}

#[test]
fn extension_trait_builds_the_same_command() {
    let record = rsync();
    let direct = command(&record).unwrap();
    let via_trait = record.to_command().unwrap();
    assert_eq!(direct.get_program(), via_trait.get_program());
    assert_eq!(args(&direct), args(&via_trait));
}

#[test]
fn strings_and_token_lists() {
    let cmd = must_command("true");
    assert_eq!(cmd.get_program(), "true");
    assert_eq!(args(&cmd).len(), 0);

    let tokens = vec!["echo".to_string(), "a b".to_string()];
    let cmd = command(tokens).unwrap();
    assert_eq!(cmd.get_program(), "echo");
    assert_eq!(args(&cmd), ["a b"]);
}

#[test]
fn dynamic_values() {
    let record = rsync();
    let cmd = command(record.to_value()).unwrap();
    assert_eq!(cmd.get_program(), "rsync");

    let cmd = command(Value::from("date")).unwrap();
    assert_eq!(cmd.get_program(), "date");

    assert_eq!(
        command(Value::from(true)).unwrap().get_program(),
        "true"
    );
    assert_eq!(
        command(Value::Nil).unwrap_err(),
        Error::NonStructInput { found: "nil" }
    );
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(command("").unwrap_err(), Error::EmptyInput);
    assert_eq!(command(Vec::<String>::new()).unwrap_err(), Error::EmptyInput);
}

#[test]
#[should_panic(expected = "cannot build a command from empty input")]
fn must_command_panics_on_error() {
    let _ = must_command(Vec::<String>::new());
}
