// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::{collections::BTreeMap, path::PathBuf};

use argot::{Command, ToValue, parse};

#[derive(Command)]
pub struct Run<'a, T> {
    #[argot("name,long")]
    pub name: &'a str,

    #[argot("env,short,joiner=[=]")]
    pub env: BTreeMap<String, String>,

    #[argot(",positional")]
    pub target: T,
}

fn main() {
    let run = Run {
        name: "job",
        env: BTreeMap::from([("HOME".to_string(), "/root".to_string())]),
        target: PathBuf::from("/bin/true"),
    };

    assert_eq!(
        parse(&run).unwrap(),
        ["run", "--name job", "-HOME=/root", "/bin/true"]
    );
    assert_eq!(run.to_value().kind(), "record");
}
