// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use argot::{Command, Descriptor, parse};

#[derive(Command)]
#[argot(name = "git-lfs")]
pub struct Lfs {
    #[argot(skip)]
    pub verbose: bool,

    #[argot("-")]
    pub dry_run: bool,

    #[argot(",positional")]
    pub r#ref: String,
}

fn main() {
    let lfs = Lfs {
        verbose: true,
        dry_run: true,
        r#ref: "main".to_string(),
    };

    assert_eq!(lfs.command_name(), Some("git-lfs"));
    assert_eq!(lfs.fields()[0].name, "ref");
    assert_eq!(parse(&lfs).unwrap(), ["git-lfs", "main"]);
}
