// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use argot::{Command, Descriptor, parse};

#[derive(Command)]
pub struct Ls {
    #[argot("all|a")]
    pub all: bool,

    #[argot("l")]
    pub long_format: bool,

    #[argot(",positional")]
    pub paths: Vec<String>,

    cache: Vec<String>,
}

fn main() {
    let ls = Ls {
        all: true,
        long_format: false,
        paths: vec!["/tmp".to_string()],
        cache: Vec::new(),
    };

    assert_eq!(ls.type_name(), "Ls");
    assert_eq!(ls.fields().len(), 3);
    assert!(ls.cache.is_empty());
    assert_eq!(parse(&ls).unwrap(), ["ls", "--all", "/tmp"]);
}
