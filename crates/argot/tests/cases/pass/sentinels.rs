// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use argot::{ArgName, Command, CommandName, marshal};

#[derive(Command)]
pub struct Filter {
    #[argot("filter,short")]
    pub arg: ArgName,

    #[argot(",suffixprev,delimiters=[:]")]
    pub stream: String,

    #[argot(",skipname")]
    pub graph: String,
}

#[derive(Command)]
pub struct Tool {
    #[argot("tool")]
    pub command: CommandName,

    pub filter: Filter,
}

fn main() {
    let tool = Tool {
        command: CommandName::default(),
        filter: Filter {
            arg: ArgName,
            stream: "a".to_string(),
            graph: "volume=2".to_string(),
        },
    };

    assert_eq!(marshal(&tool).unwrap(), "tool -filter:a volume=2");
}
