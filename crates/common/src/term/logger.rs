use std::fmt::Display;

use cliclack::{intro as cliclack_intro, log, outro as cliclack_outro};
use console::style;

pub fn intro() {
    cliclack_intro(style(" pramb-cli ").on_cyan().black()).unwrap();
}

pub fn outro(msg: impl Display) {
    cliclack_outro(msg).unwrap();
}

pub fn info(msg: impl Display) {
    log::info(msg).unwrap();
}

pub fn warn(msg: impl Display) {
    log::warning(msg).unwrap();
}

pub fn success(msg: impl Display) {
    log::success(msg).unwrap();
}

pub fn error(msg: impl Display) {
    log::error(style(msg.to_string()).red()).unwrap();
}

pub fn new_empty_line() {
    println!();
}
