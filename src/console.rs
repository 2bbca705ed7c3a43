//! Colourised console lines. Colour is dropped when `NO_COLOR` is set.

use owo_colors::OwoColorize;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn step(message: &str) {
    if use_colors() {
        println!("{}", message.yellow());
    } else {
        println!("{message}");
    }
}

pub fn success(message: &str) {
    if use_colors() {
        println!("{}", message.green());
    } else {
        println!("{message}");
    }
}

pub fn heading(message: &str) {
    if use_colors() {
        println!("{}", message.cyan());
    } else {
        println!("{message}");
    }
}

pub fn error(message: &str) {
    if use_colors() {
        eprintln!("{}", message.red());
    } else {
        eprintln!("{message}");
    }
}
