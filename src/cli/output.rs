//! Styled terminal output shared by the shell.

use console::style;

pub fn heading(text: &str) {
    println!("{}", style(text).bold().underlined());
}

pub fn info(text: &str) {
    println!("{text}");
}

pub fn muted(text: &str) {
    println!("{}", style(text).dim());
}

pub fn success(text: &str) {
    println!("{}", style(text).green());
}

pub fn warning(text: &str) {
    println!("{}", style(text).yellow());
}

pub fn error(text: &str) {
    eprintln!("{}", style(text).red());
}
