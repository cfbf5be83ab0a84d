use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::io::{self, Write};

/// how a console message is styled and where it goes
#[derive(Debug, Clone, Copy)]
pub enum Tone {
    /// plain stdout
    Info,
    /// green stdout
    Status,
    /// yellow stderr
    Warning,
    /// red stderr
    Error,
}

/// write one line; console write failures are ignored
pub fn emit(tone: Tone, args: fmt::Arguments<'_>) {
    let text = args.to_string();
    let _ = match tone {
        Tone::Info => writeln!(io::stdout(), "{text}"),
        Tone::Status => writeln!(io::stdout(), "{}", text.green()),
        Tone::Warning => writeln!(io::stderr(), "{}", text.yellow()),
        Tone::Error => writeln!(io::stderr(), "{}", text.red()),
    };
}

#[macro_export]
macro_rules! info {
    () => {
        $crate::ui::emit($crate::ui::Tone::Info, format_args!(""))
    };
    ($($arg:tt)+) => {
        $crate::ui::emit($crate::ui::Tone::Info, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! status {
    ($($arg:tt)+) => {
        $crate::ui::emit($crate::ui::Tone::Status, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::ui::emit($crate::ui::Tone::Warning, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::ui::emit($crate::ui::Tone::Error, format_args!($($arg)+))
    };
}

/// progress over `len` files, drawn on stderr only when it is a terminal
pub fn progress(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} {pos}/{len} {wide_msg}")
            .expect("invalid progress template"),
    );
    bar
}
