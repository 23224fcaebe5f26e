use owo_colors::OwoColorize;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print a plain line on stdout (no prefix). Status lines and per-file
/// diagnostics go through here so scripts can match them exactly.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Like print_user, but highlights the line when stdout is a TTY.
pub fn print_status(msg: &str, ok: bool) {
    if !is_tty() {
        println!("{}", msg);
    } else if ok {
        println!("{}", msg.green().bold());
    } else {
        println!("{}", msg.red().bold());
    }
}
