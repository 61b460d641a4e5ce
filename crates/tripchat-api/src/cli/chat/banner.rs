//! Welcome banner for terminal sessions.

use console::style;

/// `via` names where replies come from, e.g. the relay URL or the model.
pub fn print_welcome_banner(via: &str, transcript: Option<&str>) {
    println!();
    println!("  {} {}", style("*").cyan(), style("tripchat").cyan().bold());
    println!("  {}", style("Your travel assistant. Say hello to get started.").dim());
    println!();
    println!("  {}  {}", style("Via:").bold(), style(via).dim());
    if let Some(path) = transcript {
        println!("  {}  {}", style("Transcript:").bold(), style(path).dim());
    }
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
