use anyhow::Result;
use colored::Colorize;

use super::App;

pub fn login(app: &App, name: &str) -> Result<()> {
    let session = app.session.login(name)?;
    println!("{}", format!("Welcome, {}!", session.name).green());
    Ok(())
}

pub fn logout(app: &App) -> Result<()> {
    app.session.logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(app: &App) {
    match app.session.current_user() {
        Some(session) => println!("{} <{}>", session.name.bold(), session.email),
        None => println!("{}", "Not logged in. Use `recipes login <name>`.".dimmed()),
    }
}
