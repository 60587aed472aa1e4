use anyhow::Result;
use colored::Colorize;
use recipes_core::ProfileStats;
use recipes_core::error::RecipeError;

use super::App;

pub fn show(app: &App) -> Result<()> {
    let Some(session) = app.session.current_user() else {
        return Err(RecipeError::validation("session", "log in to see your profile").into());
    };
    let stats = ProfileStats::from_recipes(app.store.list());

    println!("{}", session.name.bold());
    println!("{}", session.email.dimmed());
    println!();
    println!("{:<18}{}", "Recipes:", stats.recipe_count);
    println!("{:<18}{} min", "Total prep time:", stats.total_prep_time);
    println!(
        "{:<18}{}",
        "Favorite category:",
        stats.favorite_category.as_deref().unwrap_or("-")
    );
    Ok(())
}
