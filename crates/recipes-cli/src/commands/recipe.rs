use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use colored::{ColoredString, Colorize};
use recipes_core::recipe::{
    Difficulty, FormMode, RECOMMENDED_CATEGORIES, Recipe, RecipeForm, is_recommended_category,
};
use recipes_infrastructure::ImageUpload;

use super::{App, resolve, short_id};

/// Recipe fields shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct RecipeArgs {
    #[arg(long)]
    pub title: Option<String>,

    /// Ingredient line; repeat the flag or separate lines with newlines
    #[arg(short = 'i', long, visible_alias = "ingredient")]
    pub ingredients: Vec<String>,

    #[arg(long)]
    pub instructions: Option<String>,

    #[arg(short, long)]
    pub category: Option<String>,

    /// Preparation time in minutes
    #[arg(short, long)]
    pub prep_time: Option<u32>,

    /// Easy, Medium or Hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    #[arg(long, conflicts_with = "image_file")]
    pub image_url: Option<String>,

    /// Local image to embed (at most 5 MB)
    #[arg(long)]
    pub image_file: Option<PathBuf>,
}

impl RecipeArgs {
    /// Overwrites the form fields that were given on the command line.
    fn apply_to(self, form: &mut RecipeForm) -> Result<()> {
        if let Some(title) = self.title {
            form.title = title;
        }
        if !self.ingredients.is_empty() {
            form.ingredients = self.ingredients.join("\n");
        }
        if let Some(instructions) = self.instructions {
            form.instructions = instructions;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if self.prep_time.is_some() {
            form.prep_time = self.prep_time;
        }
        if self.difficulty.is_some() {
            form.difficulty = self.difficulty;
        }
        if let Some(path) = self.image_file {
            form.image_url = ImageUpload::from_path(&path)?.into_data_url();
        } else if let Some(url) = self.image_url {
            form.image_url = url;
        }
        Ok(())
    }
}

pub fn add(mut app: App, args: RecipeArgs) -> Result<()> {
    let mut form = RecipeForm::default();
    args.apply_to(&mut form)?;
    let data = form.validate(FormMode::Create, &app.config.form_defaults())?;
    warn_unrecommended(&data.category);

    let recipe = app.store.add(data).clone();
    println!(
        "{} {} ({})",
        "Added".green(),
        recipe.title.bold(),
        short_id(app.store.list(), &recipe.id)
    );
    app.close();
    Ok(())
}

pub fn edit(mut app: App, id: &str, args: RecipeArgs) -> Result<()> {
    let recipe = resolve(&app.store, id)?;
    let id = recipe.id.clone();

    let mut form = RecipeForm::from_recipe(recipe);
    args.apply_to(&mut form)?;
    let data = form.validate(FormMode::Edit, &app.config.form_defaults())?;
    warn_unrecommended(&data.category);

    let title = data.title.clone();
    if app.store.update(&id, data) {
        println!("{} {}", "Updated".green(), title.bold());
    }
    app.close();
    Ok(())
}

pub fn delete(mut app: App, id: &str) -> Result<()> {
    let recipe = resolve(&app.store, id)?;
    let (full_id, title) = (recipe.id.clone(), recipe.title.clone());

    if app.store.delete(&full_id) {
        println!("{} {}", "Deleted".green(), title.bold());
    }
    app.close();
    Ok(())
}

pub fn list(app: &App) {
    if app.store.is_empty() {
        println!("{}", "No recipes yet. Add one with `recipes add`.".dimmed());
        return;
    }
    print_table(app.store.list(), app.store.list().iter());
}

pub fn search(app: &App, query: &str) {
    let found = app.store.search(query);
    if found.is_empty() {
        println!("{}", format!("No recipes match '{}'.", query).dimmed());
        return;
    }
    print_table(app.store.list(), found.into_iter());
}

pub fn show(app: &App, id: &str) -> Result<()> {
    let recipe = resolve(&app.store, id)?;

    println!("{}", recipe.title.bold());
    println!(
        "{} · {} min · {}",
        recipe.category,
        recipe.prep_time,
        difficulty_label(recipe.difficulty)
    );
    println!(
        "{}",
        format!(
            "Added {}",
            recipe.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        )
        .dimmed()
    );
    println!();

    println!("{}", "Ingredients".underline());
    for ingredient in &recipe.ingredients {
        println!("  • {}", ingredient);
    }
    println!();
    println!("{}", "Instructions".underline());
    println!("{}", recipe.instructions);
    println!();
    println!("{} {}", "Image:".dimmed(), describe_image(recipe));
    println!("{} {}", "Id:".dimmed(), recipe.id);
    Ok(())
}

pub fn categories() {
    for category in RECOMMENDED_CATEGORIES {
        println!("{}", category);
    }
}

/// Prints `rows`; ids are shortened against the whole collection `all`.
fn print_table<'a>(all: &[Recipe], rows: impl Iterator<Item = &'a Recipe>) {
    println!(
        "{}",
        format!(
            "{:<15}{:<32}{:<16}{:>6}  {}",
            "ID", "TITLE", "CATEGORY", "MIN", "DIFFICULTY"
        )
        .dimmed()
    );
    for recipe in rows {
        println!(
            "{:<15}{:<32}{:<16}{:>6}  {}",
            short_id(all, &recipe.id),
            truncate(&recipe.title, 30),
            truncate(&recipe.category, 14),
            recipe.prep_time,
            difficulty_label(recipe.difficulty)
        );
    }
}

fn difficulty_label(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::Easy => difficulty.label().green(),
        Difficulty::Medium => difficulty.label().yellow(),
        Difficulty::Hard => difficulty.label().red(),
    }
}

fn describe_image(recipe: &Recipe) -> String {
    let url = recipe.display_image_url();
    match url.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split(';').next().unwrap_or("image");
            format!("embedded {} ({} bytes)", mime, url.len())
        }
        None => url.to_string(),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn warn_unrecommended(category: &str) {
    if !is_recommended_category(category) {
        eprintln!(
            "{}",
            format!(
                "⚠ '{}' is not one of the recommended categories ({})",
                category,
                RECOMMENDED_CATEGORIES.join(", ")
            )
            .yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use recipes_core::recipe::{DEFAULT_IMAGE_URL, RecipeData};

    fn recipe(image_url: &str) -> Recipe {
        Recipe::from_data(
            "id".to_string(),
            Utc::now(),
            RecipeData {
                title: "Lemonade".to_string(),
                ingredients: vec!["lemon".to_string()],
                instructions: "Squeeze.".to_string(),
                image_url: image_url.to_string(),
                prep_time: 5,
                difficulty: Difficulty::Easy,
                category: "Drinks".to_string(),
            },
        )
    }

    #[test]
    fn test_apply_to_keeps_unspecified_fields() {
        let mut form = RecipeForm::from_recipe(&recipe(""));
        RecipeArgs {
            title: Some("Pink Lemonade".to_string()),
            prep_time: Some(10),
            ..RecipeArgs::default()
        }
        .apply_to(&mut form)
        .unwrap();

        assert_eq!(form.title, "Pink Lemonade");
        assert_eq!(form.prep_time, Some(10));
        assert_eq!(form.ingredients, "lemon");
        assert_eq!(form.category, "Drinks");
    }

    #[test]
    fn test_ingredient_flags_are_lines() {
        let mut form = RecipeForm::default();
        RecipeArgs {
            ingredients: vec!["lemon".to_string(), "water\nsugar".to_string()],
            ..RecipeArgs::default()
        }
        .apply_to(&mut form)
        .unwrap();
        assert_eq!(form.ingredients, "lemon\nwater\nsugar");
    }

    #[test]
    fn test_describe_image() {
        assert_eq!(describe_image(&recipe("")), DEFAULT_IMAGE_URL);
        assert_eq!(
            describe_image(&recipe("data:image/png;base64,AAAA")),
            "embedded image/png (26 bytes)"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Salad", 10), "Salad");
        assert_eq!(truncate("Feijoada Completa", 8), "Feijoad…");
    }
}
