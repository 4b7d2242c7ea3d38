// ladle - your cookbook, searchable from the terminal
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use ladle_lib::{
    core::{Catalog, Editor, Searcher},
    db::RecipeInput,
    steps,
    Config, Database, Result,
};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Grab whatever the user typed
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "add" => handle_add(&args[2..]).await,
        "list" => handle_list(&args[2..]).await,
        "recent" => handle_recent(&args[2..]).await,
        "show" => handle_show(&args[2..]).await,
        "steps" => handle_steps(&args[2..]).await,
        "edit" => handle_edit(&args[2..]).await,
        "delete" => handle_delete(&args[2..]).await,
        "search" => handle_search(&args[2..]).await,
        "favorites" => handle_favorites().await,
        "fav" => handle_fav(&args[2..]).await,
        "stats" => handle_stats().await,
        "config" => handle_config(&args[2..]).await,
        "version" | "-v" | "--version" => {
            println!("ladle v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

// Shared flag parsing for add/edit: --name, --time, --ingredients,
// --process, --favorite. Returns which fields were present.
struct RecipeFlags {
    name: Option<String>,
    cooking_time: Option<String>,
    ingredients: Option<String>,
    cooking_process: Option<String>,
    favorite: Option<bool>,
}

fn parse_recipe_flags(args: &[String]) -> RecipeFlags {
    let mut flags = RecipeFlags {
        name: None,
        cooking_time: None,
        ingredients: None,
        cooking_process: None,
        favorite: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--name" => {
                i += 1;
                if i < args.len() {
                    flags.name = Some(args[i].clone());
                }
            }
            "--time" => {
                i += 1;
                if i < args.len() {
                    flags.cooking_time = Some(args[i].clone());
                }
            }
            "--ingredients" => {
                i += 1;
                if i < args.len() {
                    flags.ingredients = Some(args[i].clone());
                }
            }
            "--process" => {
                i += 1;
                if i < args.len() {
                    flags.cooking_process = Some(args[i].clone());
                }
            }
            "--favorite" => flags.favorite = Some(true),
            "--no-favorite" => flags.favorite = Some(false),
            _ => {}
        }
        i += 1;
    }

    flags
}

async fn handle_add(args: &[String]) -> Result<()> {
    let flags = parse_recipe_flags(args);

    let Some(name) = flags.name else {
        eprintln!("Error: --name is required");
        eprintln!("Usage: ladle add --name <name> [--time <t>] [--ingredients <i>] [--process <p>] [--favorite]");
        return Ok(());
    };

    let input = RecipeInput {
        name,
        cooking_time: flags.cooking_time.unwrap_or_default(),
        ingredients: flags.ingredients.unwrap_or_default(),
        cooking_process: flags.cooking_process.unwrap_or_default(),
        favorite: flags.favorite.unwrap_or(false),
    };

    let db = get_database().await?;
    let editor = Editor::new(Arc::new(db));

    match editor.add(input).await {
        Ok(id) => println!("Added recipe #{}", id),
        Err(e) => eprintln!("Could not add recipe: {}", e.user_message()),
    }

    Ok(())
}

async fn handle_list(args: &[String]) -> Result<()> {
    let db = get_database().await?;
    let catalog = Catalog::new(Arc::new(db));

    // Default listing is the whole book in insertion order; newest-first
    // lives under `recent`.
    let (title, recipes) = if args.iter().any(|arg| arg == "--alpha") {
        ("Recipes (alphabetical)", catalog.alphabetical().await?)
    } else {
        ("All recipes", catalog.all().await?)
    };

    print_recipe_table(title, &recipes);
    Ok(())
}

async fn handle_recent(args: &[String]) -> Result<()> {
    let limit = args.first().and_then(|s| s.parse::<i64>().ok()).unwrap_or(10);

    let db = get_database().await?;
    let catalog = Catalog::new(Arc::new(db));
    let recipes = catalog.recently_added(limit).await?;

    print_recipe_table("Recently added", &recipes);
    Ok(())
}

async fn handle_show(args: &[String]) -> Result<()> {
    let Some(id) = parse_id(args) else {
        eprintln!("Usage: ladle show <id>");
        return Ok(());
    };

    let db = get_database().await?;
    let catalog = Catalog::new(Arc::new(db));

    match catalog.by_id(id).await? {
        Some(recipe) => {
            println!("\n#{} {}", recipe.id, recipe.name);
            println!("{}", "=".repeat(60));
            if !recipe.cooking_time.is_empty() {
                println!("Cooking time: {}", recipe.cooking_time);
            }
            println!("Favorite:     {}", if recipe.favorite { "yes" } else { "no" });
            if !recipe.ingredients.is_empty() {
                println!("\nIngredients:\n{}", recipe.ingredients);
            }
            if !recipe.cooking_process.is_empty() {
                println!("\nInstructions:\n{}", recipe.cooking_process);
            }
            println!("{}", "=".repeat(60));
        }
        None => println!("No recipe with id {}", id),
    }

    Ok(())
}

async fn handle_steps(args: &[String]) -> Result<()> {
    let Some(id) = parse_id(args) else {
        eprintln!("Usage: ladle steps <id>");
        return Ok(());
    };

    let db = get_database().await?;
    let catalog = Catalog::new(Arc::new(db));

    match catalog.by_id(id).await? {
        Some(recipe) => {
            if recipe.cooking_process.is_empty() {
                println!("Recipe '{}' has no instructions yet.", recipe.name);
            } else {
                println!("\n{} — step by step", recipe.name);
                println!("{}", "=".repeat(60));
                print!("{}", steps::render_cooking_process(&recipe.cooking_process));
                println!("{}", "=".repeat(60));
            }
        }
        None => println!("No recipe with id {}", id),
    }

    Ok(())
}

async fn handle_edit(args: &[String]) -> Result<()> {
    let Some(id) = parse_id(args) else {
        eprintln!("Usage: ladle edit <id> [--name <n>] [--time <t>] [--ingredients <i>] [--process <p>] [--favorite|--no-favorite]");
        return Ok(());
    };
    let flags = parse_recipe_flags(&args[1..]);

    let db = Arc::new(get_database().await?);
    let catalog = Catalog::new(Arc::clone(&db));
    let editor = Editor::new(Arc::clone(&db));

    let Some(existing) = catalog.by_id(id).await? else {
        println!("No recipe with id {}", id);
        return Ok(());
    };

    // Unspecified fields keep their current values
    let input = RecipeInput {
        name: flags.name.unwrap_or(existing.name),
        cooking_time: flags.cooking_time.unwrap_or(existing.cooking_time),
        ingredients: flags.ingredients.unwrap_or(existing.ingredients),
        cooking_process: flags.cooking_process.unwrap_or(existing.cooking_process),
        favorite: flags.favorite.unwrap_or(existing.favorite),
    };

    match editor.update(id, input).await {
        Ok(()) => println!("Updated recipe #{}", id),
        Err(e) => eprintln!("Could not update recipe: {}", e.user_message()),
    }

    Ok(())
}

async fn handle_delete(args: &[String]) -> Result<()> {
    let Some(id) = parse_id(args) else {
        eprintln!("Usage: ladle delete <id>");
        return Ok(());
    };

    let db = get_database().await?;
    let editor = Editor::new(Arc::new(db));

    match editor.delete(id).await {
        Ok(()) => println!("Deleted recipe #{}", id),
        Err(e) => eprintln!("Could not delete recipe: {}", e.user_message()),
    }

    Ok(())
}

async fn handle_search(args: &[String]) -> Result<()> {
    if args.is_empty() {
        eprintln!("Error: No search query provided");
        return Ok(());
    }

    let query = args.join(" ");
    let db = get_database().await?;
    let searcher = Searcher::new(Arc::new(db));

    let results = searcher.search(&query, 20).await?;

    if results.is_empty() {
        println!("No recipes found matching '{}'", query);
    } else {
        println!("\nFound {} recipe(s) matching '{}':", results.len(), query);
        println!("{}", "=".repeat(60));
        for result in &results {
            println!("{:4}. {}", result.recipe.id, result.recipe.summary());
        }
        println!("{}", "=".repeat(60));
    }

    Ok(())
}

async fn handle_favorites() -> Result<()> {
    let db = get_database().await?;
    let catalog = Catalog::new(Arc::new(db));
    let recipes = catalog.favorites().await?;

    print_recipe_table("Favorites", &recipes);
    Ok(())
}

async fn handle_fav(args: &[String]) -> Result<()> {
    let Some(id) = parse_id(args) else {
        eprintln!("Usage: ladle fav <id>");
        return Ok(());
    };

    let db = get_database().await?;
    let catalog = Catalog::new(Arc::new(db));

    match catalog.toggle_favorite(id).await {
        Ok(true) => println!("Recipe #{} marked as favorite", id),
        Ok(false) => println!("Recipe #{} is no longer a favorite", id),
        Err(e) => eprintln!("{}", e.user_message()),
    }

    Ok(())
}

async fn handle_config(args: &[String]) -> Result<()> {
    let mut config = Config::load()?;

    // `ladle config --db <path>` persists a new database location;
    // without flags the current configuration is printed.
    let mut changed = false;
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--db" {
            i += 1;
            if i < args.len() {
                config.db_path = Some(std::path::PathBuf::from(&args[i]));
                changed = true;
            }
        }
        i += 1;
    }

    if changed {
        config.save()?;
        println!("Saved {}", Config::config_path()?.display());
    }

    println!("\nConfiguration");
    println!("{}", "=".repeat(60));
    println!("Config file: {}", Config::config_path()?.display());
    println!("Database:    {}", config.database_path()?.display());
    println!(
        "Assist key:  {}",
        if config.completion_api_key.is_some() {
            "configured"
        } else {
            "not configured"
        }
    );
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn handle_stats() -> Result<()> {
    let config = Config::load()?;
    let db = Database::new(config.database_path()?).await?;
    let stats = db.stats().await?;

    println!("\nladle Status");
    println!("{}", "=".repeat(60));
    println!("Database:  {}", db.path().display());
    println!("Recipes:   {}", stats.total_recipes);
    println!("Favorites: {}", stats.total_favorites);
    println!(
        "Assist:    {}",
        if config.completion_api_key.is_some() {
            "key configured"
        } else {
            "not configured"
        }
    );
    println!("{}", "=".repeat(60));

    Ok(())
}

fn parse_id(args: &[String]) -> Option<i64> {
    args.first().and_then(|s| s.parse::<i64>().ok())
}

fn print_recipe_table(title: &str, recipes: &[ladle_lib::db::Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    println!("\n{}:", title);
    println!("{}", "=".repeat(60));
    for recipe in recipes {
        println!("{:4}. {}", recipe.id, recipe.summary());
    }
    println!("{}", "=".repeat(60));
}

async fn get_database() -> Result<Database> {
    let config = Config::load()?;
    Database::new(config.database_path()?).await
}

fn print_usage() {
    println!(
        r#"ladle v{} - Your cookbook, searchable from the terminal

USAGE:
    ladle <COMMAND> [OPTIONS]

COMMANDS:
    add --name <name> [opts]   Add a recipe (--time, --ingredients, --process, --favorite)
    list [--alpha]             List all recipes (--alpha sorts by name)
    recent [limit]             Show recently added recipes (default: 10)
    show <id>                  Show a recipe in full
    steps <id>                 Show instructions as numbered steps
    edit <id> [opts]           Edit fields of a recipe
    delete <id>                Delete a recipe
    search <query>             Fuzzy-search recipes by name
    favorites                  List favorite recipes
    fav <id>                   Toggle favorite on a recipe
    stats                      Show database status
    config [--db <path>]       Show or update configuration
    version                    Show version
    help                       Show this help

EXAMPLES:
    ladle add --name "Tomato Soup" --time "45 min" --process "Chop onions. Fry gently."
    ladle steps 3
    ladle search carbonara
    ladle list --alpha
"#,
        env!("CARGO_PKG_VERSION")
    );
}
