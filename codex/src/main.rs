//! Roster listing and export tool.
//!
//! Prints character rosters to the terminal and writes the JSON files the
//! web rendering layer consumes.
//!
//! ```bash
//! cargo run -p codex -- list thething-characters
//! cargo run -p codex -- show igi-characters "Anya"
//! cargo run -p codex -- export igi-characters --out site/igi-characters.json
//! ```

use codex_core::{export, roster, Game};
use std::process;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let result = match args[1].as_str() {
        "list" => cmd_list(&args[2..]),
        "show" => cmd_show(&args[2..]),
        "export" => cmd_export(&args[2..]).await,
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!("Run with --help for usage.");
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    Ok(())
}

fn parse_game(args: &[String]) -> Result<Game, String> {
    let slug = args
        .first()
        .ok_or_else(|| "missing collection name".to_string())?;
    Game::from_slug(slug).ok_or_else(|| {
        format!(
            "unknown collection '{}'; expected one of: {}",
            slug,
            Game::all()
                .iter()
                .map(|g| g.slug())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

fn cmd_list(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let game = parse_game(args)?;
    let characters = roster::characters(game);

    println!("{} — {} characters", game.title(), characters.len());
    for character in characters {
        match &character.role {
            Some(role) => println!("  {} ({})", character.name, role),
            None => println!("  {}", character.name),
        }
    }
    Ok(())
}

fn cmd_show(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let game = parse_game(args)?;
    let name = args
        .get(1)
        .ok_or_else(|| "missing character name".to_string())?;

    let character = roster::find(game, name)
        .ok_or_else(|| format!("no character named '{}' in {}", name, game.slug()))?;

    println!("{}", export::character_json(character)?);
    Ok(())
}

async fn cmd_export(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let game = parse_game(args)?;

    // Output file defaults to the collection slug.
    let mut out = format!("{}.json", game.slug());
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--out" {
            if let Some(path) = args.get(i + 1) {
                out = path.clone();
                i += 1;
            }
        }
        i += 1;
    }

    export::write_roster(game, &out).await?;
    println!(
        "Wrote {} ({} characters) to {}",
        game.slug(),
        roster::characters(game).len(),
        out
    );
    Ok(())
}

fn print_help() {
    println!("codex - character roster listing and JSON export");
    println!();
    println!("USAGE:");
    println!("  codex <COMMAND> <COLLECTION> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("  list <collection>                 List every character in a collection");
    println!("  show <collection> <name>          Print one character record as JSON");
    println!("  export <collection> [--out FILE]  Write a collection as JSON");
    println!();
    println!("COLLECTIONS:");
    println!("  igi-characters        Project IGI");
    println!("  thething-characters   The Thing (2002)");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
}
