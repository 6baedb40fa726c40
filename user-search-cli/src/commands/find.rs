use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use user_search::prelude::*;

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Search endpoint URL
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Bearer token sent with the request
    #[arg(long, value_name = "TOKEN")]
    access_token: Option<String>,

    /// Substring to look for in names and descriptions
    #[arg(short, long, default_value = "")]
    query: String,

    /// Field to order by: Id, Age or Name
    #[arg(long, default_value = "")]
    order_field: String,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = Direction::AsIs)]
    order_by: Direction,

    /// Maximum number of users to return
    #[arg(short, long, default_value_t = DEFAULT_MAX_PAGE_SIZE as i64, allow_negative_numbers = true)]
    limit: i64,

    /// Number of matching users to skip
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Asc,
    Desc,
    AsIs,
}

impl From<Direction> for OrderBy {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => OrderBy::Asc,
            Direction::Desc => OrderBy::Desc,
            Direction::AsIs => OrderBy::AsIs,
        }
    }
}

pub async fn execute(args: FindArgs) -> Result<()> {
    let mut config = Config::load().context("Failed to load config")?.client;
    if let Some(url) = args.url {
        config.url = url;
    }
    if args.access_token.is_some() {
        config.access_token = args.access_token;
    }

    let client = SearchClient::from_config(&config).context("Failed to build search client")?;

    let request = SearchRequest::new(args.limit, args.offset)
        .with_query(args.query)
        .with_order_field(args.order_field)
        .with_order_by(args.order_by.into());

    let response = client
        .find_users(request)
        .await
        .with_context(|| format!("Search against {} failed", client.url()))?;

    if args.json {
        let output = serde_json::json!({
            "users": response.users,
            "next_page": response.next_page,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_users(&response);
    Ok(())
}

fn print_users(response: &SearchResponse) {
    if response.users.is_empty() {
        println!("{}", "No users found".yellow());
        return;
    }

    for user in &response.users {
        println!(
            "{:>5}  {:<24} {:>3}  {}",
            user.id.to_string().cyan(),
            user.name.bold(),
            user.age,
            user.gender.dimmed()
        );
    }

    println!();
    if response.next_page {
        println!("{} {} users, more available", "Found".green().bold(), response.users.len());
    } else {
        println!("{} {} users", "Found".green().bold(), response.users.len());
    }
}
