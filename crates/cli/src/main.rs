//! Terminal presentation adapter for the tidewater storefront.
//!
//! Translates typed lines into storefront commands and renders the derived
//! views as text. All business rules live in the domain crates; this binary
//! only parses, dispatches, and prints.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tidewater_catalog::{Catalog, CategoryFilter, MenuItem, seed};
use tidewater_core::ItemId;
use tidewater_storefront::{
    AddItem, CartView, ChangeQuantity, ClearCart, MenuView, RemoveItem, SelectCategory,
    SetSearchQuery, Storefront, StorefrontCommand,
};

#[derive(Debug, Parser)]
#[command(name = "tidewater", about = "Browse the menu and manage a cart from the terminal")]
struct Args {
    /// Load the catalog from a JSON file instead of the built-in menu.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    tidewater_observability::init();

    let args = Args::parse();
    let catalog = load_catalog(&args)?;
    tracing::info!(items = catalog.len(), "catalog loaded");

    let mut storefront = Storefront::new(catalog);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("tidewater — type `help` for commands");
    render_menu(&storefront.menu_view());

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !handle_line(&mut storefront, line.trim())? {
            break;
        }
    }

    Ok(())
}

fn load_catalog(args: &Args) -> Result<Catalog> {
    match &args.catalog {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog file {}", path.display()))?;
            let items: Vec<MenuItem> = serde_json::from_str(&raw).context("parsing catalog JSON")?;
            Ok(Catalog::new(items)?)
        }
        None => Ok(seed::coastal_menu()?),
    }
}

/// Handle one input line. Returns `false` when the session should end.
fn handle_line(storefront: &mut Storefront, line: &str) -> Result<bool> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(true);
    };
    let rest: Vec<&str> = words.collect();

    match verb {
        "help" => print_help(),
        "menu" => render_menu(&storefront.menu_view()),
        "cart" => render_cart(&storefront.cart_view()),
        "cat" => match parse_filter(&rest) {
            Ok(category) => {
                dispatch(
                    storefront,
                    StorefrontCommand::SelectCategory(SelectCategory { category }),
                );
                render_menu(&storefront.menu_view());
            }
            Err(message) => println!("{message}"),
        },
        "search" => {
            let query = rest.join(" ");
            dispatch(
                storefront,
                StorefrontCommand::SetSearchQuery(SetSearchQuery { query }),
            );
            render_menu(&storefront.menu_view());
        }
        "add" => match parse_id(&rest) {
            Ok(item_id) => {
                dispatch(storefront, StorefrontCommand::AddItem(AddItem { item_id }));
                render_cart(&storefront.cart_view());
            }
            Err(message) => println!("{message}"),
        },
        "rm" => match parse_id(&rest) {
            Ok(item_id) => {
                dispatch(
                    storefront,
                    StorefrontCommand::RemoveItem(RemoveItem { item_id }),
                );
                render_cart(&storefront.cart_view());
            }
            Err(message) => println!("{message}"),
        },
        "qty" => match parse_id_and_delta(&rest) {
            Ok((item_id, delta)) => {
                dispatch(
                    storefront,
                    StorefrontCommand::ChangeQuantity(ChangeQuantity { item_id, delta }),
                );
                render_cart(&storefront.cart_view());
            }
            Err(message) => println!("{message}"),
        },
        "clear" => {
            dispatch(storefront, StorefrontCommand::ClearCart(ClearCart));
            render_cart(&storefront.cart_view());
        }
        "checkout" => {
            let cart = storefront.cart_view();
            if cart.is_empty {
                println!("your cart is empty");
            } else {
                let summary = storefront.checkout_summary();
                println!(
                    "Thank you for your order! Items: {}, Total: ${}",
                    summary.item_count, summary.total
                );
            }
        }
        "quit" | "exit" => return Ok(false),
        other => println!("unknown command `{other}` — type `help`"),
    }

    Ok(true)
}

/// Apply a command and surface a rejection as a printed message, never as a
/// crash.
fn dispatch(storefront: &mut Storefront, command: StorefrontCommand) {
    if let Err(err) = storefront.apply(command) {
        println!("rejected: {err}");
    }
}

fn print_help() {
    println!("commands:");
    println!("  help                      show this help");
    println!("  menu                      show the current menu view");
    println!("  cart                      show the cart");
    println!("  cat <all|starters|mains|desserts|drinks>  filter by category");
    println!("  search <text>             filter by search text");
    println!("  add <item-id>             add an item to the cart");
    println!("  rm <item-id>              remove an item from the cart");
    println!("  qty <item-id> <delta>     change an item's quantity");
    println!("  clear                     empty the cart");
    println!("  checkout                  print the order summary");
    println!("  quit                      exit");
}

fn parse_filter(rest: &[&str]) -> Result<CategoryFilter, String> {
    match rest {
        [key] => key
            .parse()
            .map_err(|_| format!("unknown category `{key}` (try all, starters, mains, desserts, drinks)")),
        _ => Err("usage: cat <all|starters|mains|desserts|drinks>".to_string()),
    }
}

fn parse_id(rest: &[&str]) -> Result<ItemId, String> {
    match rest {
        [raw] => raw.parse().map_err(|_| format!("`{raw}` is not an item id")),
        _ => Err("usage: add|rm <item-id>".to_string()),
    }
}

fn parse_id_and_delta(rest: &[&str]) -> Result<(ItemId, i32), String> {
    match rest {
        [raw_id, raw_delta] => {
            let item_id = raw_id
                .parse()
                .map_err(|_| format!("`{raw_id}` is not an item id"))?;
            let delta: i32 = raw_delta
                .parse()
                .map_err(|_| format!("`{raw_delta}` is not a quantity delta"))?;
            Ok((item_id, delta))
        }
        _ => Err("usage: qty <item-id> <delta>".to_string()),
    }
}

fn render_menu(menu: &MenuView) {
    println!("Curating {} delicacies", menu.count);
    if menu.items.is_empty() {
        println!("  (nothing matches the current tab and search)");
        return;
    }
    for item in &menu.items {
        println!(
            "  [{}] {} — ${} ({})",
            item.id, item.name, item.price, item.category_display
        );
    }
}

fn render_cart(cart: &CartView) {
    if cart.is_empty {
        println!("cart: empty");
        return;
    }
    for line in &cart.lines {
        println!(
            "  [{}] {} x{} — ${}",
            line.item_id, line.name, line.quantity, line.extended_price
        );
    }
    let t = &cart.totals;
    println!(
        "  subtotal ${}  tax ${}  total ${}  (mobile: gratuity ${}, total ${})  items {}",
        t.subtotal, t.tax, t.total, t.gratuity, t.mobile_total, t.item_count
    );
}
