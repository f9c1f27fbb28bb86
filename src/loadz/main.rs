use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use loadz::catalog::Catalog;
use loadz::categories::category_summary;
use loadz::clipboard::copy_to_clipboard;
use loadz::config::LoadzConfig;
use loadz::error::{LoadzError, Result};
use loadz::model::LoaderRecord;
use loadz::session::{GallerySession, GalleryView};
use loadz::snippet::{format_snippet, write_archive};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    catalog: Catalog,
    config: LoadzConfig,
    config_dir: PathBuf,
    line_width: usize,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            search,
            category,
            complexity,
            size,
            speed,
            sort,
            desc,
            page,
        }) => handle_list(&ctx, search, category, complexity, size, speed, sort, desc, page),
        Some(Commands::Search { term }) => {
            handle_list(&ctx, Some(term), None, None, None, None, "name".into(), false, 1)
        }
        Some(Commands::Show { id, code }) => handle_show(&ctx, &id, code),
        Some(Commands::Copy { id }) => handle_copy(&ctx, &id),
        Some(Commands::Export { ids }) => handle_export(&ctx, &ids),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None, None, None, None, None, "name".into(), false, 1),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match std::env::var_os("LOADZ_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "loadz", "loadz").expect("Could not determine config dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = LoadzConfig::load(&config_dir).unwrap_or_default();

    let catalog = match cli.catalog.clone().or_else(|| config.catalog.clone()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    let (_, cols) = console::Term::stdout().size();
    let line_width = if cols > 0 {
        config.line_width.min(cols as usize)
    } else {
        config.line_width
    };

    Ok(AppContext {
        catalog,
        config,
        config_dir,
        line_width,
    })
}

#[allow(clippy::too_many_arguments)]
fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    category: Option<String>,
    complexity: Option<String>,
    size: Option<String>,
    speed: Option<String>,
    sort: String,
    desc: bool,
    page: usize,
) -> Result<()> {
    let mut session = GallerySession::new(ctx.catalog.clone());

    if let Some(term) = &search {
        session.set_search_term(term);
    }
    if let Some(category) = &category {
        session.set_category(category);
    }
    if let Some(complexity) = &complexity {
        session.set_complexity_filter(complexity);
    }
    if let Some(size) = &size {
        session.set_size_filter(size);
    }
    if let Some(speed) = &speed {
        session.set_speed_filter(speed);
    }
    session.set_sort_key(&sort);
    if desc {
        session.toggle_sort_direction();
    }

    let view = session.go_to_page(page);
    print_view(ctx, &view, search.as_deref(), session.filter().category.as_deref());
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str, code: bool) -> Result<()> {
    let record = find_record(ctx, id)?;

    println!("{} {}", record.name.bold(), format!("({})", record.id).dimmed());
    println!(
        "{}  {}  {}  {}",
        record.category.cyan(),
        record.complexity.to_string().yellow(),
        record.size.to_string().to_uppercase(),
        record.speed
    );
    if !record.description.is_empty() {
        println!("{}", record.description);
    }
    if !record.tags.is_empty() {
        let tags: Vec<String> = record.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" ").dimmed());
    }
    println!(
        "{} downloads, {} likes, created {}",
        record.downloads, record.likes, record.created_at
    );

    if code {
        println!("--------------------------------");
        println!("{}", format_snippet(record));
    }
    Ok(())
}

fn handle_copy(ctx: &AppContext, id: &str) -> Result<()> {
    let record = find_record(ctx, id)?;
    let snippet = format_snippet(record);

    match copy_to_clipboard(&snippet) {
        Ok(()) => println!(
            "{}",
            format!("{} code has been copied to your clipboard.", record.name).green()
        ),
        Err(e) => {
            eprintln!("Warning: Failed to copy to clipboard: {}", e);
            // Fall back to stdout so the snippet is still usable in a pipe
            println!("{}", snippet);
        }
    }
    Ok(())
}

fn handle_export(ctx: &AppContext, ids: &[String]) -> Result<()> {
    let records: Vec<LoaderRecord> = if ids.is_empty() {
        ctx.catalog.records().to_vec()
    } else {
        ids.iter()
            .map(|id| find_record(ctx, id).cloned())
            .collect::<Result<Vec<_>>>()?
    };

    if records.is_empty() {
        println!("{}", "No loaders to export.".dimmed());
        return Ok(());
    }

    let now = Utc::now();
    let filename = format!("loadz-{}.tar.gz", now.format("%Y-%m-%d_%H%M%S"));
    let file = std::fs::File::create(&filename).map_err(LoadzError::Io)?;
    write_archive(file, &records)?;

    println!(
        "{}",
        format!("Exported {} loaders to {}", records.len(), filename).green()
    );
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    for info in category_summary(&ctx.catalog) {
        println!(
            "{} {:<12} {:>5}  {}",
            info.icon.yellow(),
            info.id,
            info.count,
            info.description.dimmed()
        );
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => print_config(&ctx.config),
        (Some("catalog"), None) => match &ctx.config.catalog {
            Some(path) => println!("catalog = {}", path.display()),
            None => println!("catalog = (built-in)"),
        },
        (Some("catalog"), Some(v)) => {
            ctx.config.catalog = Some(PathBuf::from(v));
            ctx.config.save(&ctx.config_dir)?;
            print_config(&ctx.config);
        }
        (Some("line-width"), None) => println!("line-width = {}", ctx.config.line_width),
        (Some("line-width"), Some(v)) => {
            let width: usize = v
                .parse()
                .map_err(|_| LoadzError::Api(format!("Invalid line width: {}", v)))?;
            ctx.config.line_width = width;
            ctx.config.save(&ctx.config_dir)?;
            print_config(&ctx.config);
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

fn print_config(config: &LoadzConfig) {
    match &config.catalog {
        Some(path) => println!("catalog = {}", path.display()),
        None => println!("catalog = (built-in)"),
    }
    println!("line-width = {}", config.line_width);
}

fn find_record<'a>(ctx: &'a AppContext, id: &str) -> Result<&'a LoaderRecord> {
    ctx.catalog
        .get(id)
        .ok_or_else(|| LoadzError::LoaderNotFound(id.to_string()))
}

const TIME_WIDTH: usize = 14;

fn print_view(ctx: &AppContext, view: &GalleryView, search: Option<&str>, category: Option<&str>) {
    let mut headline = format!("{} loaders", view.total_results);
    if let Some(term) = search {
        if !term.trim().is_empty() {
            headline.push_str(&format!(" for \"{}\"", term));
        }
    }
    if let Some(category) = category {
        headline.push_str(&format!(" in {}", category));
    }
    println!("{}", headline.bold());
    println!();

    if view.total_results == 0 {
        println!("No loaders found.");
        println!("{}", "Try adjusting your search terms or filters.".dimmed());
        return;
    }

    let first_rank = (view.current_page - 1) * loadz::session::PAGE_SIZE;
    for (i, record) in view.page_items.iter().enumerate() {
        print_record_line(ctx, first_rank + i + 1, record);
    }

    println!();
    println!(
        "{}",
        format!("Page {} of {}", view.current_page, view.total_pages).dimmed()
    );
}

fn print_record_line(ctx: &AppContext, rank: usize, record: &LoaderRecord) {
    let idx_str = format!("{:>4}. ", rank);

    let stats = format!("{:>6}↓ {:>5}♥", record.downloads, record.likes);
    let stats_width = stats.width();

    // Only the first 3 tags are shown
    let tags: Vec<String> = record.tags.iter().take(3).map(|t| format!("#{}", t)).collect();
    let title_content = if tags.is_empty() {
        format!("{} [{}]", record.name, record.category)
    } else {
        format!("{} [{}] {}", record.name, record.category, tags.join(" "))
    };

    let fixed_width = idx_str.width() + stats_width + TIME_WIDTH + 4;
    let available = ctx.line_width.saturating_sub(fixed_width);
    let title_display = truncate_to_width(&title_content, available);
    let padding = available.saturating_sub(title_display.width());

    println!(
        "{}{}{}  {}  {}",
        idx_str.normal(),
        title_display,
        " ".repeat(padding),
        stats.dimmed(),
        format_age(&record.created_at).dimmed()
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Relative age for the list column; malformed dates fall back to the raw
/// text rather than hiding the record.
fn format_age(created_at: &str) -> String {
    let Some(date) = NaiveDate::parse_from_str(created_at, "%Y-%m-%d").ok() else {
        return format!("{:>width$}", created_at, width = TIME_WIDTH);
    };

    let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is valid");
    let duration = Utc::now().signed_duration_since(midnight.and_utc());

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
