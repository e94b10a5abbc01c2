//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use faq_core::{EditSession, Field, Mode, PageView, Record};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// A page in its JSON form.
#[derive(Serialize)]
pub struct PageJson<'a> {
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: &'a [Record],
}

impl<'a> From<PageView<'a, Record>> for PageJson<'a> {
    fn from(view: PageView<'a, Record>) -> Self {
        Self {
            page: view.page,
            total_pages: view.total_pages,
            total_items: view.total_items,
            items: view.items,
        }
    }
}

/// Print one page as a table followed by the page numbers.
pub fn page(view: &PageView<'_, Record>) {
    if view.total_items == 0 {
        eprintln!("{}", "No items.".dimmed());
        return;
    }

    println!(
        "{:>5}  {:<6}  {:<30}  {}",
        "ID".bold(),
        "Letter".bold(),
        "Title".bold(),
        "Body".bold()
    );
    for record in view.items {
        println!(
            "{:>5}  {:<6}  {:<30}  {}",
            record.id,
            record.letter,
            truncate(&record.title, 30),
            truncate(&record.body, 40)
        );
    }

    if view.is_past_end() {
        eprintln!(
            "{}",
            format!("Page {} is past the end of the list.", view.page).dimmed()
        );
    }

    let numbers: Vec<String> = view
        .page_numbers()
        .map(|n| {
            if n == view.page {
                format!("[{}]", n).bold().to_string()
            } else {
                n.to_string()
            }
        })
        .collect();
    println!("{}: {}", "Pages".dimmed(), numbers.join(" "));
}

/// Print the edit session: its mode and draft fields.
pub fn session(session: &EditSession) {
    let mode = match session.mode() {
        Mode::Create => "new item".to_string(),
        Mode::Update(id) => format!("editing item {}", id),
    };
    field("Mode", &mode);
    for f in Field::ALL {
        field(f.label(), session.draft().get(f));
    }
}

fn truncate(s: &str, width: usize) -> String {
    let line = s.lines().next().unwrap_or("");
    if line.chars().count() <= width && line.len() == s.len() {
        return line.to_string();
    }
    let mut out: String = line.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
