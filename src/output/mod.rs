//! Output generation for the tagcheck CLI application

use serde::Serialize;
use tinytemplate::{error::Error, format_unescaped, TinyTemplate};

static MENU: &'static str = r#"
{title}
{{ for item in items }}{item.number}. {item.label}
{{ endfor }}Enter choice: "#;

static LISTING: &'static str = "Tags in sequence: {tags}";

static SUMMARY: &'static str =
    "{tags} tag{{ if plural_tags }}s{{ endif }} checked, {errors} error{{ if plural_errors }}s{{ endif }}";

#[derive(Serialize)]
struct Item {
    number: usize,
    label: &'static str,
}

#[derive(Serialize)]
struct Menu {
    title: String,
    items: Vec<Item>,
}

#[derive(Serialize)]
struct Listing<'a> {
    tags: &'a str,
}

#[derive(Serialize)]
struct Summary {
    tags: usize,
    plural_tags: bool,
    errors: usize,
    plural_errors: bool,
}

pub const CHOICES: [&str; 5] = [
    "Insert Tag",
    "Delete Tag",
    "Validate Code",
    "Display Tags",
    "Exit",
];

fn fill<C: Serialize>(name: &'static str, template: &'static str, context: &C) -> Result<String, Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template(name, template)?;
    tt.render(name, context)
}

/// The interactive session's menu, ending with the prompt.
pub fn menu(title: &str) -> Result<String, Error> {
    let context = Menu {
        title: title.to_string(),
        items: CHOICES
            .iter()
            .enumerate()
            .map(|(i, &label)| Item {
                number: i + 1,
                label,
            })
            .collect(),
    };

    fill("menu", MENU, &context)
}

/// One line showing the sequence; `tags` is the already rendered listing.
pub fn listing(tags: &str) -> Result<String, Error> {
    fill("listing", LISTING, &Listing { tags })
}

pub fn summary(tags: usize, errors: usize) -> Result<String, Error> {
    let context = Summary {
        tags,
        plural_tags: tags != 1,
        errors,
        plural_errors: errors != 1,
    };

    fill("summary", SUMMARY, &context)
}
