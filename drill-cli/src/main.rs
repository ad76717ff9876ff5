//! Drill CLI
//!
//! Builds CSS selectors from fragments and works with rectangles as JSON.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use drill_css::{CompoundSelector, Fragment, FragmentKind, Selector, combine};
use drill_objects::{Rectangle, Shape, from_text, to_text, to_text_pretty};
use owo_colors::OwoColorize;
use serde_json::Value;
use strum::IntoEnumIterator;

/// Drill: selector builder and object helpers
#[derive(Parser, Debug)]
#[command(name = "drill")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector
    drill selector element=a id=main class=x class=y

    # Combined selectors (quote the combinator)
    drill selector element=div id=a '>' element=span '+' class=note

    # Area of a rectangle
    drill rect 10 20

    # Decode a rectangle from JSON
    drill area '{"width": 3, "height": 4}'
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from `kind=value` fragments and combinator tokens
    Selector {
        /// Fragments (`class=nav`) and combinators (`>`, `+`, `~`, `' '`)
        #[arg(value_name = "PART", required = true)]
        parts: Vec<String>,

        /// Also print the selector's specificity
        #[arg(long)]
        specificity: bool,
    },

    /// List the fragment kinds in the order they must be given
    Kinds,

    /// Print the area of a rectangle
    #[command(allow_negative_numbers = true)]
    Rect {
        /// Horizontal extent
        width: f64,

        /// Vertical extent
        height: f64,

        /// Print the rectangle as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Decode a rectangle from JSON and print its area
    Area {
        /// JSON object with `width` and `height`
        #[arg(value_name = "JSON")]
        text: String,
    },

    /// Decode any JSON value and encode it again
    Roundtrip {
        /// JSON text
        #[arg(value_name = "JSON")]
        text: String,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Selector { parts, specificity } => {
            let selector = build_selector(&parts)?;
            println!("{}", selector.render());
            if specificity {
                println!("{} {}", "specificity".cyan().bold(), selector.specificity());
            }
        }
        Command::Kinds => {
            for kind in FragmentKind::iter() {
                let example = format!("{}value{}", kind.prefix(), kind.suffix());
                let repeat = if kind.is_singleton() { "once" } else { "repeatable" };
                println!("{:<15} {example:<10} {}", kind.to_string().bold(), repeat.dimmed());
            }
        }
        Command::Rect {
            width,
            height,
            json,
        } => {
            let rect = Rectangle::new(width, height);
            if json {
                println!("{}", to_text(&rect)?);
            } else {
                print_area(&rect);
            }
        }
        Command::Area { text } => {
            let rect: Rectangle = from_text(&text).context("Failed to decode rectangle")?;
            print_area(&rect);
        }
        Command::Roundtrip { text, pretty } => {
            let value: Value = from_text(&text).context("Failed to decode JSON")?;
            let encoded = if pretty {
                to_text_pretty(&value)?
            } else {
                to_text(&value)?
            };
            println!("{encoded}");
        }
    }

    Ok(())
}

fn print_area(shape: &impl Shape) {
    println!("{} {}", "area".green().bold(), shape.area());
}

/// Fold command line parts into a selector, left to right.
///
/// Parts containing `=` are fragments added to the current compound; any
/// other part is a combinator that closes the current compound.
fn build_selector(parts: &[String]) -> Result<Selector> {
    let mut left: Option<(Selector, &str)> = None;
    let mut current = CompoundSelector::new();

    for part in parts {
        if part.contains('=') {
            let fragment: Fragment = part
                .parse()
                .with_context(|| format!("Invalid fragment '{part}'"))?;
            current = current
                .add(fragment)
                .with_context(|| format!("Cannot add '{part}'"))?;
        } else {
            if current.is_empty() {
                bail!("Combinator '{part}' must follow a selector");
            }
            let finished = join(left.take(), std::mem::take(&mut current));
            left = Some((finished, part.as_str()));
        }
    }

    if current.is_empty() {
        match left {
            Some((_, combinator)) => bail!("Missing selector after combinator '{combinator}'"),
            None => bail!("No fragments given"),
        }
    }
    Ok(join(left, current))
}

fn join(left: Option<(Selector, &str)>, right: CompoundSelector) -> Selector {
    match left {
        Some((left, combinator)) => combine(left, combinator, right).into(),
        None => right.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_build_compound_selector() {
        let selector =
            build_selector(&parts(&["element=a", "id=main", "class=x", "class=y"])).unwrap();
        assert_eq!(selector.render(), "a#main.x.y");
    }

    #[test]
    fn test_build_combined_selector() {
        let selector = build_selector(&parts(&[
            "element=div",
            "id=a",
            ">",
            "element=span",
            "+",
            "class=note",
        ]))
        .unwrap();
        assert_eq!(selector.render(), "div#a > span + .note");
    }

    #[test]
    fn test_build_descendant_selector() {
        let selector = build_selector(&parts(&["element=nav", " ", "element=a"])).unwrap();
        assert_eq!(selector.render(), "nav a");
    }

    #[test]
    fn test_build_reports_builder_errors() {
        let err = build_selector(&parts(&["class=x", "element=a"])).unwrap_err();
        assert_eq!(err.to_string(), "Cannot add 'element=a'");
        assert_eq!(
            err.root_cause().to_string(),
            "element cannot be added after class"
        );
    }

    #[test]
    fn test_build_rejects_dangling_combinators() {
        assert!(build_selector(&parts(&[">", "element=a"])).is_err());
        assert!(build_selector(&parts(&["element=a", ">"])).is_err());
        assert!(build_selector(&parts(&["element=a", ">", "~", "element=b"])).is_err());
        assert!(build_selector(&[]).is_err());
    }

    #[test]
    fn test_build_rejects_unknown_kind() {
        let err = build_selector(&parts(&["tag=div"])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid fragment 'tag=div'");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rect_accepts_negative_dimensions() {
        let cli = Cli::try_parse_from(["drill", "rect", "-2", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Rect { width, height, json: false } if width == -2.0 && height == 3.0
        ));
    }
}
