//! Highlights a sample of Automath notation on the terminal.
//!
//! Run with `RUST_LOG=debug` to see lexer recovery messages.

use anyhow::Result;
use automath_lexer::lexer::{format_tokens, metadata};
use automath_lexer::{Category, Dialect, Lexer, Token};
use colored::{ColoredString, Colorize};

const SAMPLE: &str = "# The following snippet
# >>> a *         [b:prop] imp : prop := PRIM
# >>>   * [p:[z:term]prop] for : prop := PRIM
# expands to:
a * b : prop := ---
b * imp : prop := PRIM
  * p : [z:term]prop := ---
p * for : prop := PRIM";

fn paint(token: &Token<'_>) -> ColoredString {
    match token.category {
        Category::Text => token.text.normal(),
        Category::Operator => token.text.bright_black(),
        Category::ClassName => token.text.green().bold(),
        Category::PseudoKeyword => token.text.blue(),
        Category::FunctionName => token.text.cyan(),
        Category::VariableName => token.text.yellow(),
        Category::Comment | Category::MultilineComment => token.text.white().italic(),
        Category::Error => token.text.on_red(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let examples = vec![
        ("Standard", Dialect::Standard, SAMPLE),
        ("Signed", Dialect::Signed, "+ a : prop := PRIM\n- b := PRIM : prop\n"),
    ];

    println!("{} ({})", metadata::NAME.bold(), metadata::FILENAMES.join(", "));

    for (name, dialect, source) in examples {
        println!("\n{}", format!("=== {} ===", name).blue().bold());

        let tokens: Vec<_> = Lexer::with_dialect(source, dialect).collect();
        for token in &tokens {
            print!("{}", paint(token));
        }
        println!();

        log::debug!("tokens:\n{}", format_tokens(&tokens));
        println!("{}", serde_json::to_string(&tokens[..3.min(tokens.len())])?);
    }

    Ok(())
}
