//! # Console Session Flow
//!
//! The original controller's event handlers, re-expressed as one explicit
//! flow over explicit state. Generic over `BufRead`/`Write` so tests can
//! drive the whole session with string buffers.
//!
//! ## Session Walkthrough
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Select language: [EN FR UR VI]                                         │
//! │  > fr                    ──► Translator rebuilt (db overrides + bundle) │
//! │                                                                         │
//! │  Entrez le nombre d'articles :                                          │
//! │  > trois                 ──► errInvalidPrice? no: errInvalidCount,      │
//! │  > 3                         re-prompt until valid                      │
//! │                                                                         │
//! │  Entrez le prix de l'article 1 :                                        │
//! │  > 1,99                  ──► comma decimal accepted                     │
//! │  > (empty line)          ──► cancel: keep the partial cart              │
//! │                                                                         │
//! │  Article 1: 1.99 €                                                      │
//! │  Total: 1.99 €                                                          │
//! │                                                                         │
//! │  Enregistrer dans la base ? [y/n]                                       │
//! │  > y                     ──► save_cart_result, outcome reported         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parse errors never leave this module: they are recovered locally by
//! re-prompting. A persistence failure is logged and reported, and the
//! session ends either way.

use std::io::{self, BufRead, Write};

use tracing::{debug, error, info};

use ostoskori_core::{parse_count, parse_price, Language, Translator};
use ostoskori_db::Database;

/// Runs one interactive cart session from start to finish.
///
/// Returns `Ok(())` on a completed or cancelled session; `Err` only for
/// I/O failures on the streams themselves.
pub async fn run_session<R, W>(
    input: &mut R,
    output: &mut W,
    db: &Database,
    default_language: Language,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    // -------------------------------------------------------------------------
    // Language selection
    // -------------------------------------------------------------------------
    let language = select_language(input, output, default_language)?;
    let translator = build_translator(db, language).await;

    writeln!(output, "=== {} ===", translator.tr("title"))?;

    // -------------------------------------------------------------------------
    // Item count
    // -------------------------------------------------------------------------
    let count = match prompt_count(input, output, &translator)? {
        Some(count) => count,
        None => return Ok(()), // EOF before a valid count
    };

    // -------------------------------------------------------------------------
    // Per-item prices
    // -------------------------------------------------------------------------
    let prices = collect_prices(input, output, &translator, count)?;

    if prices.is_empty() {
        writeln!(output, "{}", translator.tr("errNoItems"))?;
        return Ok(());
    }

    let total = ostoskori_core::calculate_total(&prices);
    writeln!(output, "Total: {:.2} €", total)?;
    info!(item_count = prices.len(), total, "Cart calculated");

    // -------------------------------------------------------------------------
    // Optional save
    // -------------------------------------------------------------------------
    write!(output, "{} [y/n] ", translator.tr("saveToDb"))?;
    output.flush()?;

    if let Some(answer) = read_line(input)? {
        if answer.trim().eq_ignore_ascii_case("y") {
            save_cart(output, db, &translator, &prices, language).await?;
        }
    }

    Ok(())
}

/// Shows the language menu and reads a selection.
///
/// Empty input keeps the configured default; unrecognized codes fall back
/// to English, as the original's default-locale bundle did.
fn select_language<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_language: Language,
) -> io::Result<Language> {
    // The menu renders in the default language; the Translator proper is
    // only built once the selection is known.
    let menu = Translator::new(default_language);

    let codes: Vec<String> = Language::ALL
        .iter()
        .map(|l| l.code().to_uppercase())
        .collect();
    write!(
        output,
        "{} [{}] ",
        menu.tr("selectLanguage"),
        codes.join(" ")
    )?;
    output.flush()?;

    let language = match read_line(input)? {
        Some(line) if !line.trim().is_empty() => Language::from_code(&line),
        _ => default_language,
    };

    if language.is_right_to_left() {
        // No orientation flipping on a terminal; rendering of RTL text is
        // up to the emulator.
        debug!(language = %language, "Right-to-left language selected");
    }

    Ok(language)
}

/// Builds the translator for a language: database overrides layered over
/// the bundled catalog. A broken store degrades to bundled text only.
async fn build_translator(db: &Database, language: Language) -> Translator {
    let overrides = db.localization().overrides_or_empty(language.code()).await;
    Translator::with_overrides(language, overrides)
}

/// Prompts for the item count until the input is a positive integer.
///
/// Returns `None` only on EOF.
fn prompt_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    translator: &Translator,
) -> io::Result<Option<u32>> {
    loop {
        write!(
            output,
            "{} ({}) ",
            translator.tr("enterItemsCount"),
            translator.tr("itemsCountPlaceholder")
        )?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };

        // The validator is strict about whitespace; interactive input is
        // forgiven here, at the prompt.
        match parse_count(line.trim()) {
            Ok(count) => return Ok(Some(count)),
            Err(e) => {
                debug!(error = %e, "Rejected item count");
                writeln!(output, "{}", translator.tr("errInvalidCount"))?;
            }
        }
    }
}

/// Prompts for one price per item, 1-based.
///
/// - Invalid input re-prompts the same item with `errInvalidPrice`
/// - An empty line (or EOF) cancels: the partial cart collected so far is
///   kept, announced via `msgCancelled`
fn collect_prices<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    translator: &Translator,
    count: u32,
) -> io::Result<Vec<f64>> {
    // Grown lazily: `count` is user input and any positive integer is a
    // valid count, so reserving it up front would let a mistyped count
    // request gigabytes before the first prompt.
    let mut prices = Vec::new();

    'items: for index in 1..=count {
        loop {
            write!(output, "{} ", translator.tr_arg("promptPriceFor", index))?;
            output.flush()?;

            let line = match read_line(input)? {
                Some(line) if !line.trim().is_empty() => line,
                _ => {
                    // Cancelled: announce how many items survive
                    writeln!(output, "{}", translator.tr_arg("msgCancelled", prices.len()))?;
                    break 'items;
                }
            };

            match parse_price(&line) {
                Ok(price) => {
                    prices.push(price);
                    writeln!(
                        output,
                        "{} {}: {:.2} €",
                        translator.tr("itemWord"),
                        index,
                        price
                    )?;
                    break;
                }
                Err(e) => {
                    debug!(error = %e, "Rejected price");
                    writeln!(output, "{}", translator.tr("errInvalidPrice"))?;
                }
            }
        }
    }

    Ok(prices)
}

/// Persists the cart and reports the outcome.
///
/// The repository result is observed here, not swallowed inside the
/// store: success prints `savedToDb`, failure is logged and reported.
async fn save_cart<W: Write>(
    output: &mut W,
    db: &Database,
    translator: &Translator,
    prices: &[f64],
    language: Language,
) -> io::Result<()> {
    match db
        .cart_results()
        .save_cart_result(prices, language, None)
        .await
    {
        Ok(saved) => {
            info!(
                cart_result_id = saved.cart_result_id,
                item_rows = saved.item_rows,
                "Cart saved"
            );
            writeln!(output, "{}", translator.tr("savedToDb"))?;
        }
        Err(e) => {
            error!(error = %e, "Failed to save cart");
            writeln!(output, "{}: {}", translator.tr("messageTitle"), e)?;
        }
    }

    Ok(())
}

/// Reads one line, trimming the trailing newline.
///
/// Returns `None` at EOF.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use ostoskori_db::DbConfig;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Runs a session against scripted input, returning the rendered output.
    async fn drive(db: &Database, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();

        run_session(&mut input, &mut output, db, Language::En)
            .await
            .unwrap();

        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_happy_path_saves_cart() {
        let db = test_db().await;
        let out = drive(&db, "en\n3\n1.0\n2.5\n3.5\ny\n").await;

        assert!(out.contains("Total: 7.00 €"), "output was: {out}");
        assert!(out.contains("Shopping cart saved to database."));

        let repo = db.cart_results();
        assert_eq!(repo.count_results().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_declining_save_writes_nothing() {
        let db = test_db().await;
        let out = drive(&db, "en\n1\n4.20\nn\n").await;

        assert!(out.contains("Total: 4.20 €"));
        assert!(!out.contains("saved to database"));
        assert_eq!(db.cart_results().count_results().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_padded_count_is_accepted_at_the_prompt() {
        let db = test_db().await;
        let out = drive(&db, "en\n 2 \n1.0\n2.0\nn\n").await;

        assert!(!out.contains("Please enter a valid number of items."));
        assert!(out.contains("Total: 3.00 €"));
    }

    /// A huge (but valid) count must not reserve memory for items that
    /// were never entered; the session stays responsive and cancellable.
    #[tokio::test]
    async fn test_huge_count_then_immediate_cancel() {
        let db = test_db().await;
        let out = drive(&db, "en\n4294967295\n\n").await;

        assert!(out.contains("Entry cancelled after 0 item(s)."));
        assert!(out.contains("No items entered."));
        assert_eq!(db.cart_results().count_results().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_count_reprompts() {
        let db = test_db().await;
        let out = drive(&db, "en\nabc\n-1\n2\n1.0\n2.0\nn\n").await;

        let reprompts = out.matches("Please enter a valid number of items.").count();
        assert_eq!(reprompts, 2);
        assert!(out.contains("Total: 3.00 €"));
    }

    #[tokio::test]
    async fn test_invalid_price_reprompts_same_item() {
        let db = test_db().await;
        let out = drive(&db, "en\n1\noops\n2,49\nn\n").await;

        assert!(out.contains("Please enter a valid price."));
        // Comma decimal accepted on the retry
        assert!(out.contains("Item 1: 2.49 €"));
    }

    #[tokio::test]
    async fn test_cancel_keeps_partial_cart() {
        let db = test_db().await;
        let out = drive(&db, "en\n3\n1.50\n\n").await;

        assert!(out.contains("Entry cancelled after 1 item(s)."));
        assert!(out.contains("Total: 1.50 €"));
    }

    #[tokio::test]
    async fn test_immediate_cancel_shows_no_items() {
        let db = test_db().await;
        let out = drive(&db, "en\n2\n\n").await;

        assert!(out.contains("Entry cancelled after 0 item(s)."));
        assert!(out.contains("No items entered."));
        assert!(!out.contains("Total:"));
    }

    #[tokio::test]
    async fn test_french_session_uses_french_catalog() {
        let db = test_db().await;
        let out = drive(&db, "fr\nzut\n1\n9.99\nn\n").await;

        assert!(out.contains("Veuillez entrer un nombre d'articles valide."));
        assert!(out.contains("Article 1: 9.99 €"));
    }

    #[tokio::test]
    async fn test_database_override_wins_over_bundle() {
        let db = test_db().await;
        db.localization()
            .upsert("en", "savedToDb", "Stored!")
            .await
            .unwrap();

        let out = drive(&db, "en\n1\n1.0\ny\n").await;
        assert!(out.contains("Stored!"));
        assert!(!out.contains("Shopping cart saved to database."));
    }

    #[tokio::test]
    async fn test_saved_language_matches_session() {
        let db = test_db().await;
        drive(&db, "vi\n1\n5.0\ny\n").await;

        let repo = db.cart_results();
        let parent = repo.get_result(1).await.unwrap().unwrap();
        assert_eq!(parent.language, "vi");
        assert_eq!(parent.item_count, 1);
    }

    #[tokio::test]
    async fn test_eof_at_count_prompt_ends_cleanly() {
        let db = test_db().await;
        // Input ends right after language selection
        let out = drive(&db, "en\n").await;

        assert!(!out.contains("Total:"));
        assert_eq!(db.cart_results().count_results().await.unwrap(), 0);
    }
}
