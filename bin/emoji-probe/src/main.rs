/*!
 * Builds the emoji catalog from an `emoji-test.txt` description file (plain
 * or gzipped) and dumps it, or scans a piece of text for emoji occurrences.
 *
 * There is no font backend here, so every entry is considered renderable.
 *
 * Usage:
 * ```
 * emoji-probe path/emoji-test.txt [-t "text to scan"] [-v]
 * ```
 */

extern crate tracing as log;

use std::path::PathBuf;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use emoji_catalog::{source, EmojiStore};

fn main() -> anyhow::Result<()> {
    let mut args = pico_args::Arguments::from_env();

    let level = if args.contains("-v") { LevelFilter::DEBUG } else { LevelFilter::INFO };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .finish();

    log::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let text: Option<String> = args.opt_value_from_str("-t")?;

    let Ok(path) = args.free_from_os_str(|s| PathBuf::try_from(s)) else {
        anyhow::bail!("No description file given");
    };

    log::info!("Loading description from: {}", path.display());
    let lines = source::read_description(&path)?;
    let lines = source::splice_after(lines, source::BONUS_ANCHOR, source::BONUS_LINES);

    let store = EmojiStore::new();
    store.refresh(lines, |_| true)?;

    let snapshot = store.load().expect("snapshot was just published");
    log::debug!("Catalog has {} groups", snapshot.catalog().len());

    match text {
        Some(text) => {
            for m in snapshot.scan(&text) {
                match snapshot.lookup(m.as_str()) {
                    Some(e) => println!("{}..{}\t{}\t{}", m.start(), m.end(), m.as_str(), e.name()),
                    None => println!("{}..{}\t{}\t(non-standard variant)", m.start(), m.end(), m.as_str()),
                }
            }
        }
        None => {
            for group in snapshot.catalog().groups() {
                println!(
                    "{} {} ({})",
                    group.icon().unwrap_or("?"),
                    group.name(),
                    group.emoji_count()
                );

                for subgroup in group.subgroups() {
                    println!("    {} ({})", subgroup.name(), subgroup.len());
                }
            }
        }
    }

    Ok(())
}
