use dialoguer::Input;
use owo_colors::OwoColorize;

use phrasevault_core::quiz;
use phrasevault_core::{OsRandom, RecordStore, SecureRandom};

use crate::app::{resolve_record, AppContext};
use crate::cli::TestArgs;

pub fn handle_test(ctx: &AppContext, args: &TestArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let mut rng = OsRandom;

    let record = match args.id {
        Some(ref id) => resolve_record(&store, id)?,
        None => {
            let mut records = store.list()?;
            if records.is_empty() {
                return Err(anyhow::anyhow!("No records stored; nothing to test"));
            }
            let index = rng.next_index(records.len())?;
            records.swap_remove(index)
        }
    };

    let test = quiz::plan(&record.words, &mut rng)?;
    let hidden = test.hidden_positions();

    if !ctx.quiet() {
        println!("Memory test for \"{}\"", record.title);
        println!("{}", masked_phrase(&record, hidden));
        println!();
    }

    let mut answers = Vec::with_capacity(hidden.len());
    for position in hidden {
        let answer: String = Input::new()
            .with_prompt(format!("Word {}", position + 1))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read answer: {}", e))?;
        answers.push(answer);
    }

    let score = test.grade(&record.words, &answers);
    if score.is_perfect() {
        println!(
            "{}",
            format!("Perfect: {}/{} words recalled", score.correct, score.total).green()
        );
    } else {
        println!(
            "{}",
            format!("{}/{} words recalled", score.correct, score.total).yellow()
        );
        println!("Full phrase: {}", record.passphrase());
    }
    Ok(())
}

fn masked_phrase(record: &phrasevault_core::PhraseRecord, hidden: &[usize]) -> String {
    record
        .words
        .words()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if hidden.contains(&index) {
                "____".to_string()
            } else {
                entry.word.clone()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
