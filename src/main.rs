//! Confab entry point: settings, the startup menu, and the chat loop.

use std::io::{self, Write as _};

use anyhow::Result;
use clap::Parser;
use console::style;

use confab::chat::{ChatClient, ChatMessage, Transcript, TranscriptStore};
use confab::cli::{render_conversation_table, run_menu, Cli, Commands, MenuOutcome};
use confab::config::Settings;
use confab::prompt::{LineSource, StyledSink};
use confab::utils::{
    create_spinner, print_banner, print_error, print_goodbye, print_info, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    let store_dir = settings.resolve_store_dir(cli.store_dir.as_deref());

    // Listing needs no API key; handle it before requiring one.
    if let Some(Commands::List) = cli.command {
        let store = TranscriptStore::open(store_dir)?;
        return list_conversations(&store);
    }

    let api_key = settings.require_api_key()?.to_string();
    let model = cli.model.clone().unwrap_or_else(|| settings.model.clone());
    let store = TranscriptStore::open(store_dir)?;

    print_banner(env!("CARGO_PKG_VERSION"));

    let mut source = io::stdin().lock();
    let mut sink = StyledSink::stdout();

    let (name, mut transcript) = match run_menu(&store, &mut source, &mut sink)? {
        MenuOutcome::New { name } => (name, Transcript::new(settings.system_prompt.as_deref())),
        MenuOutcome::Resume { name, transcript } => (name, transcript),
        MenuOutcome::Exit => {
            print_goodbye();
            return Ok(());
        }
    };

    let client = ChatClient::new(&settings.base_url, api_key, model);
    run_chat(&client, &store, &name, &mut transcript, &mut source)?;

    print_goodbye();
    Ok(())
}

/// Print the saved-conversation table, or a note when the store is empty.
fn list_conversations(store: &TranscriptStore) -> Result<()> {
    let entries = store.entries()?;
    if entries.is_empty() {
        print_info(&format!("No conversations in {}", store.root().display()));
        return Ok(());
    }
    let mut sink = StyledSink::stdout();
    render_conversation_table(&entries, &mut sink)?;
    Ok(())
}

/// The chat loop: read a line, call the model, print and persist the
/// reply. `exit` (or end of input) saves and leaves.
fn run_chat<R>(
    client: &ChatClient,
    store: &TranscriptStore,
    name: &str,
    transcript: &mut Transcript,
    source: &mut R,
) -> Result<()>
where
    R: LineSource + ?Sized,
{
    print_info("Chat started. Type 'exit' to save and leave.");

    loop {
        print!("{} ", style("You:").cyan().bold());
        io::stdout().flush()?;
        let Some(line) = source.next_line()? else {
            break;
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("exit") {
            break;
        }

        transcript.push(ChatMessage::user(text));
        let spinner = create_spinner("Thinking...");
        match client.complete(&transcript.messages) {
            Ok(reply) => {
                spinner.finish_and_clear();
                println!(
                    "{} {}",
                    style("Bot:").magenta().bold(),
                    style(&reply).magenta()
                );
                transcript.push(ChatMessage::assistant(reply));
                store.save(name, transcript)?;
            }
            Err(err) => {
                spinner.finish_and_clear();
                // The user's message stays in the history, so the next
                // send retries it along with everything else.
                print_error(&format!("{:#}", err));
            }
        }
    }

    store.save(name, transcript)?;
    print_success(&format!("Conversation '{}' saved.", name));
    Ok(())
}
