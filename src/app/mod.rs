use colored::Colorize;
use log::{ error, info };
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::error::Error;

use crate::cli::Args;
use crate::client::{ ChatError, RemoteChatClient };
use crate::history::Conversation;
use crate::models::chat::{ ChatMessage, Role };

/// One submit cycle: append the user record, call the service, append the
/// assistant record (reply text or translated error text). Returns false for
/// empty or whitespace-only input, in which case nothing is appended and no
/// request is made.
pub async fn submit(
    conversation: &mut Conversation,
    client: &RemoteChatClient,
    input: &str
) -> bool {
    let query = input.trim();
    if query.is_empty() {
        return false;
    }

    conversation.push(Role::User, query);

    let reply = match client.send(query).await {
        Ok(response) => response,
        Err(e) => {
            error!("Chat request failed: {}", e);
            format!("Error: {}", e)
        }
    };
    conversation.push(Role::Assistant, reply);

    true
}

/// Clears the conversation on both sides. The remote side is fire-and-forget;
/// the local log is emptied no matter what came back. Any remote failure is
/// returned so the caller can report it.
pub async fn clear(
    conversation: &mut Conversation,
    client: &RemoteChatClient
) -> Option<ChatError> {
    let remote_failure = client.clear_history().await.err();
    if let Some(e) = &remote_failure {
        error!("Error clearing remote chat history: {}", e);
    }
    conversation.clear();
    remote_failure
}

fn render_message(msg: &ChatMessage) {
    let tag = match msg.role {
        Role::User => msg.role.display_name().green().bold(),
        Role::Assistant => msg.role.display_name().cyan().bold(),
    };
    let stamp = format!("[{}]", msg.time).bright_black();
    println!("{} {} {}", tag, msg.content, stamp);
}

fn render_transcript(conversation: &Conversation) {
    for msg in conversation.messages() {
        render_message(msg);
    }
}

fn print_banner() {
    println!("{}", "Organic Foods Assistant".green().bold());
    println!(
        "{}",
        "Ask about products, availability, or place an order.".bright_black()
    );
    println!(
        "{}",
        "Type /clear to reset the conversation, /history to reprint it, exit to quit.\n"
            .bright_black()
    );
}

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let client = RemoteChatClient::from_args(&args)?;
    let mut conversation = Conversation::new();

    if !args.no_banner {
        print_banner();
    }

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let input = line.trim().to_string();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(&input)?;

                match input.as_str() {
                    "exit" | "quit" => {
                        break;
                    }
                    "/clear" => {
                        if let Some(e) = clear(&mut conversation, &client).await {
                            println!(
                                "{}",
                                format!("Error clearing chat history: {}", e).red()
                            );
                        }
                        println!("{}", "Chat history cleared.".bright_black());
                    }
                    "/history" => {
                        render_transcript(&conversation);
                    }
                    _ => {
                        if submit(&mut conversation, &client, &input).await {
                            // A true return means exactly one user/assistant pair was appended.
                            let len = conversation.len();
                            for msg in &conversation.messages()[len - 2..] {
                                render_message(msg);
                            }
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                return Err(Box::new(e));
            }
        }
    }

    info!("Session ended with {} messages in the log", conversation.len());
    Ok(())
}
