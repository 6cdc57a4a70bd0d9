//! Interactive chat loop: reads user lines, streams replies, renders history.

use std::io::Write;
use std::time::Duration;

use tokio::io::AsyncBufReadExt;

use questline_ai::{MistralClient, MistralConfig, Role, Session};
use questline_config::QuestlineConfig;

/// A parsed line of REPL input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Reset,
    History,
    Usage,
    Say(String),
}

/// Parse a raw input line. Returns `None` for blank lines, which the loop
/// ignores so the session never sees an empty user turn.
fn parse_input(line: &str) -> Option<Input> {
    let trimmed = line.trim();
    match trimmed {
        "" => None,
        "/quit" | "/exit" => Some(Input::Quit),
        "/reset" => Some(Input::Reset),
        "/history" => Some(Input::History),
        "/usage" => Some(Input::Usage),
        _ => Some(Input::Say(trimmed.to_string())),
    }
}

pub async fn run(
    config: QuestlineConfig,
    model_override: Option<String>,
) -> questline_common::Result<()> {
    let model = model_override.unwrap_or_else(|| config.model.id.clone());

    let mistral_config = MistralConfig::from_env()?
        .with_model(model)
        .with_temperature(config.model.temperature)
        .with_max_tokens(config.model.max_tokens)
        .with_connect_timeout(Duration::from_secs(config.chat.connect_timeout_secs))
        .with_request_timeout(Duration::from_secs(config.chat.request_timeout_secs));

    tracing::info!(model = %mistral_config.model, "Starting chat session");

    let client = MistralClient::new(mistral_config);
    let mut session = Session::new(&config.chat.system_prompt);

    println!("Educational Adventure Bot");
    println!("Choose a subject and start exploring.");
    println!("Commands: /reset, /history, /usage, /quit");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        prompt("you> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            None => continue,
            Some(Input::Quit) => break,
            Some(Input::Reset) => {
                session.reset();
                println!("Started a new adventure.");
            }
            Some(Input::History) => render_history(&session),
            Some(Input::Usage) => {
                let tracker = session.tracker();
                println!(
                    "{} calls, {} input + {} output tokens",
                    tracker.call_count(),
                    tracker.total().input_tokens,
                    tracker.total().output_tokens
                );
            }
            Some(Input::Say(text)) => {
                prompt("guide> ");
                let result = session
                    .submit_streaming(
                        &client,
                        text,
                        Box::new(|chunk| {
                            print!("{chunk}");
                            let _ = std::io::stdout().flush();
                        }),
                    )
                    .await;

                match result {
                    Ok(_) => println!(),
                    // Non-fatal: the transcript keeps the user turn, so the
                    // next submission retries with the same history.
                    Err(e) => {
                        println!();
                        eprintln!("An error occurred: {e}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) {
    print!("{label}");
    let _ = std::io::stdout().flush();
}

fn render_history(session: &Session) {
    if session.display_turns().is_empty() {
        println!("No turns yet.");
        return;
    }
    for turn in session.display_turns() {
        let who = match turn.role {
            Role::User => "you",
            Role::Assistant => "guide",
            Role::System => continue,
        };
        println!("{who}> {}", turn.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_parse_to_none() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   "), None);
        assert_eq!(parse_input("\t"), None);
    }

    #[test]
    fn commands_parse() {
        assert_eq!(parse_input("/quit"), Some(Input::Quit));
        assert_eq!(parse_input("/exit"), Some(Input::Quit));
        assert_eq!(parse_input("/reset"), Some(Input::Reset));
        assert_eq!(parse_input("/history"), Some(Input::History));
        assert_eq!(parse_input("/usage"), Some(Input::Usage));
    }

    #[test]
    fn chat_text_is_trimmed() {
        assert_eq!(
            parse_input("  teach me fractions  "),
            Some(Input::Say("teach me fractions".into()))
        );
    }
}
