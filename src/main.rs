// Terminal chat client for an Agno AgentOS backend.
//
// A line-oriented stand-in for the browser chat UI: reads user text from
// stdin, drives one SessionController, and prints assistant replies.
// Commands: /endpoint <url>, /settings, /quit.

use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use agno_chat::{HttpBackend, Role, SessionController, SessionOptions, SubmitOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let options = SessionOptions::from_env();
    let controller = Arc::new(SessionController::new(options, Arc::new(HttpBackend::new())));

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("connected to {}\n> ", controller.endpoint()).as_bytes())
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/settings" => {
                controller.toggle_settings();
                let view = controller.view();
                if view.settings_open {
                    stdout
                        .write_all(format!("endpoint: {}\n", view.endpoint).as_bytes())
                        .await?;
                }
            }
            cmd if cmd.starts_with("/endpoint ") => {
                controller.set_endpoint(cmd.trim_start_matches("/endpoint ").trim());
            }
            text => match controller.submit(text).await {
                SubmitOutcome::Answered => {
                    let view = controller.view();
                    if let Some(turn) = view.turns.last() {
                        if turn.role == Role::Assistant {
                            stdout
                                .write_all(format!("agent: {}\n", turn.content).as_bytes())
                                .await?;
                        }
                    }
                }
                SubmitOutcome::Failed(e) => {
                    stdout
                        .write_all(format!("(no reply: {e})\n").as_bytes())
                        .await?;
                }
                SubmitOutcome::Rejected => {}
            },
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
