use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::Session;
use crate::core::{AppConfig, EnvCredential, init_tracing};

/// A line typed at the prompt
#[derive(Debug, PartialEq)]
enum Input<'a> {
    Message(&'a str),
    Reset,
    History,
    Model(&'a str),
    Summary(&'a str),
    Quit,
    Unknown(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        let Some(command) = line.strip_prefix('/') else {
            return Input::Message(line);
        };
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map(|(name, arg)| (name, arg.trim()))
            .unwrap_or((command.trim(), ""));

        match name {
            "reset" => Input::Reset,
            "history" => Input::History,
            "model" => Input::Model(arg),
            "summary" => Input::Summary(arg),
            "quit" | "exit" => Input::Quit,
            _ => Input::Unknown(name),
        }
    }
}

pub async fn run(system: Option<String>) -> Result<()> {
    init_tracing("warn");

    let config = AppConfig::from_env();
    let system_prompt = system.unwrap_or(config.system_message);
    let mut session = Session::builder(&config.api_hostname)
        .model(&config.model)
        .system_prompt(&system_prompt)
        .build(&EnvCredential::default())?;

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match Input::parse(&line) {
                    Input::Message(msg) => match session.chat(msg).await {
                        Ok(reply) => println!("{}", reply),
                        Err(err) => println!("Error: {}", err),
                    },
                    Input::Reset => {
                        session.reset();
                        println!("Conversation cleared.");
                    }
                    Input::History => {
                        for msg in session.history_snapshot() {
                            println!("[{:?}] {}", msg.role(), msg.content());
                        }
                    }
                    Input::Model(model) => {
                        session.set_model(model);
                        println!("Using model {}", session.model());
                    }
                    Input::Summary(summary) => {
                        session.replace_with_summary(Some(summary), Some(&system_prompt));
                        println!("History replaced with summary.");
                    }
                    Input::Quit => break,
                    Input::Unknown(name) => println!("Unknown command: /{}", name),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
