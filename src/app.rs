// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::net::SocketAddr;
use std::sync::Arc;

use console::style;
use secrecy::SecretString;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::server::{self, AppState};
use crate::services::anagram::handle_anagram;
use crate::services::caesar::handle_rot;
use crate::services::dictionary::Dictionary;
use crate::services::slack::client::SlackClient;
use crate::services::slack::{SlackApi, join_notification_channels};

pub struct App {
    cli: Cli,
    config: Config,
    cancel_token: CancellationToken,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = match cli.config {
            Some(ref path) => Config::load_from(path, &cli)?,
            None => Config::load(&cli)?,
        };
        debug!(
            dictionary = %config.dictionary_path.display(),
            listen_addr = %config.listen_addr,
            channels = config.notification_channels.len(),
            "config loaded"
        );
        Ok(Self {
            cli,
            config,
            cancel_token: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn run(&mut self) -> Result<()> {
        match self.cli.command {
            Some(Commands::Anagram { ref word }) => {
                let dictionary = self.load_dictionary()?;
                println!("{}", handle_anagram(&word.join(" "), &dictionary));
                Ok(())
            }
            Some(Commands::Rot { ref args }) => {
                println!("{}", handle_rot(&args.join(" ")));
                Ok(())
            }
            Some(Commands::Init) => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Some(Commands::Config) => {
                let shown = toml::to_string_pretty(&self.config.redacted())
                    .map_err(|e| Error::Config(e.to_string()))?;
                print!("{}", shown);
                Ok(())
            }
            Some(Commands::Serve { .. }) | None => self.serve().await,
        }
    }

    async fn serve(&self) -> Result<()> {
        let (oauth_token, verification_token) = self.config.require_tokens()?;
        let addr: SocketAddr = self
            .config
            .listen_addr
            .parse()
            .map_err(|_| Error::Config(format!("invalid listen_addr '{}'", self.config.listen_addr)))?;

        // Setup Ctrl+C handler with CancellationToken
        let cancel = self.cancel_token.clone();
        tokio::spawn(async move {
            signal::ctrl_c().await.ok();
            cancel.cancel();
        });

        let dictionary = Arc::new(self.load_dictionary()?);

        let slack: Arc<dyn SlackApi> = Arc::new(SlackClient::new(
            &self.config,
            SecretString::from(oauth_token),
        )?);

        self.print_status("Joining notification channels...");
        join_notification_channels(slack.as_ref(), &self.config.notification_channels).await?;

        let state = AppState::new(
            dictionary,
            slack,
            self.config.notification_channels.clone(),
            SecretString::from(verification_token),
        );

        self.print_info(&format!("Listening on {}", addr));
        server::serve(addr, state, self.cancel_token.clone()).await
    }

    fn load_dictionary(&self) -> Result<Dictionary> {
        self.print_status(&format!(
            "Loading dictionary {}...",
            self.config.dictionary_path.display()
        ));
        let dictionary = Dictionary::open(&self.config.dictionary_path)?;
        if dictionary.is_empty() {
            self.print_warning("Dictionary contains no words; every lookup will come back empty");
        }
        Ok(dictionary)
    }

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}
