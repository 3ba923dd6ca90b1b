use crate::keychain::Keychain;
use crate::view_control::signal::ViewExitSignal;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[async_trait]
pub trait View: Sync {
    fn type_name(&self) -> &'static str;
    /// Runs the view until it decides where to go next.
    async fn run(&self, keys: Arc<Keychain>) -> ViewExitSignal;
}

/// Line source for interactive views.
pub(crate) fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(tokio::io::stdin()).lines()
}

/// Prints a prompt without a trailing newline and flushes it out.
pub(crate) fn prompt(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}
