use std::future::Future;

use serde::Deserialize;

/// How the accept loop runs each connection handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Await the handler before accepting again. Connections are served
    /// strictly in arrival order.
    Inline,
    /// Spawn one task per connection.
    #[default]
    Spawn,
}

impl DispatchMode {
    pub async fn dispatch<F>(self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        match self {
            DispatchMode::Inline => task.await,
            DispatchMode::Spawn => {
                tokio::spawn(task);
            }
        }
    }
}
