use super::actions::Action;
use crate::api::{NslClient, Transport};
use crate::commands::{run_get_field, run_info, run_list, run_set_field};
use crate::config::{ClientConfig, ConfigStore};
use crate::error::BarkError;
use anyhow::{bail, Result};
use std::io::Write;

/// Runs resolved actions against an explicit config store and API client.
/// The config record is loaded on first use and replaced after every save.
pub struct Dispatcher<T> {
    store: ConfigStore,
    client: NslClient<T>,
    config: Option<ClientConfig>,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(store: ConfigStore, client: NslClient<T>) -> Self {
        Self {
            store,
            client,
            config: None,
        }
    }

    /// Every action runs even if an earlier one failed. A lone action's
    /// error is returned unchanged.
    pub fn run(&mut self, actions: &[Action], out: &mut impl Write) -> Result<()> {
        if let [action] = actions {
            return self.run_action(action, out);
        }

        let mut failed = Vec::new();
        for action in actions {
            if let Err(e) = self.run_action(action, out) {
                eprintln!("❌ {}: {e}", action.flag());
                failed.push(action.flag());
            }
        }

        if !failed.is_empty() {
            bail!("{} of {} actions failed: {}", failed.len(), actions.len(), failed.join(", "));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn config(&self) -> Option<&ClientConfig> {
        self.config.as_ref()
    }

    #[cfg(test)]
    pub fn client(&self) -> &NslClient<T> {
        &self.client
    }

    fn run_action(&mut self, action: &Action, out: &mut impl Write) -> Result<()> {
        tracing::debug!(action = action.flag(), "running action");
        match action {
            Action::Set { field, value } => {
                let config = run_set_field(&self.store, *field, value, out)?;
                self.config = Some(config);
                Ok(())
            }
            Action::Get(field) => {
                let config = cached(&self.store, &mut self.config)?;
                run_get_field(config, *field, out)
            }
            Action::Info => {
                let config = cached(&self.store, &mut self.config)?;
                run_info(&self.client, config, out)
            }
            Action::List => {
                let config = cached(&self.store, &mut self.config)?;
                run_list(&self.client, config, out)
            }
        }
    }
}

fn cached<'a>(
    store: &ConfigStore,
    slot: &'a mut Option<ClientConfig>,
) -> Result<&'a ClientConfig, BarkError> {
    if slot.is_none() {
        *slot = Some(store.load()?);
    }
    Ok(slot.get_or_insert_with(ClientConfig::default))
}
