use super::args::Cli;
use crate::config::ConfigField;

/// One unit of work requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Set { field: ConfigField, value: String },
    Get(ConfigField),
    Info,
    List,
}

impl Action {
    pub fn flag(&self) -> &'static str {
        match self {
            Action::Set { field, .. } => field.set_flag(),
            Action::Get(field) => field.get_flag(),
            Action::Info => "--info",
            Action::List => "--list",
        }
    }
}

impl Cli {
    /// Resolves the parsed flags into the order they run in: config
    /// mutations, then reads of stored values, then API queries.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        let sets = [
            (ConfigField::Email, &self.set_email),
            (ConfigField::ApiKey, &self.set_api_key),
            (ConfigField::MissionId, &self.set_mission_id),
        ];
        for (field, value) in sets {
            if let Some(value) = value {
                actions.push(Action::Set {
                    field,
                    value: value.clone(),
                });
            }
        }

        let gets = [
            (ConfigField::Email, self.get_email),
            (ConfigField::ApiKey, self.get_api_key),
            (ConfigField::MissionId, self.get_mission_id),
        ];
        actions.extend(
            gets.into_iter()
                .filter(|(_, requested)| *requested)
                .map(|(field, _)| Action::Get(field)),
        );

        if self.info {
            actions.push(Action::Info);
        }
        if self.list {
            actions.push(Action::List);
        }

        actions
    }
}
