//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod roster_command;
mod roster_query;
mod roster_repository;
mod settings_command;
mod settings_query;
mod settings_repository;
mod spreadsheet_reader;

#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, LoginService};
pub(crate) use login_service::WRONG_PASSWORD_MESSAGE;
#[cfg(test)]
pub use roster_command::MockRosterCommand;
pub use roster_command::{FixtureRosterCommand, RosterCommand, StudentsAdded, StudentsRemoved};
#[cfg(test)]
pub use roster_query::MockRosterQuery;
pub use roster_query::{FixtureRosterQuery, RosterQuery};
#[cfg(test)]
pub use roster_repository::MockRosterRepository;
pub use roster_repository::{FixtureRosterRepository, RosterRepository, RosterRepositoryError};
#[cfg(test)]
pub use settings_command::MockSettingsCommand;
pub use settings_command::{FixtureSettingsCommand, SettingsCommand, SettingsUpdated};
#[cfg(test)]
pub use settings_query::MockSettingsQuery;
pub use settings_query::{FixtureSettingsQuery, SettingsQuery};
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
pub use settings_repository::{
    FixtureSettingsRepository, SettingsRepository, SettingsRepositoryError,
};
#[cfg(test)]
pub use spreadsheet_reader::MockSpreadsheetReader;
pub use spreadsheet_reader::{
    FixtureSpreadsheetReader, SpreadsheetReader, SpreadsheetReaderError,
};
