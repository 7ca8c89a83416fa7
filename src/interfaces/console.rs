use super::csv::command_reader::{Operation, SessionCommand};
use super::csv::outcome_writer::CommandOutcome;
use crate::application::dispatcher::PaymentProviderService;
use crate::domain::session::{PaymentContext, SessionData, SessionInput};
use crate::error::{PaymentError, Result};
use std::collections::HashMap;

/// Replays session commands against a [`PaymentProviderService`].
///
/// Stands in for the host's persistence layer: session data returned by the
/// provider is kept in memory under the command's session label and fed back
/// on the next command for that label.
pub struct SessionConsole {
    service: PaymentProviderService,
    sessions: HashMap<String, SessionData>,
}

impl SessionConsole {
    pub fn new(service: PaymentProviderService) -> Self {
        Self {
            service,
            sessions: HashMap::new(),
        }
    }

    pub fn session(&self, label: &str) -> Option<&SessionData> {
        self.sessions.get(label)
    }

    pub async fn execute(&mut self, cmd: SessionCommand) -> Result<CommandOutcome> {
        let provider = cmd.provider.as_str();
        let service = &self.service;
        let outcome = match cmd.op {
            Operation::Create => {
                let input = session_input(&cmd, SessionData::new())?;
                let created = service.create_session(provider, input).await?;
                self.store(&cmd, created)?
            }
            Operation::Update => {
                let input = session_input(&cmd, self.stored(&cmd)?)?;
                let updated = service.update_session(provider, input).await?;
                match updated {
                    Some(data) => self.store(&cmd, data)?,
                    None => String::new(),
                }
            }
            Operation::Authorize => {
                let data = self.stored(&cmd)?;
                let context = PaymentContext::new();
                let authorized = service.authorize_payment(provider, data, context).await?;
                self.store(&cmd, authorized.data)?;
                authorized.status.to_string()
            }
            Operation::Status => {
                let data = self.stored(&cmd)?;
                service.get_status(provider, data).await?.to_string()
            }
            Operation::Capture => {
                let data = self.stored(&cmd)?;
                let captured = service.capture_payment(provider, data).await?;
                self.store(&cmd, captured)?
            }
            Operation::Refund => {
                let amount = cmd.amount.ok_or_else(|| missing(&cmd, "amount"))?;
                let data = self.stored(&cmd)?;
                let refunded = service.refund_payment(provider, data, amount).await?;
                self.store(&cmd, refunded)?
            }
            Operation::Retrieve => {
                let data = self.stored(&cmd)?;
                let retrieved = service.retrieve_payment(provider, data).await?;
                self.store(&cmd, retrieved)?
            }
            Operation::Cancel => {
                let data = self.stored(&cmd)?;
                service.cancel_payment(provider, data).await?;
                "ok".to_string()
            }
            Operation::Delete => {
                let data = self.stored(&cmd)?;
                service.delete_session(provider, data).await?;
                self.sessions.remove(&cmd.session);
                "ok".to_string()
            }
        };

        Ok(CommandOutcome {
            session: cmd.session,
            op: cmd.op.to_string(),
            outcome,
        })
    }

    fn stored(&self, cmd: &SessionCommand) -> Result<SessionData> {
        let data = self.sessions.get(&cmd.session).cloned();
        data.ok_or_else(|| unknown_session(cmd))
    }

    /// Keeps `data` for the command's session and returns it rendered as JSON.
    fn store(&mut self, cmd: &SessionCommand, data: SessionData) -> Result<String> {
        let rendered = serde_json::to_string(&data)?;
        self.sessions.insert(cmd.session.clone(), data);
        Ok(rendered)
    }
}

fn missing(cmd: &SessionCommand, field: &str) -> PaymentError {
    PaymentError::InvalidCommand(format!("`{}` requires {field}", cmd.op))
}

fn unknown_session(cmd: &SessionCommand) -> PaymentError {
    PaymentError::InvalidCommand(format!("unknown session `{}`", cmd.session))
}

fn session_input(cmd: &SessionCommand, data: SessionData) -> Result<SessionInput> {
    let amount = cmd.amount.ok_or_else(|| missing(cmd, "amount"))?;
    let currency = cmd
        .currency
        .as_deref()
        .ok_or_else(|| missing(cmd, "currency"))?;
    Ok(SessionInput::new(amount, currency).with_data(data))
}
