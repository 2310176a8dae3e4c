use super::open_store;
use crate::libs::messages::Message;
use crate::libs::store::DraftInput;
use crate::libs::todo::parse_date;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Text of the todo
    value: String,
    /// Date as YYYY-MM-DD, today when omitted
    #[arg(short, long)]
    date: Option<String>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let date = match args.date.as_deref() {
        Some(date) => parse_date(date)?,
        None => Utc::now(),
    };
    let mut draft = DraftInput::new(args.value.trim(), Some(date));

    let mut store = open_store().await?;
    match store.submit_draft(&mut draft).await? {
        Some(todo) => msg_success!(Message::TodoCreated(todo.id.unwrap_or_default())),
        None => msg_warning!(Message::TodoSubmitIgnored),
    }

    Ok(())
}
