use super::open_store;
use crate::libs::messages::Message;
use crate::libs::todo::{parse_date, TodoUpdate};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DateArgs {
    /// Id of the todo
    id: i64,
    /// New date as YYYY-MM-DD; omit to clear it
    date: Option<String>,
}

pub async fn cmd(args: DateArgs) -> Result<()> {
    let date = args.date.as_deref().map(parse_date).transpose()?;

    let mut store = open_store().await?;
    if let Err(error) = store.apply(args.id, TodoUpdate::CompletedAt(date)) {
        msg_bail_anyhow!(error);
    }
    store.flush().await;

    msg_success!(Message::TodoUpdated(args.id));
    Ok(())
}
