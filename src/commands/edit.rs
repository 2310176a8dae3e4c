use super::open_store;
use crate::libs::messages::Message;
use crate::libs::todo::TodoUpdate;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the todo
    id: i64,
    /// New text
    value: String,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let mut store = open_store().await?;
    if let Err(error) = store.apply(args.id, TodoUpdate::Value(args.value)) {
        msg_bail_anyhow!(error);
    }
    store.flush().await;

    msg_success!(Message::TodoUpdated(args.id));
    Ok(())
}
