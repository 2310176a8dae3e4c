use super::open_store;
use crate::libs::messages::Message;
use crate::libs::todo::TodoUpdate;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Id of the todo
    id: i64,
}

pub async fn cmd(args: CheckArgs) -> Result<()> {
    let mut store = open_store().await?;
    let Some(checked) = store.find(args.id).map(|todo| !todo.checked) else {
        msg_bail_anyhow!(Message::TodoNotFound(args.id));
    };

    if let Err(error) = store.apply(args.id, TodoUpdate::Checked(checked)) {
        msg_bail_anyhow!(error);
    }
    store.flush().await;

    if checked {
        msg_success!(Message::TodoChecked(args.id));
    } else {
        msg_success!(Message::TodoUnchecked(args.id));
    }
    Ok(())
}
