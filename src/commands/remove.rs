use super::open_store;
use crate::libs::messages::Message;
use crate::libs::todo::TodoUpdate;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Id of the todo
    id: i64,
}

/// Moves the todo to the trash, or restores it when it is already there.
pub async fn cmd(args: RemoveArgs) -> Result<()> {
    let mut store = open_store().await?;
    let Some(removed) = store.find(args.id).map(|todo| !todo.removed) else {
        msg_bail_anyhow!(Message::TodoNotFound(args.id));
    };

    if let Err(error) = store.apply(args.id, TodoUpdate::Removed(removed)) {
        msg_bail_anyhow!(error);
    }
    store.flush().await;

    if removed {
        msg_success!(Message::TodoRemoved(args.id));
    } else {
        msg_success!(Message::TodoRestored(args.id));
    }
    Ok(())
}
