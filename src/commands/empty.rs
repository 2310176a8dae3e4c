use super::open_store;
use crate::libs::filter::TodoFilter;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let mut store = open_store().await?;
    store.set_filter(TodoFilter::Removed);

    let count = store.visible().len();
    if count == 0 {
        msg_info!(Message::TrashAlreadyEmpty);
        return Ok(());
    }

    // the bulk delete runs in the background; wait so it survives the process
    if let Some(handle) = store.empty_trash() {
        handle.await?;
    }

    msg_success!(Message::TrashEmptied(count));
    Ok(())
}
