use super::open_store;
use crate::libs::filter::TodoFilter;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which todos to show
    #[arg(short, long, value_enum, default_value_t = TodoFilter::All)]
    filter: TodoFilter,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let mut store = open_store().await?;
    store.set_filter(args.filter);

    let visible = store.visible();
    if visible.is_empty() {
        msg_info!(Message::TodosNotFound);
        return Ok(());
    }
    View::todos(store.filter(), &visible);

    Ok(())
}
