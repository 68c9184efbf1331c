use arp_channel_application::services::MethodDispatcher;
use arp_channel_infrastructure::channel::LineChannel;
use std::sync::Arc;
use tokio::io::BufReader;

pub async fn serve_stdio(dispatcher: Arc<MethodDispatcher>) -> anyhow::Result<u64> {
    let channel = LineChannel::new(dispatcher);
    let served = channel
        .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    Ok(served)
}
