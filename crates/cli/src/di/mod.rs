use arp_channel_application::services::MethodDispatcher;
use arp_channel_application::use_cases::GetArpTableUseCase;
use arp_channel_domain::{ARP_CHANNEL, METHOD_GET_ARP_TABLE};
use arp_channel_infrastructure::system::LinuxArpReader;
use std::sync::Arc;

pub struct UseCases {
    pub get_arp_table: Arc<GetArpTableUseCase>,
}

impl UseCases {
    pub fn new() -> Self {
        let arp_reader = Arc::new(LinuxArpReader::new());

        Self {
            get_arp_table: Arc::new(GetArpTableUseCase::new(arp_reader)),
        }
    }

    pub fn arp_channel(&self) -> MethodDispatcher {
        MethodDispatcher::new(ARP_CHANNEL)
            .register(METHOD_GET_ARP_TABLE, self.get_arp_table.clone())
    }
}
