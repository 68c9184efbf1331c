use arp_channel_application::services::MethodDispatcher;
use arp_channel_application::use_cases::GetArpTableUseCase;
use arp_channel_domain::{MethodCall, MethodResult, ARP_CHANNEL, ARP_ERROR, METHOD_GET_ARP_TABLE};
use std::sync::Arc;

mod helpers;
use helpers::{entry, FailingHandler, MockArpReader};

fn arp_dispatcher(reader: Arc<MockArpReader>) -> MethodDispatcher {
    MethodDispatcher::new(ARP_CHANNEL).register(
        METHOD_GET_ARP_TABLE,
        Arc::new(GetArpTableUseCase::new(reader)),
    )
}

#[test]
fn test_dispatch_get_arp_table_succeeds() {
    let reader = Arc::new(MockArpReader::with_entries(vec![entry(
        "192.168.1.1",
        "aa:bb:cc:dd:ee:ff",
        "wlan0",
    )]));
    let dispatcher = arp_dispatcher(reader);

    let result = dispatcher.dispatch(&MethodCall::new(METHOD_GET_ARP_TABLE));

    assert_eq!(
        result,
        MethodResult::success(r#"[{"ip":"192.168.1.1","mac":"AA:BB:CC:DD:EE:FF","device":"wlan0"}]"#)
    );
}

#[test]
fn test_unknown_method_is_not_implemented() {
    let reader = Arc::new(MockArpReader::with_entries(vec![]));
    let dispatcher = arp_dispatcher(reader.clone());

    let result = dispatcher.dispatch(&MethodCall::new("getRoutingTable"));

    assert_eq!(result, MethodResult::NotImplemented);
    assert_eq!(reader.call_count(), 0);
}

#[test]
fn test_method_names_are_case_sensitive() {
    let reader = Arc::new(MockArpReader::with_entries(vec![]));
    let dispatcher = arp_dispatcher(reader);

    assert_eq!(
        dispatcher.dispatch(&MethodCall::new("getarptable")),
        MethodResult::NotImplemented
    );
}

#[test]
fn test_handler_error_is_reported_with_code() {
    let dispatcher = MethodDispatcher::new(ARP_CHANNEL).register(
        METHOD_GET_ARP_TABLE,
        Arc::new(FailingHandler {
            code: ARP_ERROR,
            message: "Failed to read ARP table: boom",
        }),
    );

    let result = dispatcher.dispatch(&MethodCall::new(METHOD_GET_ARP_TABLE));

    assert_eq!(
        result,
        MethodResult::Error {
            code: ARP_ERROR.to_string(),
            message: "Failed to read ARP table: boom".to_string(),
        }
    );
}

#[test]
fn test_channel_and_methods() {
    let dispatcher = arp_dispatcher(Arc::new(MockArpReader::with_entries(vec![])));

    assert_eq!(dispatcher.channel(), ARP_CHANNEL);
    assert_eq!(dispatcher.methods(), vec![METHOD_GET_ARP_TABLE]);
}
