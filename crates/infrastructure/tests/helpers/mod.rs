pub mod builders;
pub mod dns_server_mock;

#[allow(unused_imports)]
pub use builders::{a_record, name, query_bytes, ManualClock};
#[allow(unused_imports)]
pub use dns_server_mock::{MockDnsServer, MockReply};
