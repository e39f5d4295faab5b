mod handle_dns_query;
mod local_zone;

pub use handle_dns_query::{AnswerSource, HandleDnsQueryUseCase};
pub use local_zone::{answer_from_zones, LocalAnswer};
