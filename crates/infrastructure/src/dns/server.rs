use crate::dns::rdata::encode_rdata;
use crate::dns::wire::{Answer, Message};
use bytes::Bytes;
use portare_dns_application::use_cases::{ResolveQueryUseCase, ZoneResolution};
use portare_dns_domain::{DnsQuery, ResponseCode};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns one query datagram into its response datagram.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// `None` means the datagram is dropped without a reply.
    pub async fn handle_datagram(&self, datagram: &[u8]) -> Option<Bytes> {
        let query = match Message::decode_query(datagram) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = %e, len = datagram.len(), "Dropping malformed datagram");
                return None;
            }
        };

        let (response_code, answers) = self.answer(&query).await;

        debug!(
            id = query.header.id,
            domain = %query.question.name,
            qtype = query.question.qtype,
            response_code = %response_code,
            answers = answers.len(),
            "Sending response"
        );

        match query.into_response(response_code, answers).encode() {
            Ok(wire) => Some(wire),
            Err(e) => {
                warn!(error = %e, "Failed to encode response");
                None
            }
        }
    }

    async fn answer(&self, query: &Message) -> (ResponseCode, Vec<Answer>) {
        let question = &query.question;

        let Some(record_type) = question.record_type() else {
            debug!(qtype = question.qtype, "Unsupported query type");
            return (ResponseCode::NotImp, vec![]);
        };

        let dns_query = DnsQuery::new(question.name.as_str(), record_type);
        let resolution = match self.use_case.execute(&dns_query).await {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!(domain = %question.name, error = %e, "Zone lookup failed");
                return (ResponseCode::ServFail, vec![]);
            }
        };
        debug!(
            domain = %question.name,
            zone = resolution.zone.as_deref().unwrap_or("-"),
            response_code = %resolution.response_code,
            "Query resolved"
        );

        let name_pointer = match query.question_name_pointer() {
            Ok(pointer) => pointer,
            Err(e) => {
                warn!(error = %e, "Cannot point at question name");
                return (ResponseCode::ServFail, vec![]);
            }
        };

        match build_answers(&resolution, name_pointer) {
            Ok(answers) => (resolution.response_code, answers),
            Err(e) => {
                warn!(domain = %question.name, error = %e, "Failed to encode record data");
                (ResponseCode::ServFail, vec![])
            }
        }
    }
}

/// One answer per record, in record set order.
fn build_answers(
    resolution: &ZoneResolution,
    name_pointer: u16,
) -> Result<Vec<Answer>, crate::dns::rdata::RdataError> {
    let mut answers = Vec::with_capacity(resolution.answer_count());
    for record_set in &resolution.record_sets {
        for record in record_set.enabled_records() {
            answers.push(Answer {
                name_pointer,
                rtype: record_set.record_type.to_u16(),
                class: record_set.record_class.to_u16(),
                ttl: record_set.ttl,
                data: encode_rdata(record_set.record_type, &record.content)?,
            });
        }
    }
    Ok(answers)
}
