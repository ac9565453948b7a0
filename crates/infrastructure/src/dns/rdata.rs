use portare_dns_application::ports::RecordContentValidator;
use portare_dns_domain::{DomainError, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};
use thiserror::Error;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_WIRE_LEN: usize = 255;
const MAX_CHARACTER_STRING_LEN: usize = 255;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdataError {
    #[error("Invalid IPv4 address: {0}")]
    InvalidIpv4(String),

    #[error("Invalid IPv6 address: {0}")]
    InvalidIpv6(String),

    #[error("Invalid domain name {name}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Invalid MX content: {0}")]
    InvalidMx(String),

    #[error("Text is {0} bytes, limit is 255")]
    TextTooLong(usize),

    #[error("Text contains non-ASCII characters")]
    NonAsciiText,
}

impl From<RdataError> for DomainError {
    fn from(err: RdataError) -> Self {
        DomainError::InvalidRecordContent(err.to_string())
    }
}

/// Encodes a record's textual content as rdata for its type.
pub fn encode_rdata(record_type: RecordType, content: &str) -> Result<Vec<u8>, RdataError> {
    match record_type {
        RecordType::A => encode_a(content),
        RecordType::AAAA => encode_aaaa(content),
        RecordType::CNAME => encode_name(content),
        RecordType::MX => encode_mx(content),
        RecordType::TXT => encode_character_string(content),
        // Opaque text: served as one character-string without structure.
        RecordType::NS
        | RecordType::SOA
        | RecordType::PTR
        | RecordType::SRV
        | RecordType::ANY => encode_character_string(content),
    }
}

fn encode_a(content: &str) -> Result<Vec<u8>, RdataError> {
    let addr: Ipv4Addr = content
        .trim()
        .parse()
        .map_err(|_| RdataError::InvalidIpv4(content.to_string()))?;
    Ok(addr.octets().to_vec())
}

fn encode_aaaa(content: &str) -> Result<Vec<u8>, RdataError> {
    let addr: Ipv6Addr = content
        .trim()
        .parse()
        .map_err(|_| RdataError::InvalidIpv6(content.to_string()))?;
    Ok(addr.octets().to_vec())
}

/// Uncompressed wire form of a name. The trailing dot is optional.
pub fn encode_name(name: &str) -> Result<Vec<u8>, RdataError> {
    let invalid = |reason| RdataError::InvalidName {
        name: name.to_string(),
        reason,
    };

    let trimmed = name.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let mut out = Vec::with_capacity(trimmed.len() + 2);

    if !trimmed.is_empty() {
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(invalid("empty label"));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(invalid("label longer than 63 bytes"));
            }
            if !label.is_ascii() {
                return Err(invalid("non-ASCII label"));
            }
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
    }
    out.push(0);

    if out.len() > MAX_NAME_WIRE_LEN {
        return Err(invalid("longer than 255 bytes"));
    }
    Ok(out)
}

fn encode_mx(content: &str) -> Result<Vec<u8>, RdataError> {
    let (preference, exchange) = content
        .trim()
        .split_once(' ')
        .ok_or_else(|| RdataError::InvalidMx(content.to_string()))?;
    let preference: u16 = preference
        .parse()
        .map_err(|_| RdataError::InvalidMx(content.to_string()))?;

    let exchange = encode_name(exchange)?;
    let mut out = Vec::with_capacity(2 + exchange.len());
    out.extend_from_slice(&preference.to_be_bytes());
    out.extend_from_slice(&exchange);
    Ok(out)
}

fn encode_character_string(content: &str) -> Result<Vec<u8>, RdataError> {
    if !content.is_ascii() {
        return Err(RdataError::NonAsciiText);
    }
    if content.len() > MAX_CHARACTER_STRING_LEN {
        return Err(RdataError::TextTooLong(content.len()));
    }
    let mut out = Vec::with_capacity(content.len() + 1);
    out.push(content.len() as u8);
    out.extend_from_slice(content.as_bytes());
    Ok(out)
}

/// Validates record content by encoding it.
#[derive(Debug, Default, Clone, Copy)]
pub struct RdataEncoder;

impl RecordContentValidator for RdataEncoder {
    fn validate(&self, record_type: RecordType, content: &str) -> Result<(), DomainError> {
        encode_rdata(record_type, content)?;
        Ok(())
    }
}
