use super::WireError;
use bytes::BufMut;
use portare_dns_domain::RecordType;

const MAX_NAME_WIRE_LEN: usize = 255;

/// The question entry of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Dot-joined labels with a trailing dot; the root is `"."`.
    pub name: String,
    /// Raw label bytes through the zero terminator, echoed back verbatim.
    pub original_name: Vec<u8>,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    /// Decodes the question starting at `offset`. Returns it with the offset just past it.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let mut pos = offset;
        let mut name = String::new();

        loop {
            let len_byte = *buf.get(pos).ok_or(WireError::Truncated(pos))?;
            if len_byte == 0 {
                pos += 1;
                break;
            }
            if len_byte & 0xC0 != 0 {
                return Err(WireError::CompressedLabel(len_byte));
            }

            let label_len = len_byte as usize;
            let start = pos + 1;
            let end = start + label_len;
            let label = buf.get(start..end).ok_or(WireError::Truncated(start))?;
            if let Some(i) = label.iter().position(|b| !b.is_ascii()) {
                return Err(WireError::NonAsciiLabel(start + i));
            }

            // Label bytes are ASCII, so each maps to one char.
            name.extend(label.iter().map(|&b| b as char));
            name.push('.');
            pos = end;

            if pos - offset >= MAX_NAME_WIRE_LEN {
                return Err(WireError::NameTooLong);
            }
        }

        if name.is_empty() {
            name.push('.');
        }
        let original_name = buf[offset..pos].to_vec();

        let fixed = buf.get(pos..pos + 4).ok_or(WireError::Truncated(pos))?;
        let qtype = u16::from_be_bytes([fixed[0], fixed[1]]);
        let qclass = u16::from_be_bytes([fixed[2], fixed[3]]);

        Ok((
            Self {
                name,
                original_name,
                qtype,
                qclass,
            },
            pos + 4,
        ))
    }

    pub fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_slice(&self.original_name);
        out.put_u16(self.qtype);
        out.put_u16(self.qclass);
    }

    /// `None` for query types the resolver does not implement.
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }

    pub fn encoded_len(&self) -> usize {
        self.original_name.len() + 4
    }
}
