use super::WireError;
use bytes::BufMut;

pub const HEADER_LEN: usize = 12;

/// The 16 flag bits of a DNS header, unpacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFlags {
    pub response: bool,
    /// 4 bits.
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub z: bool,
    pub authenticated_data: bool,
    pub checking_disabled: bool,
    /// 4 bits.
    pub response_code: u8,
}

impl HeaderFlags {
    pub fn from_u16(bits: u16) -> Self {
        Self {
            response: bits & 0x8000 != 0,
            opcode: ((bits >> 11) & 0x0F) as u8,
            authoritative: bits & 0x0400 != 0,
            truncated: bits & 0x0200 != 0,
            recursion_desired: bits & 0x0100 != 0,
            recursion_available: bits & 0x0080 != 0,
            z: bits & 0x0040 != 0,
            authenticated_data: bits & 0x0020 != 0,
            checking_disabled: bits & 0x0010 != 0,
            response_code: (bits & 0x000F) as u8,
        }
    }

    pub fn to_u16(&self) -> u16 {
        let mut bits = ((self.opcode as u16) & 0x0F) << 11;
        bits |= (self.response_code as u16) & 0x0F;
        for (set, mask) in [
            (self.response, 0x8000),
            (self.authoritative, 0x0400),
            (self.truncated, 0x0200),
            (self.recursion_desired, 0x0100),
            (self.recursion_available, 0x0080),
            (self.z, 0x0040),
            (self.authenticated_data, 0x0020),
            (self.checking_disabled, 0x0010),
        ] {
            if set {
                bits |= mask;
            }
        }
        bits
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: HeaderFlags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn decode(buf: &[u8]) -> Result<Self, WireError> {
        if buf.len() < HEADER_LEN {
            return Err(WireError::TooShort(buf.len()));
        }
        let word = |i: usize| u16::from_be_bytes([buf[i], buf[i + 1]]);
        Ok(Self {
            id: word(0),
            flags: HeaderFlags::from_u16(word(2)),
            question_count: word(4),
            answer_count: word(6),
            authority_count: word(8),
            additional_count: word(10),
        })
    }

    pub fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.id);
        out.put_u16(self.flags.to_u16());
        out.put_u16(self.question_count);
        out.put_u16(self.answer_count);
        out.put_u16(self.authority_count);
        out.put_u16(self.additional_count);
    }
}
