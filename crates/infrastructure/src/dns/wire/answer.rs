use super::WireError;
use bytes::BufMut;

/// A resource record in the answer section. Its owner name is always a
/// compression pointer to the question name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name_pointer: u16,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub data: Vec<u8>,
}

impl Answer {
    /// Fails when the data does not fit the 16-bit length field; nothing is written then.
    pub fn encode<B: BufMut>(&self, out: &mut B) -> Result<(), WireError> {
        let data_len =
            u16::try_from(self.data.len()).map_err(|_| WireError::DataTooLong(self.data.len()))?;
        out.put_u16(self.name_pointer);
        out.put_u16(self.rtype);
        out.put_u16(self.class);
        out.put_u32(self.ttl);
        out.put_u16(data_len);
        out.put_slice(&self.data);
        Ok(())
    }

    pub fn encoded_len(&self) -> usize {
        12 + self.data.len()
    }
}
