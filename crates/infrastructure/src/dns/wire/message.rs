use super::{Answer, Header, Question, WireError, HEADER_LEN};
use bytes::{Bytes, BytesMut};
use portare_dns_domain::ResponseCode;

/// Shortest datagram that can hold a header and a question.
pub const MIN_QUERY_LEN: usize = HEADER_LEN + 5;

const MAX_POINTER_OFFSET: usize = 0x3FFF;

/// Pointer to a name at `offset` bytes from the start of the message.
pub fn compression_pointer(offset: usize) -> Result<u16, WireError> {
    if offset > MAX_POINTER_OFFSET {
        return Err(WireError::PointerOutOfRange(offset));
    }
    Ok(0xC000 | offset as u16)
}

/// A single-question DNS message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub question: Question,
    pub answers: Vec<Answer>,
}

impl Message {
    /// Decodes the header and the first question of a query datagram.
    pub fn decode_query(buf: &[u8]) -> Result<Self, WireError> {
        if buf.len() < MIN_QUERY_LEN {
            return Err(WireError::TooShort(buf.len()));
        }
        let header = Header::decode(buf)?;
        let (question, _) = Question::decode(buf, HEADER_LEN)?;
        Ok(Self {
            header,
            question,
            answers: Vec::new(),
        })
    }

    /// Pointer every answer uses to refer back to the question name.
    pub fn question_name_pointer(&self) -> Result<u16, WireError> {
        // The name opens the question section.
        compression_pointer(HEADER_LEN)
    }

    /// Turns the query into its response: QR and RCODE set, original question kept.
    pub fn into_response(mut self, response_code: ResponseCode, answers: Vec<Answer>) -> Self {
        self.header.flags.response = true;
        self.header.flags.response_code = response_code.header_bits();
        self.answers = answers;
        self
    }

    /// Serializes the message with the header counts matching the sections written.
    pub fn encode(&self) -> Result<Bytes, WireError> {
        let answer_count = u16::try_from(self.answers.len())
            .map_err(|_| WireError::TooManyAnswers(self.answers.len()))?;
        let header = Header {
            question_count: 1,
            answer_count,
            authority_count: 0,
            additional_count: 0,
            ..self.header
        };

        let capacity = HEADER_LEN
            + self.question.encoded_len()
            + self.answers.iter().map(Answer::encoded_len).sum::<usize>();
        let mut out = BytesMut::with_capacity(capacity);
        header.encode(&mut out);
        self.question.encode(&mut out);
        for answer in &self.answers {
            answer.encode(&mut out)?;
        }
        Ok(out.freeze())
    }
}
